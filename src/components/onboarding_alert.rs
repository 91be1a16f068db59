use leptos::prelude::*;

use crate::routes::AppRoute;

/// Nudge shown on the dashboard until the user has filled in preferences.
#[component]
pub fn OnboardingAlert() -> impl IntoView {
    view! {
        <div class="onboarding-alert" role="alert">
            <p>"Tell your Secret Santa what you like before the draw."</p>
            <a class="btn btn--primary" href=AppRoute::Onboarding.path()>
                "Set preferences"
            </a>
        </div>
    }
}
