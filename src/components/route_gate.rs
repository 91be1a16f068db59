//! Applies the guard decision for a route to its page.
//!
//! While the session is hydrating the page is not mounted at all, so pages can
//! assume a settled session when they run.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading::Loading;
use crate::routes::AppRoute;
use crate::state::session::Session;
use crate::util::auth::{GuardDecision, RouteRequirement, decide};

/// Where the entry screen's gate should send the user once they are signed
/// in, when that is not the dashboard (new accounts go to onboarding).
#[derive(Clone, Copy)]
pub struct LandingOverride(RwSignal<Option<AppRoute>>);

impl LandingOverride {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn set(self, route: AppRoute) {
        self.0.update_untracked(|r| *r = Some(route));
    }

    pub fn clear(self) {
        self.0.update_untracked(|r| *r = None);
    }

    fn take(self) -> Option<AppRoute> {
        let mut taken = None;
        self.0.update_untracked(|r| taken = r.take());
        taken
    }
}

impl Default for LandingOverride {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn RouteGate(requirement: RouteRequirement, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let landing = use_context::<LandingOverride>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| decide(session.get().status, requirement));

    Effect::new(move || {
        if let GuardDecision::Redirect(route) = decision.get() {
            let route = match (requirement, landing) {
                (RouteRequirement::GuestOnly, Some(landing)) => landing.take().unwrap_or(route),
                _ => route,
            };
            log::debug!("guard: redirecting to {}", route.path());
            navigate(&route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render fallback=|| view! { <Loading/> }>
            {children()}
        </Show>
    }
}
