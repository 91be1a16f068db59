use leptos::prelude::*;

use crate::app::Services;
use crate::routes::AppRoute;
use crate::state::session::Session;

/// Top bar with the current user's name, profile link and logout.
///
/// Logging out only ends the session; the route gate of the current page
/// then sends the user to the entry screen.
#[component]
pub fn AppHeader() -> impl IntoView {
    let services = expect_context::<Services>();
    let session = expect_context::<RwSignal<Session>>();

    let user_name = move || session.get().current_user.map(|u| u.name).unwrap_or_default();
    let on_logout = move |_| services.session.logout();

    view! {
        <Show when=move || session.get().is_authenticated()>
            <header class="app-header toolbar">
                <a class="app-header__brand" href=AppRoute::Dashboard.path()>
                    "Secret Santa"
                </a>
                <span class="toolbar__spacer"></span>
                <a class="app-header__user" href=AppRoute::Profile.path() title="Edit profile">
                    {user_name}
                </a>
                <button class="btn toolbar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </header>
        </Show>
    }
}
