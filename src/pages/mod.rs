//! Routed screens.
//!
//! Pages own their signals and delegate request sequencing to `crate::state`.
//! `resolve` applies the shared outcome handling: failures become notices,
//! redirects are queued on the page's redirect signal, stale results vanish.
//! Navigation happens in one effect per page so async tasks and callbacks
//! only ever capture signals.

pub mod auth;
pub mod create_game;
pub mod dashboard;
pub mod join_game;
pub mod lobby;
pub mod lobby_admin;
pub mod not_found;
pub mod onboard;
pub mod profile;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::notice_banner::notify;
use crate::routes::AppRoute;
use crate::state::notice::{NoticeKind, NoticeState};
use crate::state::request::ScreenOutcome;

/// Signal that navigates to whatever route is written into it.
pub(crate) fn use_redirect() -> RwSignal<Option<AppRoute>> {
    let target = RwSignal::new(None::<AppRoute>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(route) = target.get() {
            target.set(None);
            navigate(&route.path(), NavigateOptions::default());
        }
    });
    target
}

pub(crate) fn resolve<T>(
    outcome: ScreenOutcome<T>,
    notices: RwSignal<NoticeState>,
    redirect: RwSignal<Option<AppRoute>>,
) -> Option<T> {
    match outcome {
        ScreenOutcome::Done(value) => Some(value),
        ScreenOutcome::Failed(err) => {
            notify(notices, NoticeKind::Error, err.to_string());
            None
        }
        ScreenOutcome::Redirect(route) => {
            redirect.set(Some(route));
            None
        }
        ScreenOutcome::Stale => None,
    }
}
