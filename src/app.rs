//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wires the browser transport and storage into one `SessionStore` and
//! one `ApiClient`, provides them as `Services`, and mirrors the session into
//! an `RwSignal<Session>` so the guard and header re-render on every change.
//! Every route is wrapped in `RouteGate` with the requirement its
//! `AppRoute` declares.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::header::AppHeader;
use crate::components::notice_banner::NoticeBanner;
use crate::components::route_gate::{LandingOverride, RouteGate};
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::auth::AuthGateway;
use crate::net::transport::{BrowserTransport, Transport};
use crate::pages::{
    auth::AuthPage, create_game::CreateGamePage, dashboard::DashboardPage, join_game::JoinGamePage,
    lobby::LobbyPage, lobby_admin::LobbyAdminPage, not_found::NotFoundPage, onboard::OnboardPage,
    profile::ProfilePage,
};
use crate::state::notice::NoticeState;
use crate::state::session::{Session, SessionStore};
use crate::routes::AppRoute;
use crate::util::storage::{BrowserStore, KeyValueStore};

/// Non-reactive handles shared by every page.
#[derive(Clone)]
pub struct Services {
    pub session: SessionStore,
    pub api: ApiClient,
    pub storage: Arc<dyn KeyValueStore>,
}

impl Services {
    /// Wire the store, gateway and client over one transport.
    pub fn new(config: AppConfig, transport: Arc<dyn Transport>, storage: Arc<dyn KeyValueStore>) -> Self {
        let gateway = AuthGateway::new(transport.clone(), config.clone());
        let session = SessionStore::new(storage.clone(), gateway);
        let api = ApiClient::new(transport, config, Arc::new(session.clone()));
        Self { session, api, storage }
    }

    pub fn browser() -> Self {
        Self::new(AppConfig::from_env(), Arc::new(BrowserTransport), Arc::new(BrowserStore))
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::browser();
    let session = RwSignal::new(services.session.snapshot());
    let notices = RwSignal::new(NoticeState::default());

    services.session.subscribe(move |next: &Session| session.set(next.clone()));

    #[cfg(feature = "csr")]
    {
        let store = services.session.clone();
        leptos::task::spawn_local(async move { store.initialize().await });
    }

    provide_context(services);
    provide_context(session);
    provide_context(notices);
    provide_context(LandingOverride::new());

    view! {
        <Title text="Secret Santa"/>

        <Router>
            <AppHeader/>
            <NoticeBanner/>
            <main class="app-main">
                <Routes fallback=|| view! { <RouteGate requirement={AppRoute::NotFound.requirement()}><NotFoundPage/></RouteGate> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RouteGate requirement={AppRoute::Entry.requirement()}><AuthPage/></RouteGate> }
                    />
                    <Route
                        path=StaticSegment("onboard")
                        view=|| view! { <RouteGate requirement={AppRoute::Onboarding.requirement()}><OnboardPage/></RouteGate> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RouteGate requirement={AppRoute::Dashboard.requirement()}><DashboardPage/></RouteGate> }
                    />
                    <Route path=StaticSegment("home") view=|| view! { <Redirect path="/dashboard"/> }/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <RouteGate requirement={AppRoute::Profile.requirement()}><ProfilePage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("create"))
                        view=|| view! { <RouteGate requirement={AppRoute::CreateGame.requirement()}><CreateGamePage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("join"))
                        view=|| view! { <RouteGate requirement={AppRoute::JoinGame { code: None }.requirement()}><JoinGamePage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("game"), StaticSegment("join"), ParamSegment("code"))
                        view=|| view! { <RouteGate requirement={AppRoute::JoinGame { code: None }.requirement()}><JoinGamePage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("lobby"), ParamSegment("code"))
                        view=|| view! { <RouteGate requirement={AppRoute::Lobby { code: String::new() }.requirement()}><LobbyPage/></RouteGate> }
                    />
                    <Route
                        path=(StaticSegment("lobby"), ParamSegment("code"), StaticSegment("admin"))
                        view=|| view! { <RouteGate requirement={AppRoute::LobbyAdmin { code: String::new() }.requirement()}><LobbyAdminPage/></RouteGate> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
