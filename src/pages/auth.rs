//! Entry screen: login and signup on one form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::route_gate::LandingOverride;
use crate::routes::AppRoute;
use crate::state::preferences::is_valid_email;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Signup => "Create your account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Log in",
            Self::Signup => "Sign up",
        }
    }

    /// Where the entry gate sends the user after success. New accounts go
    /// straight to preferences.
    pub fn landing(self) -> AppRoute {
        match self {
            Self::Login => AppRoute::Dashboard,
            Self::Signup => AppRoute::Onboarding,
        }
    }
}

/// Client-side checks before anything is sent.
pub fn validate_auth_form(mode: AuthMode, name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if mode == AuthMode::Signup && name.trim().is_empty() {
        return Err("Name is required.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let services = expect_context::<crate::app::Services>();
    let landing = expect_context::<LandingOverride>();
    let mode = RwSignal::new(AuthMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = mode.get();
        let (name_value, email_value, password_value) = (name.get(), email.get().trim().to_owned(), password.get());
        if let Err(msg) = validate_auth_form(current, &name_value, &email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);
        landing.set(current.landing());

        let session = services.session.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match current {
                AuthMode::Login => session.login(&email_value, &password_value).await,
                AuthMode::Signup => session.signup(name_value.trim(), &email_value, &password_value).await,
            };
            if let Err(e) = result {
                busy.set(false);
                landing.clear();
                error.set(Some(e.to_string()));
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (session, name_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Secret Santa"</h1>
                <p class="login-card__subtitle">{move || mode.get().title()}</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label()}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="login-toggle"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        error.set(None);
                    }
                >
                    {move || match mode.get() {
                        AuthMode::Login => "No account yet? Sign up",
                        AuthMode::Signup => "Already registered? Log in",
                    }}
                </button>
            </div>
        </div>
    }
}
