//! Gift-preference form state, draft persistence and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The onboarding form saves an unsent draft on every change under its own
//! storage key and clears it once the backend accepts the submission. Profile
//! editing reuses the same list cleaning but never touches the draft.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiClient;
use crate::net::types::{Preferences, ProfileUpdate, UserPatch, UserSummary};
use crate::routes::AppRoute;
use crate::state::request::{ScreenOutcome, settle};
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, PREFS_DRAFT_KEY, load_json, save_json};

/// Unsent onboarding form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesDraft {
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub animal: String,
}

impl PreferencesDraft {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        load_json(store, PREFS_DRAFT_KEY).unwrap_or_default()
    }

    pub fn save(&self, store: &dyn KeyValueStore) {
        save_json(store, PREFS_DRAFT_KEY, self);
    }

    pub fn clear(store: &dyn KeyValueStore) {
        store.remove(PREFS_DRAFT_KEY);
    }

    /// Required-field check. `None` means the draft can be submitted.
    pub fn validate(&self) -> Option<PreferenceErrors> {
        let errors = PreferenceErrors {
            likes: clean_list(&self.likes).is_empty(),
            color: self.color.trim().is_empty(),
            animal: self.animal.trim().is_empty(),
        };
        errors.any().then_some(errors)
    }

    pub fn to_preferences(&self) -> Preferences {
        Preferences {
            likes: clean_list(&self.likes),
            dislikes: clean_list(&self.dislikes),
            allergies: clean_list(&self.allergies),
            favorite_color: Some(self.color.trim().to_owned()),
            favorite_animal: Some(self.animal.trim().to_owned()),
            bio: None,
        }
    }
}

/// Which required fields are missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreferenceErrors {
    pub likes: bool,
    pub color: bool,
    pub animal: bool,
}

impl PreferenceErrors {
    pub fn any(self) -> bool {
        self.likes || self.color || self.animal
    }
}

/// Collapse inner whitespace to single spaces and trim.
pub fn normalize_entry(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize entries, drop empties, and dedupe case-insensitively keeping the
/// first spelling.
pub fn clean_list(items: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let value = normalize_entry(item);
        if value.is_empty() {
            continue;
        }
        let key = value.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        out.push(value);
    }
    out
}

/// Add a chip to `list`. Returns `false` when it is blank or already present.
pub fn push_chip(list: &mut Vec<String>, raw: &str, max_items: usize) -> bool {
    let value = normalize_entry(raw);
    if value.is_empty() || list.len() >= max_items {
        return false;
    }
    let key = value.to_lowercase();
    if list.iter().any(|v| v.to_lowercase() == key) {
        return false;
    }
    list.push(value);
    true
}

/// Submit the onboarding form. On success the draft is erased and the
/// session's user is marked onboarded (or replaced by the echoed record).
pub async fn submit_onboarding(
    api: &ApiClient,
    session: &SessionStore,
    store: &dyn KeyValueStore,
    draft: &PreferencesDraft,
) -> ScreenOutcome<()> {
    let Some(user_id) = session.current_user().map(|u| u.id) else {
        return ScreenOutcome::Redirect(AppRoute::Entry);
    };
    settle(session, api.save_preferences(&user_id, &draft.to_preferences()).await).map(|echoed| {
        PreferencesDraft::clear(store);
        match echoed {
            Some(user) => session.replace_current_user(UserSummary { onboarded: true, ..user }),
            None => session.update_current_user(UserPatch { onboarded: Some(true), ..UserPatch::default() }),
        }
    })
}

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Profile form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub preferences: Preferences,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required.");
        }
        if !is_valid_email(&self.email) {
            return Err("Enter a valid email address.");
        }
        Ok(())
    }
}

/// Save name/email then preferences, updating the session's user with the
/// server's record.
pub async fn save_profile(api: &ApiClient, session: &SessionStore, form: &ProfileForm) -> ScreenOutcome<()> {
    let Some(user_id) = session.current_user().map(|u| u.id) else {
        return ScreenOutcome::Redirect(AppRoute::Entry);
    };
    let update = ProfileUpdate { name: form.name.trim().to_owned(), email: form.email.trim().to_owned() };
    let user = match settle(session, api.update_profile(&update).await) {
        ScreenOutcome::Done(user) => user,
        ScreenOutcome::Failed(err) => return ScreenOutcome::Failed(err),
        ScreenOutcome::Redirect(route) => return ScreenOutcome::Redirect(route),
        ScreenOutcome::Stale => return ScreenOutcome::Stale,
    };
    session.update_current_user(UserPatch { name: Some(user.name), email: Some(user.email), onboarded: None });

    let prefs = Preferences {
        likes: clean_list(&form.preferences.likes),
        dislikes: clean_list(&form.preferences.dislikes),
        allergies: clean_list(&form.preferences.allergies),
        ..form.preferences.clone()
    };
    settle(session, api.save_preferences(&user_id, &prefs).await).map(|_| ())
}

pub async fn load_own_preferences(api: &ApiClient, session: &SessionStore) -> ScreenOutcome<Preferences> {
    let Some(user_id) = session.current_user().map(|u| u.id) else {
        return ScreenOutcome::Redirect(AppRoute::Entry);
    };
    settle(session, api.preferences(&user_id).await)
}
