//! Client configuration resolved at build time.
//!
//! The backend base URL comes from `SANTA_API_URL` when the crate is compiled
//! (the WASM bundle has no process environment at runtime).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `SANTA_API_URL`: backend base URL, default `http://localhost:3000`
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("SANTA_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed };
        Self { api_base_url: api_base_url.to_owned() }
    }

    /// Absolute URL for a backend path such as `/auth/login`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.api_base_url)
        } else {
            format!("{}/{path}", self.api_base_url)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
