//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so the API base URL is baked in
//! through `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base: String,
    /// Storage key holding the raw session token.
    pub token_key: String,
    /// Storage key holding the serialized session.
    pub user_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            user_key: DEFAULT_USER_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `CLINIC_API_BASE`: backend base URL, default `/api`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("CLINIC_API_BASE"))
    }

    /// Default config with `api_base` overridden when `raw` is non-blank.
    #[must_use]
    pub fn with_api_base(raw: Option<&str>) -> Self {
        let api_base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base, ..Self::default() }
    }
}
