//! Authentication service seam and its REST implementation.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`AuthError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! HTTP failures are folded into [`AuthError`] values whose `Display` is the
//! message the login form shows, so callers never inspect status codes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

#[cfg(any(test, feature = "hydrate"))]
use super::types::DEFAULT_LOGIN_ERROR;
use super::types::{Credentials, LoginResponse};
use crate::config::ClientConfig;
use crate::error::AuthError;

/// Remote authentication endpoint used by the session store.
pub trait AuthService {
    /// Submit credentials. A well-formed refusal is `Ok` with `success: false`.
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<LoginResponse, AuthError>>;

    /// End the session server-side.
    fn logout(&self) -> impl Future<Output = Result<(), AuthError>>;
}

/// [`AuthService`] backed by the clinic REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthService {
    api_base: String,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(api_base: &str) -> String {
    format!("{}/auth/login", api_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_endpoint(api_base: &str) -> String {
    format!("{}/auth/logout", api_base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn network_failure_message(api_base: &str) -> String {
    format!("Cannot connect to server at {api_base}")
}

/// Message for a login answered with a non-2xx status.
///
/// `body` is the decoded error envelope, when the server sent one.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(status: u16, status_text: &str, body: Option<&LoginResponse>) -> String {
    let message = body.and_then(|b| b.message.clone()).filter(|m| !m.trim().is_empty());
    match status {
        401 => DEFAULT_LOGIN_ERROR.to_owned(),
        400 => match body {
            Some(b) if !b.errors.is_empty() => b.errors.join(", "),
            _ => message.unwrap_or_else(|| "Bad request".to_owned()),
        },
        500 => message.unwrap_or_else(|| "Server error occurred".to_owned()),
        _ => format!("HTTP {status}: {status_text}"),
    }
}

impl AuthService for HttpAuthService {
    /// `POST {api_base}/auth/login` with the credentials as JSON.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let url = login_endpoint(&self.api_base);
            log::debug!("POST {url} for {}", credentials.user_name);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| AuthError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(|e| {
                    log::warn!("login request failed: {e}");
                    AuthError::Network(network_failure_message(&self.api_base))
                })?;
            let status = resp.status();
            if resp.ok() {
                return resp
                    .json::<LoginResponse>()
                    .await
                    .map_err(|e| AuthError::Decode(e.to_string()));
            }
            let status_text = resp.status_text();
            let body = resp.json::<LoginResponse>().await.ok();
            log::warn!("login rejected with HTTP {status}");
            Err(AuthError::Http {
                status,
                message: login_failure_message(status, &status_text, body.as_ref()),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    /// `POST {api_base}/auth/logout`.
    async fn logout(&self) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&logout_endpoint(&self.api_base))
                .send()
                .await
                .map_err(|_| AuthError::Network(network_failure_message(&self.api_base)))?;
            if !resp.ok() {
                let status = resp.status();
                return Err(AuthError::Http { status, message: format!("HTTP {status}: {}", resp.status_text()) });
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthError::Unavailable)
        }
    }
}
