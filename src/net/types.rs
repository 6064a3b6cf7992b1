//! Wire DTOs for the authentication endpoints and the persisted session.
//!
//! DESIGN
//! ======
//! The backend envelope is emitted in PascalCase by some deployments and in
//! camelCase by others, so response fields accept both spellings. Outgoing
//! payloads and the persisted session always use camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error shown when the service refuses a login without saying why.
pub const DEFAULT_LOGIN_ERROR: &str = "Invalid username or password";

/// Login form payload, forwarded verbatim to the authentication service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_name: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(user_name: impl Into<String>, password: impl Into<String>) -> Self {
        Self { user_name: user_name.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .finish()
    }
}

/// The authenticated user as held by the client.
///
/// Replaced wholesale on every login; never patched field by field.
/// Decoding goes through [`LoginData`], so stored records missing the name
/// fields get the same defaults as a fresh login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "LoginData")]
pub struct Session {
    pub user_name: String,
    /// Role name as issued by the backend (`Admin`, `Doctor`, `Client`).
    pub role: String,
    /// Opaque bearer token. Never inspected client-side.
    pub token: String,
    pub first_name: String,
    pub last_name: String,
}

impl Session {
    /// Name for display: first and last name, or the user name if both are blank.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.user_name.clone() } else { full.to_owned() }
    }
}

/// `data` payload of a successful login response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(alias = "UserName")]
    pub user_name: String,
    #[serde(alias = "Role")]
    pub role: String,
    #[serde(alias = "Token")]
    pub token: String,
    #[serde(default, alias = "FirstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, alias = "LastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<LoginData> for Session {
    fn from(data: LoginData) -> Self {
        let first_name = data.first_name.unwrap_or_else(|| data.user_name.clone());
        Self {
            user_name: data.user_name,
            role: data.role,
            token: data.token,
            first_name,
            last_name: data.last_name.unwrap_or_default(),
        }
    }
}

/// Response envelope returned by `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, alias = "Success")]
    pub success: bool,
    #[serde(default, alias = "Data")]
    pub data: Option<LoginData>,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    /// Validation errors, populated on `400 Bad Request`.
    #[serde(default, alias = "Errors")]
    pub errors: Vec<String>,
}

impl LoginResponse {
    /// Successful response carrying `data`.
    #[must_use]
    pub fn granted(data: LoginData) -> Self {
        Self { success: true, data: Some(data), ..Self::default() }
    }

    /// Failed response carrying `message`.
    #[must_use]
    pub fn denied(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()), ..Self::default() }
    }

    /// Resolve into a session, or the message to show the user.
    ///
    /// # Errors
    ///
    /// Returns the response message (or [`DEFAULT_LOGIN_ERROR`]) when the
    /// response is unsuccessful or carries no `data`.
    pub fn into_session(self) -> Result<Session, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(Session::from(data)),
            _ => Err(self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOGIN_ERROR.to_owned())),
        }
    }
}
