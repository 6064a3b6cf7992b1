//! Error taxonomy for session handling.
//!
//! ERROR HANDLING
//! ==============
//! Storage and service failures are recovered inside the session store and
//! surface to callers as [`LoginError`] values. The only error meant to stop
//! the program is [`SessionError::MissingProvider`], which marks a wiring bug.

/// Misuse of the session context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A component asked for the session outside `SessionProvider`.
    #[error("session context missing: use_session must be called inside a SessionProvider")]
    MissingProvider,
}

/// Failure reading or writing the persisted session record.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("persistent storage unavailable")]
    Unavailable,
    /// The backend refused to read `key`.
    #[error("failed to read storage key {0:?}")]
    Read(String),
    /// The backend refused to write `key` (quota, privacy mode).
    #[error("failed to write storage key {0:?}")]
    Write(String),
    /// Only one half of the token/user pair was found.
    #[error("persisted session is incomplete")]
    Incomplete,
    /// The stored user record is not valid session JSON.
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failure talking to the remote authentication service.
///
/// `Display` renders only the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-success HTTP status.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// No response was received.
    #[error("{0}")]
    Network(String),
    /// The response body could not be decoded.
    #[error("unexpected response from server: {0}")]
    Decode(String),
    /// HTTP calls are only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Failed login as returned by `SessionStore::login`.
///
/// `Display` renders only the message so it can be shown directly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The service answered but did not grant a session.
    #[error("{0}")]
    Rejected(String),
    /// The service call itself failed.
    #[error("{0}")]
    Service(String),
}

impl From<AuthError> for LoginError {
    fn from(err: AuthError) -> Self {
        Self::Service(err.to_string())
    }
}
