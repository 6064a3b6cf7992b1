//! Session store: the current user, login, logout, and the loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is built by `SessionProvider` at the application root
//! and handed to the tree through Leptos context. Route guards and pages read
//! its reactive state; the login page and toolbars call `login`/`logout`.
//!
//! DESIGN
//! ======
//! The store is a cheap `Clone` handle over a `RwSignal<SessionState>` plus
//! shared references to its storage and auth service, so `login`/`logout`
//! stay the same callable across every state update. The persisted record is
//! two entries (`token`, `user`) that are always written and cleared together.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping `login` calls are not serialized here: whichever completes
//! last owns the published state. The login page disables its submit button
//! while `loading` is set.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::error::{LoginError, SessionError, StorageError};
use crate::net::api::{AuthService, HttpAuthService};
use crate::net::types::{Credentials, Session};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Session store wired to `localStorage` and the REST backend.
pub type AppSession = SessionStore<BrowserStorage, HttpAuthService>;

/// Lifecycle of the published session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// No store has taken ownership of the state yet.
    Unknown,
    /// Startup restoration is running.
    Restoring,
    Authenticated,
    Anonymous,
}

/// Observable session state published to the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Session>,
    /// Set during restoration and while a login call is in flight.
    pub loading: bool,
    /// Set once startup restoration has finished.
    pub restored: bool,
}

impl SessionState {
    /// State of a freshly built store, before restoration has run.
    #[must_use]
    pub fn restoring() -> Self {
        Self { user: None, loading: true, restored: false }
    }

    /// A published user always means `Authenticated`, even if it arrived
    /// before restoration ran.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.restored, self.loading, self.user.is_some()) {
            (_, _, true) => SessionPhase::Authenticated,
            (false, false, false) => SessionPhase::Unknown,
            (false, true, false) => SessionPhase::Restoring,
            (true, _, false) => SessionPhase::Anonymous,
        }
    }
}

/// Holder of the client-side session.
pub struct SessionStore<S, A> {
    state: RwSignal<SessionState>,
    storage: Arc<S>,
    auth: Arc<A>,
    config: Arc<ClientConfig>,
}

impl<S, A> Clone for SessionStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            storage: Arc::clone(&self.storage),
            auth: Arc::clone(&self.auth),
            config: Arc::clone(&self.config),
        }
    }
}

impl AppSession {
    /// Store over `localStorage` and the backend named in `config`.
    #[must_use]
    pub fn browser(config: ClientConfig) -> Self {
        let auth = HttpAuthService::from_config(&config);
        Self::new(BrowserStorage, auth, config)
    }
}

impl<S, A> SessionStore<S, A>
where
    S: KeyValueStore,
    A: AuthService,
{
    /// Build a store in the [`SessionPhase::Restoring`] phase.
    ///
    /// Must be called with a reactive owner in scope.
    #[must_use]
    pub fn new(storage: S, auth: A, config: ClientConfig) -> Self {
        Self {
            state: RwSignal::new(SessionState::restoring()),
            storage: Arc::new(storage),
            auth: Arc::new(auth),
            config: Arc::new(config),
        }
    }

    /// Read-only view of the published state.
    #[must_use]
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current user (tracked).
    #[must_use]
    pub fn user(&self) -> Option<Session> {
        self.state.with(|s| s.user.clone())
    }

    /// Loading flag (tracked).
    #[must_use]
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    /// Lifecycle phase (tracked).
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.with(SessionState::phase)
    }

    /// Token of the current session, for bearer headers.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.user.as_ref().map(|u| u.token.clone()))
    }

    /// True when a user is published and a token is still persisted.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        let has_token = matches!(self.storage.get(&self.config.token_key), Ok(Some(t)) if !t.is_empty());
        has_token && self.state.with(|s| s.user.is_some())
    }

    /// Case-insensitive role check against the current user.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.state.with(|s| s.user.as_ref().is_some_and(|u| u.role.eq_ignore_ascii_case(role)))
    }

    /// Rebuild the session from persisted storage.
    ///
    /// Runs once per store; later calls are ignored. Malformed or half-written
    /// records are wiped and the session is left absent.
    pub fn restore(&self) {
        if self.state.with_untracked(|s| s.restored) {
            log::debug!("session already restored");
            return;
        }
        self.state.update(|s| s.loading = true);

        let user = match self.read_persisted() {
            Ok(user) => user,
            Err(err) => {
                log::warn!("discarding persisted session: {err}");
                self.clear_persisted();
                None
            }
        };
        if let Some(user) = &user {
            log::info!("restored session for {}", user.user_name);
        }

        self.state.update(|s| {
            s.user = user;
            s.loading = false;
            s.restored = true;
        });
    }

    /// Authenticate with `credentials` and publish the resulting session.
    ///
    /// Storage and the published user change only when the service grants a
    /// session; every other outcome just clears `loading`.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Rejected`] when the service refuses (message
    /// from the response, or a generic fallback) and [`LoginError::Service`]
    /// when the call itself fails.
    pub async fn login(&self, credentials: Credentials) -> Result<Session, LoginError> {
        log::debug!("login requested for {}", credentials.user_name);
        self.state.update(|s| s.loading = true);

        let outcome = match self.auth.login(&credentials).await {
            Ok(response) => response.into_session().map_err(LoginError::Rejected),
            Err(err) => Err(LoginError::from(err)),
        };

        match &outcome {
            Ok(session) => {
                self.persist(session);
                log::info!("logged in as {} ({})", session.user_name, session.role);
                let published = session.clone();
                self.state.update(|s| {
                    s.user = Some(published);
                    s.loading = false;
                });
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                self.state.update(|s| s.loading = false);
            }
        }
        outcome
    }

    /// End the session. Always clears local state, even when the remote
    /// logout call fails.
    pub async fn logout(&self) {
        if let Err(err) = self.auth.logout().await {
            log::warn!("remote logout failed, clearing local session anyway: {err}");
        }
        self.state.update(|s| s.user = None);
        self.clear_persisted();
        log::info!("logged out");
    }

    fn read_persisted(&self) -> Result<Option<Session>, StorageError> {
        let token = self.storage.get(&self.config.token_key)?.filter(|v| !v.is_empty());
        let raw = self.storage.get(&self.config.user_key)?.filter(|v| !v.is_empty());
        match (token, raw) {
            (Some(_), Some(raw)) => Ok(Some(serde_json::from_str(&raw)?)),
            (None, None) => Ok(None),
            _ => Err(StorageError::Incomplete),
        }
    }

    /// Write both halves of the record, or neither.
    fn persist(&self, session: &Session) {
        let written = serde_json::to_string(session)
            .map_err(StorageError::from)
            .and_then(|raw| {
                self.storage.set(&self.config.token_key, &session.token)?;
                self.storage.set(&self.config.user_key, &raw)
            });
        if let Err(err) = written {
            log::warn!("session not persisted: {err}");
            self.clear_persisted();
        }
    }

    fn clear_persisted(&self) {
        self.storage.remove(&self.config.token_key);
        self.storage.remove(&self.config.user_key);
    }
}

/// Make `store` the session for every descendant of the current owner.
pub fn provide_session<S, A>(store: SessionStore<S, A>)
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    provide_context(store);
}

/// Look up the session provided by an ancestor.
///
/// # Errors
///
/// Returns [`SessionError::MissingProvider`] outside a `SessionProvider`.
pub fn try_use_session<S, A>() -> Result<SessionStore<S, A>, SessionError>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    use_context::<SessionStore<S, A>>().ok_or(SessionError::MissingProvider)
}

/// Look up the session provided by an ancestor.
///
/// # Panics
///
/// Panics with [`SessionError::MissingProvider`] outside a `SessionProvider`.
/// That is a wiring bug and must surface where it happens.
#[must_use]
pub fn use_session<S, A>() -> SessionStore<S, A>
where
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    match try_use_session() {
        Ok(store) => store,
        Err(err) => panic!("{err}"),
    }
}
