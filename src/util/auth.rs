//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role-gated pages must apply identical redirect behavior, and the login
//! page must send each role to the same home route, so those decisions live
//! here as pure functions with a thin reactive wrapper.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const UNAUTHORIZED_ROUTE: &str = "/unauthorized";

/// Outcome of checking a session against a page's allowed roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Session not settled yet; render nothing and wait.
    Pending,
    /// No user; send to the login page.
    Login,
    /// User present but the role is not allowed.
    Unauthorized,
    Allowed,
}

/// Case-insensitive role comparison.
pub fn role_matches(user_role: &str, role: &str) -> bool {
    user_role.trim().eq_ignore_ascii_case(role.trim())
}

/// Decide access for `state`. An empty `allowed_roles` admits any user.
///
/// A published user is judged on role alone; without one, access waits
/// until restoration and any in-flight login have settled.
pub fn route_access(state: &SessionState, allowed_roles: &[&str]) -> RouteAccess {
    match &state.user {
        None if !state.restored || state.loading => RouteAccess::Pending,
        None => RouteAccess::Login,
        Some(user) if allowed_roles.is_empty() || allowed_roles.iter().any(|r| role_matches(&user.role, r)) => {
            RouteAccess::Allowed
        }
        Some(_) => RouteAccess::Unauthorized,
    }
}

/// True once the session has settled with no user present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    route_access(state, &[]) == RouteAccess::Login
}

/// Landing page for `role`; unknown roles go back to login.
pub fn home_route(role: &str) -> &'static str {
    match role.trim().to_ascii_lowercase().as_str() {
        "admin" => "/admin/dashboard",
        "doctor" => "/doctor/dashboard",
        "client" => "/client/dashboard",
        _ => LOGIN_ROUTE,
    }
}

/// Redirect away whenever the session no longer satisfies `allowed_roles`.
pub fn install_route_guard<F>(state: ReadSignal<SessionState>, allowed_roles: &'static [&'static str], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let target = match route_access(&state.get(), allowed_roles) {
            RouteAccess::Login => LOGIN_ROUTE,
            RouteAccess::Unauthorized => UNAUTHORIZED_ROUTE,
            RouteAccess::Pending | RouteAccess::Allowed => return,
        };
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
