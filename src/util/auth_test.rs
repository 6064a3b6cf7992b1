use super::*;
use crate::net::types::Session;

fn settled(role: Option<&str>) -> SessionState {
    SessionState {
        user: role.map(|r| Session {
            user_name: "u1".to_owned(),
            role: r.to_owned(),
            token: "t".to_owned(),
            first_name: "u1".to_owned(),
            last_name: String::new(),
        }),
        loading: false,
        restored: true,
    }
}

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    assert!(should_redirect_unauth(&settled(None)));
}

#[test]
fn should_not_redirect_while_restoring() {
    assert!(!should_redirect_unauth(&SessionState::restoring()));
}

#[test]
fn should_not_redirect_while_login_in_flight() {
    let state = SessionState { loading: true, ..settled(None) };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    assert!(!should_redirect_unauth(&settled(Some("Client"))));
}

#[test]
fn route_access_allows_matching_role_ignoring_case() {
    assert_eq!(route_access(&settled(Some("Doctor")), &["doctor"]), RouteAccess::Allowed);
}

#[test]
fn route_access_rejects_other_roles() {
    assert_eq!(route_access(&settled(Some("Client")), &["admin"]), RouteAccess::Unauthorized);
}

#[test]
fn route_access_without_roles_admits_any_user() {
    assert_eq!(route_access(&settled(Some("Client")), &[]), RouteAccess::Allowed);
}

#[test]
fn route_access_sends_anonymous_to_login() {
    assert_eq!(route_access(&settled(None), &["admin"]), RouteAccess::Login);
}

#[test]
fn route_access_pending_before_restore() {
    assert_eq!(route_access(&SessionState::default(), &["admin"]), RouteAccess::Pending);
}

#[test]
fn route_access_judges_user_published_before_restore() {
    let state = SessionState { restored: false, ..settled(Some("Admin")) };
    assert_eq!(route_access(&state, &["admin"]), RouteAccess::Allowed);
    assert_eq!(route_access(&state, &["doctor"]), RouteAccess::Unauthorized);
}

#[test]
fn role_matches_trims_and_ignores_case() {
    assert!(role_matches(" Admin ", "admin"));
    assert!(!role_matches("admin", "administrator"));
}

#[test]
fn home_route_per_role() {
    assert_eq!(home_route("Admin"), "/admin/dashboard");
    assert_eq!(home_route("doctor"), "/doctor/dashboard");
    assert_eq!(home_route("CLIENT"), "/client/dashboard");
    assert_eq!(home_route("nurse"), LOGIN_ROUTE);
    assert_eq!(home_route(""), LOGIN_ROUTE);
}
