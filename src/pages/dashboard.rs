//! Role dashboards and the role-based landing redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AppSession, use_session};
use crate::util::auth::{LOGIN_ROUTE, RouteAccess, home_route, install_route_guard, route_access};

pub const ADMIN_ROLES: &[&str] = &["admin"];
pub const DOCTOR_ROLES: &[&str] = &["doctor"];
pub const CLIENT_ROLES: &[&str] = &["client"];

/// Dashboard shell for one role. Redirects to `/login` when signed out and to
/// `/unauthorized` when the user's role is not in `allowed`.
#[component]
pub fn DashboardPage(allowed: &'static [&'static str], title: &'static str) -> impl IntoView {
    let session: AppSession = use_session();
    let state = session.state();
    install_route_guard(state, allowed, use_navigate());

    let greeting = move || {
        state
            .get()
            .user
            .map_or_else(String::new, |u| format!("Signed in as {} ({})", u.display_name(), u.role))
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    };

    view! {
        <Show when=move || route_access(&state.get(), allowed) == RouteAccess::Allowed>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{title}</h1>
                    <span class="dashboard-page__user">{greeting}</span>
                    <button class="btn btn--secondary" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </header>
            </div>
        </Show>
    }
}

/// Send the user to their role's dashboard, or to `/login` when signed out.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let session: AppSession = use_session();
    let state = session.state();
    let navigate = use_navigate();

    Effect::new(move || {
        let current = state.get();
        if !current.restored {
            return;
        }
        let target = current.user.map_or(LOGIN_ROUTE, |u| home_route(&u.role));
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}

/// Shown when a signed-in user opens a page their role may not see.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Unauthorized"</h1>
            <p>"You don't have permission to access this page."</p>
            <a href=LOGIN_ROUTE class="btn btn--primary">
                "Back to Login"
            </a>
        </div>
    }
}
