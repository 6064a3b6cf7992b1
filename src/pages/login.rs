//! Login page: user name + password against the clinic backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::{AppSession, use_session};
use crate::util::auth::home_route;

const MISSING_FIELDS: &str = "Enter both user name and password.";

/// Trim the user name and require both fields.
fn validate_login_input(user_name: &str, password: &str) -> Result<Credentials, &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials::new(user_name, password))
}

/// Login form. Once a user is published, redirects to that role's dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session: AppSession = use_session();
    let state = session.state();
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        let current = state.get();
        if !current.restored {
            return;
        }
        if let Some(user) = current.user {
            navigate(home_route(&user.role), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().loading {
            return;
        }
        let credentials = match validate_login_input(&user_name.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        info.set(String::new());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = session.login(credentials).await {
                info.set(err.to_string());
                password.set(String::new());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Clinic Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="User name"
                        prop:value=move || user_name.get()
                        on:input=move |ev| user_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || state.get().loading>
                        {move || if state.get().loading { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
