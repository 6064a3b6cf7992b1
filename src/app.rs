//! Root application component with routing and the session provider.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::dashboard::{ADMIN_ROLES, CLIENT_ROLES, DOCTOR_ROLES, DashboardPage, HomeRedirect, UnauthorizedPage};
use crate::pages::login::LoginPage;
use crate::state::session::{AppSession, provide_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Builds the application's single [`AppSession`], provides it to
/// `children`, and restores the persisted session once mounted.
///
/// Children render only after restoration so no page ever observes the
/// `Restoring` phase.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = AppSession::browser(ClientConfig::from_build_env());
    provide_session(session.clone());
    let state = session.state();

    // Effects only run in the browser, where localStorage exists.
    Effect::new(move || session.restore());

    view! {
        <Show
            when=move || state.get().restored
            fallback=|| view! { <div class="session-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-client.css"/>
        <Title text="Clinic Portal"/>

        <SessionProvider>
            <Router>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route path=StaticSegment("dashboard") view=HomeRedirect/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <DashboardPage allowed=ADMIN_ROLES title="Admin Dashboard"/> }
                    />
                    <Route
                        path=(StaticSegment("doctor"), StaticSegment("dashboard"))
                        view=|| view! { <DashboardPage allowed=DOCTOR_ROLES title="Doctor Dashboard"/> }
                    />
                    <Route
                        path=(StaticSegment("client"), StaticSegment("dashboard"))
                        view=|| view! { <DashboardPage allowed=CLIENT_ROLES title="Client Dashboard"/> }
                    />
                    <Route path=StaticSegment("") view=HomeRedirect/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}
