//! Root application component and the session gate.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::User;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{ActiveView, Session};

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

/// Root application component.
///
/// Owns the session signal for the lifetime of the page and provides it to
/// the tree. Every page load starts signed out.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/ultramed.css"/>
        <Title text="Ultramed"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionGate/>
            </Routes>
        </Router>
    }
}

/// Login and logout callbacks bound to `session`.
///
/// These are the only writers of the session signal.
pub fn session_callbacks(session: RwSignal<Session>) -> (Callback<User>, Callback<()>) {
    let on_login = Callback::new(move |user: User| session.update(|s| s.login(user)));
    let on_logout = Callback::new(move |()| session.update(Session::logout));
    (on_login, on_logout)
}

/// Renders the login page or the dashboard depending on the session.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let (on_login, on_logout) = session_callbacks(session);

    move || match session.with(Session::active_view) {
        ActiveView::Login => view! { <LoginPage on_login=on_login/> }.into_any(),
        ActiveView::Dashboard(user) => view! { <DashboardPage user=user on_logout=on_logout/> }.into_any(),
    }
}
