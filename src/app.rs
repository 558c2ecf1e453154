//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::session::HttpSessionClient;
use crate::pages::{
    home::HomePage, login::LoginPage, messages::MessagesPage, register::RegisterPage,
    reset_password::ResetPasswordPage, search::SearchPage,
};
use crate::routes::AppRoute;

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
/// Provides the client config and session client as context, then maps each
/// path in [`AppRoute`] to its page. There is no not-found page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    provide_context(config.clone());
    match HttpSessionClient::new(config) {
        Ok(client) => provide_context(client),
        Err(e) => log::error!("session client unavailable [{}]: {e}", e.error_code()),
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/vault.css"/>
        <Title text="Vault"/>

        <Router>
            <Routes fallback=|| ()>
                <Route path=StaticSegment(AppRoute::Root.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(AppRoute::ResetPassword.segment()) view=ResetPasswordPage/>
                <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                <Route path=StaticSegment(AppRoute::Search.segment()) view=SearchPage/>
                <Route path=StaticSegment(AppRoute::Messages.segment()) view=MessagesPage/>
            </Routes>
        </Router>
    }
}
