//! Login page: username-or-email and password.
//!
//! On success the server sets the session cookie and the page moves on to
//! `/home`, where the identity is resolved.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthField, FormMessage};
use crate::net::auth::AuthAction;
use crate::net::session::HttpSessionClient;
use crate::routes::AppRoute;
use crate::state::forms::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let client = use_context::<HttpSessionClient>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { username: username.get_untracked(), password: password.get_untracked() };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        crate::components::auth_card::spawn_submit(
            AuthAction::Login,
            navigate.clone(),
            client.clone(),
            info,
            busy,
            move |client| async move { client.login(&request).await },
        );

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, request, AuthAction::Login);
        }
    };

    view! {
        <div class="wrapper auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Login"</h1>
                <AuthField label="Username or email" value=username/>
                <AuthField label="Password" value=password kind="password"/>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <FormMessage info=info/>
                <div class="auth-links">
                    <a href=AppRoute::ResetPassword.path()>"Forgot password?"</a>
                    <a href=AppRoute::Register.path()>"Register"</a>
                </div>
            </form>
        </div>
    }
}
