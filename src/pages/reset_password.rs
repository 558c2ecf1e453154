//! Password reset page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthField, FormMessage};
use crate::net::auth::AuthAction;
use crate::net::session::HttpSessionClient;
use crate::routes::AppRoute;
use crate::state::forms::ResetPasswordForm;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let email_or_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmed_password = RwSignal::new(String::new());
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
        let form = ResetPasswordForm {
            email_or_username: email_or_username.get_untracked(),
            new_password: new_password.get_untracked(),
            confirmed_password: confirmed_password.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        crate::components::auth_card::spawn_submit(
            AuthAction::ResetPassword,
            navigate.clone(),
            client.clone(),
            info,
            busy,
            move |client| async move { client.reset_password(&request).await },
        );

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, request, AuthAction::ResetPassword);
        }
    };

    view! {
        <div class="wrapper auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Reset password"</h1>
                <AuthField label="Email or username" value=email_or_username/>
                <AuthField label="New password" value=new_password kind="password"/>
                <AuthField label="Confirm password" value=confirmed_password kind="password"/>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Reset password"
                </button>
                <FormMessage info=info/>
                <div class="auth-links">
                    <a href=AppRoute::Login.path()>"Back to login"</a>
                </div>
            </form>
        </div>
    }
}
