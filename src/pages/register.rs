//! Registration page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::{AuthField, FormMessage};
use crate::net::auth::AuthAction;
use crate::net::session::HttpSessionClient;
use crate::routes::AppRoute;
use crate::state::forms::RegistrationForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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
        let form = RegistrationForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            username: username.get_untracked(),
            password: password.get_untracked(),
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
            AuthAction::Register,
            navigate.clone(),
            client.clone(),
            info,
            busy,
            move |client| async move { client.register(&request).await },
        );

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, request, AuthAction::Register);
        }
    };

    view! {
        <div class="wrapper auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h1>"Register"</h1>
                <AuthField label="First name" value=first_name/>
                <AuthField label="Last name" value=last_name/>
                <AuthField label="Email" value=email kind="email"/>
                <AuthField label="Username" value=username/>
                <AuthField label="Password" value=password kind="password"/>
                <AuthField label="Confirm password" value=confirmed_password kind="password"/>
                <button class="auth-button" type="submit" disabled=move || busy.get()>
                    "Create account"
                </button>
                <FormMessage info=info/>
                <div class="auth-links">
                    <a href=AppRoute::Login.path()>"Already have an account? Login"</a>
                </div>
            </form>
        </div>
    }
}
