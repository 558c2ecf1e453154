//! Inputs and submit plumbing shared by the auth pages.

use leptos::prelude::*;

/// Labelled input bound to a string signal.
#[component]
pub fn AuthField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="auth-field">
            <span class="auth-field__label">{label}</span>
            <input
                class="auth-field__input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline status line; hidden while empty.
#[component]
pub fn FormMessage(info: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !info.get().is_empty()>
            <p class="auth-message">{move || info.get()}</p>
        </Show>
    }
}

/// Send a validated auth request in the background and navigate on success.
///
/// Server rejections land in `info`. Signal writes use `try_set` because a
/// successful navigation may already have disposed the page.
#[cfg(feature = "hydrate")]
pub(crate) fn spawn_submit<N, F, Fut>(
    action: crate::net::auth::AuthAction,
    navigate: N,
    client: Option<crate::net::session::HttpSessionClient>,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
    send: F,
) where
    N: Fn(&str, leptos_router::NavigateOptions) + 'static,
    F: FnOnce(crate::net::session::HttpSessionClient) -> Fut + 'static,
    Fut: std::future::Future<Output = Result<crate::net::types::AuthReply, crate::net::error::SessionError>>
        + 'static,
{
    let Some(client) = client else {
        log::error!("{action:?} submitted without a session client");
        info.set("Service unavailable.".to_owned());
        return;
    };

    busy.set(true);
    info.set(action.pending_message().to_owned());

    leptos::task::spawn_local(async move {
        match send(client).await {
            Ok(_) => {
                let _ = busy.try_set(false);
                let _ = info.try_set(String::new());
                navigate(action.success_route().path(), leptos_router::NavigateOptions::default());
            }
            Err(e) => {
                let _ = info.try_set(e.user_message());
                let _ = busy.try_set(false);
            }
        }
    });
}
