//! Shell shared by every session-gated page.
//!
//! Each mount of [`ProtectedShell`] resolves the identity on its own; nothing
//! is cached between pages, so navigating Home → Search asks the server
//! again.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::routes::ProtectedPage;
use crate::state::guard::redirect_target;
use crate::state::identity::ResolutionState;
use crate::state::resolver::IdentityResolver;

/// Resolve the session identity for the lifetime of the calling component.
///
/// The request starts once, on mount, in the browser only; server rendering
/// leaves the state `Unresolved`. Cleanup aborts a request still in flight.
pub fn use_identity() -> ReadSignal<ResolutionState> {
    let state = RwSignal::new(ResolutionState::Unresolved);
    let resolver = IdentityResolver::new(state);

    #[cfg(feature = "hydrate")]
    start_resolution(&resolver);

    on_cleanup(move || resolver.unmount());
    state.read_only()
}

#[cfg(feature = "hydrate")]
fn start_resolution(resolver: &IdentityResolver<RwSignal<ResolutionState>>) {
    use crate::net::error::SessionError;
    use crate::net::session::HttpSessionClient;

    if let Some(client) = use_context::<HttpSessionClient>() {
        let resolver = resolver.clone();
        leptos::task::spawn_local(async move {
            resolver.resolve(&client).await;
        });
    } else if let Some(ticket) = resolver.begin() {
        resolver.finish(ticket, Err(SessionError::Transport("session client unavailable".to_owned())));
    }
}

/// Heading text for a page in a given state. Identical for every page.
pub fn page_heading(state: &ResolutionState) -> String {
    state.view_mode().greeting().unwrap_or_default()
}

/// Nav link class, marking the page currently shown.
fn nav_link_class(page: ProtectedPage, current: ProtectedPage) -> &'static str {
    if page == current {
        "protected-nav__link protected-nav__link--active"
    } else {
        "protected-nav__link"
    }
}

/// Session-gated page frame: resolves identity, applies the guard policy,
/// and renders the greeting above the page body.
#[component]
pub fn ProtectedShell(page: ProtectedPage, children: Children) -> impl IntoView {
    let identity = use_identity();
    let policy = use_context::<ClientConfig>().map(|c| c.guard).unwrap_or_default();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(route) = identity.with(|state| redirect_target(policy, state)) {
            navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="wrapper protected-page" data-page=page.title()>
            <ProtectedNav current=page/>
            <h1>{move || identity.with(page_heading)}</h1>
            <h2 class="protected-page__title">{page.title()}</h2>
            {children()}
        </div>
    }
}

#[component]
fn ProtectedNav(current: ProtectedPage) -> impl IntoView {
    view! {
        <nav class="protected-nav">
            {ProtectedPage::all()
                .map(|page| {
                    view! {
                        <a href=page.route().path() class=nav_link_class(page, current)>
                            {page.title()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
