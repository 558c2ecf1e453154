//! Home page shown after login.

use leptos::prelude::*;

use crate::components::protected::ProtectedShell;
use crate::routes::ProtectedPage;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <ProtectedShell page=ProtectedPage::Home>
            <p class="protected-page__hint">"Your vault is ready."</p>
        </ProtectedShell>
    }
}
