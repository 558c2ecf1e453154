//! Messages page.

use leptos::prelude::*;

use crate::components::protected::ProtectedShell;
use crate::routes::ProtectedPage;

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <ProtectedShell page=ProtectedPage::Messages>
            <section class="messages"></section>
        </ProtectedShell>
    }
}
