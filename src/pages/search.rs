//! Search page.

use leptos::prelude::*;

use crate::components::protected::ProtectedShell;
use crate::routes::ProtectedPage;

#[component]
pub fn SearchPage() -> impl IntoView {
    view! {
        <ProtectedShell page=ProtectedPage::Search>
            <form class="search-form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <input class="search-form__input" type="search" placeholder="Search users"/>
            </form>
        </ProtectedShell>
    }
}
