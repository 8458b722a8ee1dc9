//! Placeholder block for empty resource lists.

use leptos::prelude::*;

#[component]
pub fn EmptyState(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{title}</h2>
            <p class="empty-state__detail">{detail}</p>
        </div>
    }
}
