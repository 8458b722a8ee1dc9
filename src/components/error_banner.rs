//! Inline error banner with an optional retry affordance.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-banner__message">{message}</span>
            <Show when=move || on_retry.is_some()>
                <button
                    class="btn"
                    on:click=move |_| {
                        if let Some(retry) = on_retry {
                            retry.run(());
                        }
                    }
                >
                    "Retry"
                </button>
            </Show>
        </div>
    }
}
