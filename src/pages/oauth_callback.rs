//! OAuth callback handler: lands here after the provider redirect.
//!
//! DESIGN
//! ======
//! The provider hands tokens (or an error) back as query parameters. The
//! outcome is classified once, untracked, because the very next step is a
//! navigation that unmounts this page.

#[cfg(test)]
#[path = "oauth_callback_test.rs"]
mod oauth_callback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CallbackOutcome {
    /// Both tokens present: store them and enter the dashboard.
    Success { access_token: String, refresh_token: String },
    /// The provider reported an error: drop any half-set session state.
    ProviderError,
    /// Neither error nor a full token pair: back to login, no message.
    MissingTokens,
}

pub(crate) fn classify_callback(
    access_token: Option<String>,
    refresh_token: Option<String>,
    error: Option<String>,
) -> CallbackOutcome {
    if error.is_some_and(|e| !e.is_empty()) {
        return CallbackOutcome::ProviderError;
    }
    match (access_token, refresh_token) {
        (Some(access_token), Some(refresh_token))
            if !access_token.is_empty() && !refresh_token.is_empty() =>
        {
            CallbackOutcome::Success { access_token, refresh_token }
        }
        _ => CallbackOutcome::MissingTokens,
    }
}

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();

    Effect::new(move || {
        let outcome = query.with_untracked(|q| {
            classify_callback(q.get("access_token"), q.get("refresh_token"), q.get("error"))
        });
        match outcome {
            CallbackOutcome::Success { access_token, refresh_token } => {
                session.store_oauth_tokens(&access_token, &refresh_token);
                navigate("/", NavigateOptions::default());
            }
            CallbackOutcome::ProviderError => {
                session.clear_tokens();
                navigate("/login?error=oauth_failed", NavigateOptions::default());
            }
            CallbackOutcome::MissingTokens => {
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="callback-page">
            <p>"Completing authentication..."</p>
        </div>
    }
}
