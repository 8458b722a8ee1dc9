//! Login page with username/password and OAuth sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::OAuthProvider;
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::util::guard;

pub(crate) fn validate_login_input(
    username: &str,
    password: &str,
) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Message for an `error` query-parameter code (set by the OAuth callback).
pub(crate) fn error_message_for_code(code: &str) -> &'static str {
    match code {
        "oauth_failed" => "OAuth authentication failed",
        _ => "Sign-in failed. Please try again.",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_guest_redirect(session, navigate.clone());

    let query = use_query_map();
    let initial_error = query
        .with_untracked(|q| q.get("error"))
        .map(|code| error_message_for_code(&code).to_owned());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(initial_error);
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => {
                busy.set(true);
                error.set(None);
                #[cfg(feature = "csr")]
                {
                    let navigate_home = navigate_home.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::auth::login(session, &credentials).await {
                            Ok(_) => {
                                navigate_home("/", leptos_router::NavigateOptions::default());
                            }
                            Err(e) => {
                                error.set(Some(e.to_string()));
                                busy.set(false);
                            }
                        }
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&credentials, &navigate_home);
                    busy.set(false);
                }
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    let oauth_redirect = move |provider: OAuthProvider| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(&crate::net::auth::oauth_authorize_url(provider));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = provider;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"Sabakan"</h1>
                <p class="auth-card__subtitle">"Sign in to your account to continue"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-divider"></div>
                <p class="auth-card__subtitle">"Or continue with"</p>
                <div class="auth-oauth">
                    <button
                        class="auth-button auth-button--oauth"
                        type="button"
                        on:click=move |_| oauth_redirect(OAuthProvider::Google)
                    >
                        "Google"
                    </button>
                    <button
                        class="auth-button auth-button--oauth"
                        type="button"
                        on:click=move |_| oauth_redirect(OAuthProvider::Discord)
                    >
                        "Discord"
                    </button>
                </div>
                <p class="auth-footer">
                    "Don't have an account? "
                    <a class="auth-link" href="/register">"Sign up now"</a>
                </p>
            </div>
        </div>
    }
}
