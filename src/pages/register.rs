//! Registration page; a successful signup signs the user straight in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::state::session::Session;
use crate::util::guard;

/// Mirror the backend rules so obviously bad input never leaves the form:
/// username at least 3 chars, a plausible email, password at least 8 chars,
/// confirmation matching.
pub(crate) fn validate_register_input(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_guest_redirect(session, navigate.clone());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_after = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = validate_register_input(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        );
        match input {
            Ok(request) => {
                busy.set(true);
                error.set(None);
                #[cfg(feature = "csr")]
                {
                    let navigate_after = navigate_after.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::auth::register(session, &request).await {
                            Ok(_) => {
                                // Auto-login with the fresh credentials.
                                let credentials = crate::net::types::LoginRequest {
                                    username: request.username.clone(),
                                    password: request.password.clone(),
                                };
                                let options = leptos_router::NavigateOptions::default();
                                match crate::net::auth::login(session, &credentials).await {
                                    Ok(_) => navigate_after("/", options),
                                    Err(_) => navigate_after("/login", options),
                                }
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
                    let _ = (&request, &navigate_after);
                    busy.set(false);
                }
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__logo">"Sabakan"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
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
                        type="email"
                        placeholder="name@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (min. 8 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-footer">
                    "Already have an account? "
                    <a class="auth-link" href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
