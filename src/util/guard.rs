//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: authenticated
//! pages bounce signed-out users to `/login`, and the login/register pages
//! bounce signed-in users back to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Redirect to `/login` whenever no session is present.
///
/// Installed by every authenticated page; because the effect tracks the
/// session signal, a logout (or a cleared session after an auth 401) also
/// triggers the redirect.
pub fn install_auth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !session.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever a session is already present (guest-only pages).
pub fn install_guest_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });
}
