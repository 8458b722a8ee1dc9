//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session holds the access token in memory (restored from localStorage
//! at startup) and derives everything else from it: `is_authenticated` is a
//! pure presence check and the user identity comes from decoding the token
//! payload. Route guards, the nav bar, and the HTTP layer all consult it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::AuthResponse;
use crate::util::jwt::{self, UserInfo};
use crate::util::token_store;

/// Plain session data; kept separate from the signal wrapper so the
/// derivations stay directly testable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_token: Option<String>,
}

impl SessionState {
    /// Authenticated means exactly "an access token is present".
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    /// Identity decoded from the access token; `None` for absent or
    /// malformed tokens.
    #[must_use]
    pub fn current_user(&self) -> Option<UserInfo> {
        self.access_token.as_deref().and_then(jwt::decode_user)
    }
}

/// Copyable handle to the shared session, provided via context by `App`.
///
/// All writes go through this handle so the in-memory token and the
/// localStorage pair stay in sync.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Build the session from whatever localStorage currently holds.
    #[must_use]
    pub fn restore() -> Self {
        Self {
            state: RwSignal::new(SessionState { access_token: token_store::load_access_token() }),
        }
    }

    /// Reactive presence check; tracking callers re-run on login/logout.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Reactive identity derived from the current token.
    #[must_use]
    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.with(SessionState::current_user)
    }

    /// Untracked token read for outgoing requests.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    /// Persist tokens from a login/refresh response and update the
    /// in-memory token synchronously.
    pub fn store_tokens(&self, response: &AuthResponse) {
        token_store::save(&response.access_token, response.refresh_token.as_deref());
        let access = response.access_token.clone();
        self.state.update(|s| s.access_token = Some(access));
    }

    /// Persist tokens delivered via the OAuth callback query parameters.
    pub fn store_oauth_tokens(&self, access_token: &str, refresh_token: &str) {
        token_store::save(access_token, Some(refresh_token));
        let access = access_token.to_owned();
        self.state.update(|s| s.access_token = Some(access));
    }

    /// Local-only logout: drop both stored tokens and the in-memory token.
    ///
    /// Reused by the HTTP layer (401 from an auth endpoint) and by the OAuth
    /// callback error path; safe to call repeatedly.
    pub fn clear_tokens(&self) {
        token_store::clear();
        self.state.update(|s| s.access_token = None);
    }
}
