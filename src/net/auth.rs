//! Authentication REST calls and session side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! These wrappers are the only place where network responses mutate the
//! session: login/refresh persist returned tokens, logout always clears
//! locally. Auth paths deliberately carry no bearer header (see `net::http`),
//! so a rejected call here surfaces as a 401 that also drops the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;

use crate::net::http::{self, ApiError};
use crate::net::types::{AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, RegisterResponse};
use crate::state::session::Session;
use crate::util::token_store;

const LOGIN_ENDPOINT: &str = "/auth/login";
const REGISTER_ENDPOINT: &str = "/auth/register";
const REFRESH_ENDPOINT: &str = "/auth/refresh";
const LOGOUT_ENDPOINT: &str = "/auth/logout";

/// External identity providers supported for redirect-based sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Discord,
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Google => "google",
            Self::Discord => "discord",
        })
    }
}

/// Authorize URL for a provider; navigation there leaves the SPA and the
/// provider eventually redirects back to `/oauth/callback`.
#[must_use]
pub fn oauth_authorize_url(provider: OAuthProvider) -> String {
    format!("/auth/oauth/{provider}")
}

/// Sign in with username and password, persisting the returned tokens.
///
/// # Errors
///
/// Returns the underlying `ApiError` with the backend's message (wrong
/// credentials surface as a 401 status error).
pub async fn login(session: Session, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
    let response: AuthResponse = http::post_json(session, LOGIN_ENDPOINT, credentials).await?;
    session.store_tokens(&response);
    Ok(response)
}

/// Create a new account. Does not sign in by itself.
///
/// # Errors
///
/// Returns the underlying `ApiError` (validation problems and duplicate
/// usernames come back as status errors).
pub async fn register(session: Session, data: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
    http::post_json(session, REGISTER_ENDPOINT, data).await
}

/// Exchange the stored refresh token for a new token pair.
///
/// With no stored refresh token the backend rejects the call with a 401,
/// which also clears whatever stale session was left.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn refresh(session: Session) -> Result<AuthResponse, ApiError> {
    let request = RefreshRequest {
        refresh_token: token_store::load_refresh_token().unwrap_or_default(),
    };
    let response: AuthResponse = http::post_json(session, REFRESH_ENDPOINT, &request).await?;
    session.store_tokens(&response);
    Ok(response)
}

/// Sign out. Local tokens are cleared regardless of how the network call
/// ends, so the UI never stays "logged in" against a dead backend.
///
/// # Errors
///
/// Returns the underlying `ApiError` from the logout call itself.
pub async fn logout(session: Session) -> Result<(), ApiError> {
    let result = http::post_no_content(session, LOGOUT_ENDPOINT).await;
    session.clear_tokens();
    result
}
