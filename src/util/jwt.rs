//! Client-side JWT payload decoding.
//!
//! DESIGN
//! ======
//! The access token is only *inspected* here, never verified; the backend is
//! the sole authority on token validity. Malformed tokens therefore yield
//! `None` instead of an error so callers degrade to "no identity".

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

/// User identity carried in the access token's claims.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserInfo {
    pub user_id: u64,
    pub username: String,
}

/// Decode the identity claims from a JWT access token.
///
/// Splits on `.`, base64url-decodes the middle segment, and parses it as
/// JSON. Returns `None` for anything that does not decode cleanly.
#[must_use]
pub fn decode_user(token: &str) -> Option<UserInfo> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}
