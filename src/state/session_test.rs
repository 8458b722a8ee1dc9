use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn bearer_token(user_id: u64, username: &str) -> String {
    let payload = format!(r#"{{"user_id":{user_id},"username":"{username}"}}"#);
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn default_state_is_unauthenticated_with_no_identity() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.current_user(), None);
}

#[test]
fn token_presence_implies_authenticated() {
    let state = SessionState { access_token: Some(bearer_token(7, "bob")) };
    assert!(state.is_authenticated());
}

#[test]
fn identity_is_decoded_from_token_payload() {
    let state = SessionState { access_token: Some(bearer_token(7, "bob")) };
    assert_eq!(
        state.current_user(),
        Some(UserInfo { user_id: 7, username: "bob".to_owned() })
    );
}

#[test]
fn malformed_token_still_counts_as_authenticated_but_has_no_identity() {
    // Presence drives the authenticated flag; identity is best-effort.
    let state = SessionState { access_token: Some("garbage".to_owned()) };
    assert!(state.is_authenticated());
    assert_eq!(state.current_user(), None);
}

#[test]
fn clearing_the_token_flips_authenticated_off() {
    let mut state = SessionState { access_token: Some(bearer_token(1, "u")) };
    state.access_token = None;
    assert!(!state.is_authenticated());
    assert_eq!(state.current_user(), None);
}
