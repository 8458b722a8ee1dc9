use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token_with_payload(payload: &str) -> String {
    format!("header.{}.signature", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn decodes_identity_claims_from_valid_token() {
    let token = token_with_payload(r#"{"user_id":42,"username":"alice","jti":"j-1"}"#);
    assert_eq!(
        decode_user(&token),
        Some(UserInfo { user_id: 42, username: "alice".to_owned() })
    );
}

#[test]
fn token_without_middle_segment_yields_no_identity() {
    assert_eq!(decode_user("onlyonesegment"), None);
}

#[test]
fn empty_middle_segment_yields_no_identity() {
    assert_eq!(decode_user("a..c"), None);
}

#[test]
fn non_base64_payload_yields_no_identity() {
    assert_eq!(decode_user("a.!!!not-base64!!!.c"), None);
}

#[test]
fn non_json_payload_yields_no_identity() {
    let token = token_with_payload("this is not json");
    assert_eq!(decode_user(&token), None);
}

#[test]
fn payload_missing_required_claims_yields_no_identity() {
    let token = token_with_payload(r#"{"sub":"alice"}"#);
    assert_eq!(decode_user(&token), None);
}
