use super::*;

use crate::state::session::SessionState;

#[test]
fn bearer_header_attached_for_api_paths_when_token_present() {
    assert_eq!(
        bearer_header("/api/containers", Some("a.b.c")),
        Some("Bearer a.b.c".to_owned())
    );
}

#[test]
fn bearer_header_absent_without_token() {
    assert_eq!(bearer_header("/api/containers", None), None);
}

#[test]
fn bearer_header_never_attached_for_auth_paths() {
    assert_eq!(bearer_header("/auth/login", Some("a.b.c")), None);
    assert_eq!(bearer_header("/auth/refresh", Some("a.b.c")), None);
    assert_eq!(bearer_header("/auth/logout", None), None);
}

#[test]
fn auth_prefix_is_a_path_prefix_match() {
    assert!(is_auth_path("/auth"));
    assert!(is_auth_path("/auth/oauth/google"));
    assert!(!is_auth_path("/api/game-servers"));
    assert!(!is_auth_path("/api/auth-like"));
}

#[test]
fn session_cleared_only_for_401_on_auth_paths() {
    assert!(clears_session("/auth/refresh", 401));
    assert!(clears_session("/auth/logout", 401));
    assert!(!clears_session("/api/containers", 401));
    assert!(!clears_session("/auth/login", 403));
    assert!(!clears_session("/auth/login", 500));
}

#[test]
fn status_message_prefers_body_message() {
    let body = ErrorBody { error: "validation_error".to_owned(), message: Some("Username is required".to_owned()) };
    assert_eq!(status_message(400, Some(&body)), "Username is required");
}

#[test]
fn status_message_falls_back_to_error_code() {
    let body = ErrorBody { error: "not_found".to_owned(), message: None };
    assert_eq!(status_message(404, Some(&body)), "not_found");
}

#[test]
fn status_message_falls_back_to_generic_text() {
    assert_eq!(status_message(502, None), "request failed (status 502)");

    let empty = ErrorBody { error: String::new(), message: None };
    assert_eq!(status_message(500, Some(&empty)), "request failed (status 500)");
}

#[test]
fn login_then_logout_scenario_controls_header_attachment() {
    // Tokens as returned by a successful login.
    let mut state = SessionState { access_token: Some("a.b.c".to_owned()) };
    assert!(state.is_authenticated());
    assert_eq!(
        bearer_header("/api/containers", state.access_token.as_deref()),
        Some("Bearer a.b.c".to_owned())
    );

    // Logout clears the token; subsequent requests go out bare.
    state.access_token = None;
    assert!(!state.is_authenticated());
    assert_eq!(bearer_header("/api/containers", state.access_token.as_deref()), None);
}

#[test]
fn api_error_display_is_the_inline_ui_text() {
    let err = ApiError::Status { status: 409, message: "Username already exists".to_owned() };
    assert_eq!(err.to_string(), "Username already exists");
    assert_eq!(ApiError::Network("timed out".to_owned()).to_string(), "network error: timed out");
}
