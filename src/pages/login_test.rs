use super::*;

#[test]
fn validate_login_input_trims_username_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  alice  ", "hunter22"),
        Ok(LoginRequest { username: "alice".to_owned(), password: "hunter22".to_owned() })
    );
    assert_eq!(validate_login_input("", "hunter22"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
    assert_eq!(validate_login_input("   ", "x"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("alice", "  spaces kept  ").expect("input should validate");
    assert_eq!(request.password, "  spaces kept  ");
}

#[test]
fn oauth_failure_code_maps_to_its_message() {
    assert_eq!(error_message_for_code("oauth_failed"), "OAuth authentication failed");
}

#[test]
fn unknown_error_codes_map_to_a_generic_message() {
    assert_eq!(error_message_for_code("weird"), "Sign-in failed. Please try again.");
}
