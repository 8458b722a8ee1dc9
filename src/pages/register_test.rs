use super::*;

#[test]
fn rejects_short_usernames() {
    assert_eq!(
        validate_register_input("ab", "a@b.com", "password1", "password1"),
        Err("Username must be at least 3 characters")
    );
    assert_eq!(
        validate_register_input("  a  ", "a@b.com", "password1", "password1"),
        Err("Username must be at least 3 characters")
    );
}

#[test]
fn rejects_implausible_emails() {
    assert_eq!(
        validate_register_input("alice", "", "password1", "password1"),
        Err("Enter a valid email address")
    );
    assert_eq!(
        validate_register_input("alice", "not-an-email", "password1", "password1"),
        Err("Enter a valid email address")
    );
}

#[test]
fn rejects_short_passwords() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "short", "short"),
        Err("Password must be at least 8 characters")
    );
}

#[test]
fn rejects_mismatched_confirmation() {
    assert_eq!(
        validate_register_input("alice", "a@b.com", "password1", "password2"),
        Err("Passwords do not match")
    );
}

#[test]
fn builds_trimmed_request_on_valid_input() {
    let request = validate_register_input("  alice ", " a@b.com ", "password1", "password1")
        .expect("input should validate");
    assert_eq!(
        request,
        RegisterRequest {
            username: "alice".to_owned(),
            email: "a@b.com".to_owned(),
            password: "password1".to_owned(),
        }
    );
}
