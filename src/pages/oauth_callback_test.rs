use super::*;

fn some(s: &str) -> Option<String> {
    Some(s.to_owned())
}

#[test]
fn both_tokens_present_is_a_success() {
    assert_eq!(
        classify_callback(some("a.b.c"), some("r"), None),
        CallbackOutcome::Success {
            access_token: "a.b.c".to_owned(),
            refresh_token: "r".to_owned(),
        }
    );
}

#[test]
fn provider_error_wins_over_tokens() {
    assert_eq!(
        classify_callback(some("a.b.c"), some("r"), some("access_denied")),
        CallbackOutcome::ProviderError
    );
}

#[test]
fn empty_error_parameter_is_ignored() {
    assert_eq!(
        classify_callback(some("a.b.c"), some("r"), some("")),
        CallbackOutcome::Success {
            access_token: "a.b.c".to_owned(),
            refresh_token: "r".to_owned(),
        }
    );
}

#[test]
fn missing_or_empty_tokens_fall_back_to_login() {
    assert_eq!(classify_callback(None, None, None), CallbackOutcome::MissingTokens);
    assert_eq!(classify_callback(some("a.b.c"), None, None), CallbackOutcome::MissingTokens);
    assert_eq!(classify_callback(None, some("r"), None), CallbackOutcome::MissingTokens);
    assert_eq!(classify_callback(some(""), some("r"), None), CallbackOutcome::MissingTokens);
}
