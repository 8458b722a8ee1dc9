use super::*;

#[test]
fn oauth_authorize_url_formats_provider_paths() {
    assert_eq!(oauth_authorize_url(OAuthProvider::Google), "/auth/oauth/google");
    assert_eq!(oauth_authorize_url(OAuthProvider::Discord), "/auth/oauth/discord");
}

#[test]
fn auth_endpoints_share_the_intercepted_prefix() {
    for endpoint in [LOGIN_ENDPOINT, REGISTER_ENDPOINT, REFRESH_ENDPOINT, LOGOUT_ENDPOINT] {
        assert!(endpoint.starts_with(http::AUTH_PREFIX), "{endpoint} must be an auth path");
    }
    assert!(oauth_authorize_url(OAuthProvider::Google).starts_with(http::AUTH_PREFIX));
}
