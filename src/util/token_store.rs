//! Browser localStorage persistence for the session token pair.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; native builds (used by
//! the test suite) see an always-empty store so session logic can be
//! exercised without a DOM.

/// localStorage key holding the short-lived access token.
pub const ACCESS_TOKEN_KEY: &str = "sabakan_access_token";
/// localStorage key holding the longer-lived refresh token.
pub const REFRESH_TOKEN_KEY: &str = "sabakan_refresh_token";

/// Read the stored access token, if any.
#[must_use]
pub fn load_access_token() -> Option<String> {
    read(ACCESS_TOKEN_KEY)
}

/// Read the stored refresh token, if any.
#[must_use]
pub fn load_refresh_token() -> Option<String> {
    read(REFRESH_TOKEN_KEY)
}

/// Persist both tokens. The refresh token is only overwritten when the
/// backend actually returned one (it is optional on refresh responses).
pub fn save(access_token: &str, refresh_token: Option<&str>) {
    write(ACCESS_TOKEN_KEY, access_token);
    if let Some(refresh) = refresh_token {
        write(REFRESH_TOKEN_KEY, refresh);
    }
}

/// Remove both tokens.
pub fn clear() {
    remove(ACCESS_TOKEN_KEY);
    remove(REFRESH_TOKEN_KEY);
}

fn read(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

fn write(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
