//! Request plumbing for all REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outgoing request passes through here. The layer attaches the
//! bearer token (skipping auth endpoints), maps failures into `ApiError`,
//! and clears the session when an auth endpoint answers 401 (e.g. a failed
//! refresh). Concurrent 401s each clear independently; clearing is
//! idempotent. No retries, no request queuing.
//!
//! ERROR HANDLING
//! ==============
//! Callers receive `ApiError` whose `Display` output is what pages render
//! inline. The status variant prefers the backend body's `message`, then
//! its `error` code, then a generic fallback.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg(any(test, feature = "csr"))]
use crate::net::types::ErrorBody;
use crate::state::session::Session;

/// Path prefix identifying authentication endpoints.
pub const AUTH_PREFIX: &str = "/auth";

/// Failure surfaced to the UI for any REST call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn is_auth_path(path: &str) -> bool {
    path.starts_with(AUTH_PREFIX)
}

/// Value for the `Authorization` header, or `None` when the request targets
/// an auth endpoint or no token is present.
#[cfg(any(test, feature = "csr"))]
fn bearer_header(path: &str, token: Option<&str>) -> Option<String> {
    if is_auth_path(path) {
        return None;
    }
    token.map(|token| format!("Bearer {token}"))
}

/// Whether a response status must clear the stored session: only a 401 from
/// an auth endpoint does (a failed refresh or logout means the session is
/// gone for good). A 401 elsewhere passes through untouched.
#[cfg(any(test, feature = "csr"))]
fn clears_session(path: &str, status: u16) -> bool {
    status == 401 && is_auth_path(path)
}

/// Human-readable message for a non-2xx response.
#[cfg(any(test, feature = "csr"))]
fn status_message(status: u16, body: Option<&ErrorBody>) -> String {
    body.and_then(|body| body.message.clone().or_else(|| Some(body.error.clone())))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("request failed (status {status})"))
}

#[cfg(feature = "csr")]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "csr")]
async fn execute(
    session: Session,
    verb: Verb,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let builder = match verb {
        Verb::Get => Request::get(path),
        Verb::Post => Request::post(path),
        Verb::Put => Request::put(path),
        Verb::Delete => Request::delete(path),
    };
    let builder = match bearer_header(path, session.access_token().as_deref()) {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    };

    let response = match body {
        Some(value) => builder
            .json(&value)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    if clears_session(path, response.status()) {
        log::warn!("auth endpoint {path} answered 401; clearing session");
        session.clear_tokens();
    }

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.json::<ErrorBody>().await.ok();
        Err(ApiError::Status { status, message: status_message(status, body.as_ref()) })
    }
}

/// GET `path` and decode the JSON response.
pub(crate) async fn get_json<T: DeserializeOwned>(session: Session, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = execute(session, Verb::Get, path, None).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}

/// POST a JSON body to `path` and decode the JSON response.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    session: Session,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let response = execute(session, Verb::Post, path, Some(value)).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, body);
        Err(ApiError::Unavailable)
    }
}

/// PUT a JSON body to `path` and decode the JSON response.
pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    session: Session,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Network(e.to_string()))?;
        let response = execute(session, Verb::Put, path, Some(value)).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path, body);
        Err(ApiError::Unavailable)
    }
}

/// POST with an empty JSON object body, ignoring any response body
/// (start/stop/logout style endpoints).
pub(crate) async fn post_no_content(session: Session, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        execute(session, Verb::Post, path, Some(serde_json::json!({}))).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}

/// DELETE `path`, ignoring any response body.
pub(crate) async fn delete_no_content(session: Session, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        execute(session, Verb::Delete, path, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, path);
        Err(ApiError::Unavailable)
    }
}
