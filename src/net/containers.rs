//! Container resource calls.
//!
//! Stateless wrappers over `/api/containers`; no caching, no retries. List
//! and detail data is replaced wholesale by the calling page on refetch.

#[cfg(test)]
#[path = "containers_test.rs"]
mod containers_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{Container, ContainerLogEntry};
use crate::state::session::Session;

const BASE: &str = "/api/containers";

/// Grace period the backend gives a container before killing it.
pub const DEFAULT_STOP_TIMEOUT_SECS: u32 = 10;
/// Tail length requested for the logs pane.
pub const DEFAULT_LOG_LINES: u32 = 100;

fn container_endpoint(id: &str) -> String {
    format!("{BASE}/{id}")
}

fn start_endpoint(id: &str) -> String {
    format!("{BASE}/{id}/start")
}

fn stop_endpoint(id: &str, timeout_secs: u32) -> String {
    format!("{BASE}/{id}/stop?timeout={timeout_secs}")
}

fn logs_endpoint(id: &str, lines: u32) -> String {
    format!("{BASE}/{id}/logs?lines={lines}")
}

/// List all containers visible to the current user.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn list(session: Session) -> Result<Vec<Container>, ApiError> {
    http::get_json(session, BASE).await
}

/// Fetch one container by id or name.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn get(session: Session, id: &str) -> Result<Container, ApiError> {
    http::get_json(session, &container_endpoint(id)).await
}

/// Start a container.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn start(session: Session, id: &str) -> Result<(), ApiError> {
    http::post_no_content(session, &start_endpoint(id)).await
}

/// Stop a container, giving it `timeout_secs` to shut down cleanly.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn stop(session: Session, id: &str, timeout_secs: u32) -> Result<(), ApiError> {
    http::post_no_content(session, &stop_endpoint(id, timeout_secs)).await
}

/// Fetch the last `lines` log entries of a container.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn logs(session: Session, id: &str, lines: u32) -> Result<Vec<ContainerLogEntry>, ApiError> {
    http::get_json(session, &logs_endpoint(id, lines)).await
}
