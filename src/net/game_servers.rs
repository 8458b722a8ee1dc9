//! Game-server resource calls.
//!
//! Stateless wrappers over `/api/game-servers`; servers are addressed by
//! slug everywhere except creation.

#[cfg(test)]
#[path = "game_servers_test.rs"]
mod game_servers_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{CreateGameServerRequest, GameServer, UpdateGameServerRequest};
use crate::state::session::Session;

const BASE: &str = "/api/game-servers";

fn server_endpoint(slug: &str) -> String {
    format!("{BASE}/{slug}")
}

/// List the current user's game servers.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn list(session: Session) -> Result<Vec<GameServer>, ApiError> {
    http::get_json(session, BASE).await
}

/// Fetch one game server by slug.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn get(session: Session, slug: &str) -> Result<GameServer, ApiError> {
    http::get_json(session, &server_endpoint(slug)).await
}

/// Create a game server.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn create(session: Session, data: &CreateGameServerRequest) -> Result<GameServer, ApiError> {
    http::post_json(session, BASE, data).await
}

/// Update name/description of an existing game server.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn update(
    session: Session,
    slug: &str,
    data: &UpdateGameServerRequest,
) -> Result<GameServer, ApiError> {
    http::put_json(session, &server_endpoint(slug), data).await
}

/// Delete a game server.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn delete(session: Session, slug: &str) -> Result<(), ApiError> {
    http::delete_no_content(session, &server_endpoint(slug)).await
}
