//! Mod catalog resource calls.

#[cfg(test)]
#[path = "mods_test.rs"]
mod mods_test;

use crate::net::http::{self, ApiError};
use crate::net::types::{CreateModRequest, Mod, UpdateModRequest};
use crate::state::session::Session;

const BASE: &str = "/api/mods";

fn mod_endpoint(id: u64) -> String {
    format!("{BASE}/{id}")
}

/// List the mod catalog.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn list(session: Session) -> Result<Vec<Mod>, ApiError> {
    http::get_json(session, BASE).await
}

/// Fetch one mod by id.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn get(session: Session, id: u64) -> Result<Mod, ApiError> {
    http::get_json(session, &mod_endpoint(id)).await
}

/// Create a mod catalog entry.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn create(session: Session, data: &CreateModRequest) -> Result<Mod, ApiError> {
    http::post_json(session, BASE, data).await
}

/// Update an existing mod.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn update(session: Session, id: u64, data: &UpdateModRequest) -> Result<Mod, ApiError> {
    http::put_json(session, &mod_endpoint(id), data).await
}

/// Delete a mod.
///
/// # Errors
///
/// Returns the underlying `ApiError`.
pub async fn delete(session: Session, id: u64) -> Result<(), ApiError> {
    http::delete_no_content(session, &mod_endpoint(id)).await
}
