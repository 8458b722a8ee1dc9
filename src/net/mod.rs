//! REST networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request plumbing (bearer attachment, 401 handling, error
//! mapping), `types` defines the wire DTOs, and the remaining modules are
//! one thin stateless wrapper per backend resource.

pub mod auth;
pub mod containers;
pub mod game_servers;
pub mod http;
pub mod mods;
pub mod types;
