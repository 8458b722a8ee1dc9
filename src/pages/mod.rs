//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, errors, busy flags)
//! and delegates rendering details to `components`. Fetched data is local to
//! the page and rebuilt on every navigation.

pub mod container_detail;
pub mod containers;
pub mod game_server_detail;
pub mod game_servers;
pub mod login;
pub mod mods;
pub mod oauth_callback;
pub mod register;
