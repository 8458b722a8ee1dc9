//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational: they render resource records and
//! forward user intent to their parent page through callbacks. The create
//! and edit dialogs own their own submission calls, mirroring how the pages
//! delegate dialog flows.

pub mod confirm_dialog;
pub mod container_card;
pub mod empty_state;
pub mod error_banner;
pub mod game_server_card;
pub mod game_server_create;
pub mod mod_form;
pub mod status_chip;
