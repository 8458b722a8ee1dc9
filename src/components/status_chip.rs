//! Colored chip for container/game-server lifecycle states.

#[cfg(test)]
#[path = "status_chip_test.rs"]
mod status_chip_test;

use leptos::prelude::*;

use crate::net::types::{ContainerState, GameServerStatus};

/// Modifier class suffix for a container state.
#[must_use]
pub fn container_state_modifier(state: ContainerState) -> &'static str {
    match state {
        ContainerState::Running => "ok",
        ContainerState::Paused | ContainerState::Restarting => "busy",
        ContainerState::Stopped
        | ContainerState::Created
        | ContainerState::Exited
        | ContainerState::Unknown => "idle",
    }
}

/// Modifier class suffix for a game-server status.
#[must_use]
pub fn game_server_status_modifier(status: GameServerStatus) -> &'static str {
    match status {
        GameServerStatus::Running => "ok",
        GameServerStatus::Creating => "busy",
        GameServerStatus::Stopped => "idle",
        GameServerStatus::Error => "err",
    }
}

/// A small labeled state chip.
#[component]
pub fn StatusChip(label: String, modifier: &'static str) -> impl IntoView {
    view! { <span class=format!("status-chip status-chip--{modifier}")>{label}</span> }
}
