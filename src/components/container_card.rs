//! Card for one container in the list view.
//!
//! DESIGN
//! ======
//! Keeps container presentation consistent between the list grid and the
//! detail header while centralizing which actions a state allows.

#[cfg(test)]
#[path = "container_card_test.rs"]
mod container_card_test;

use leptos::prelude::*;

use crate::components::status_chip::{StatusChip, container_state_modifier};
use crate::net::types::{Container, ContainerState, PortMapping};

/// A container can be started from any resting state.
#[must_use]
pub fn can_start(state: ContainerState) -> bool {
    matches!(state, ContainerState::Stopped | ContainerState::Created | ContainerState::Exited)
}

/// A container can be stopped while it is running (or on its way there).
#[must_use]
pub fn can_stop(state: ContainerState) -> bool {
    matches!(state, ContainerState::Running | ContainerState::Restarting | ContainerState::Paused)
}

/// Compact published-ports line for the card footer.
#[must_use]
pub fn ports_summary(ports: &[PortMapping]) -> String {
    if ports.is_empty() {
        return "no published ports".to_owned();
    }
    ports
        .iter()
        .map(|port| format!("{}/{}", port.host_port, port.protocol))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A clickable card representing a container, with start/stop shortcuts.
#[component]
pub fn ContainerCard(
    container: Container,
    #[prop(optional)] busy: bool,
    on_start: Callback<String>,
    on_stop: Callback<String>,
    on_details: Callback<String>,
) -> impl IntoView {
    let state = container.state;
    let ports_line = ports_summary(&container.ports);
    let start_id = container.id.clone();
    let stop_id = container.id.clone();
    let details_id = container.id.clone();

    view! {
        <div class="resource-card" class:resource-card--busy=busy>
            <div class="resource-card__head">
                <span class="resource-card__name">{container.name}</span>
                <StatusChip label=state.to_string() modifier=container_state_modifier(state) />
            </div>
            <span class="resource-card__meta resource-card__meta--mono">{container.image}</span>
            <span class="resource-card__meta">{container.status}</span>
            <span class="resource-card__meta">{ports_line}</span>
            <div class="resource-card__actions">
                <Show when=move || can_start(state)>
                    <button
                        class="btn btn--primary"
                        disabled=busy
                        on:click={
                            let id = start_id.clone();
                            move |_| on_start.run(id.clone())
                        }
                    >
                        "Start"
                    </button>
                </Show>
                <Show when=move || can_stop(state)>
                    <button
                        class="btn btn--danger"
                        disabled=busy
                        on:click={
                            let id = stop_id.clone();
                            move |_| on_stop.run(id.clone())
                        }
                    >
                        "Stop"
                    </button>
                </Show>
                <button
                    class="btn"
                    on:click={
                        let id = details_id.clone();
                        move |_| on_details.run(id.clone())
                    }
                >
                    "Details"
                </button>
            </div>
        </div>
    }
}
