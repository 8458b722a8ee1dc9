//! Card for one game server in the list view.

use leptos::prelude::*;

use crate::components::status_chip::{StatusChip, game_server_status_modifier};
use crate::net::types::GameServer;

/// A card representing a managed game server.
#[component]
pub fn GameServerCard(
    server: GameServer,
    on_details: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let status = server.status;
    let details_slug = server.slug.clone();
    let delete_slug = server.slug.clone();
    let description = server.description.unwrap_or_default();

    view! {
        <div class="resource-card">
            <div class="resource-card__head">
                <span class="resource-card__name">{server.name}</span>
                <StatusChip label=status.to_string() modifier=game_server_status_modifier(status) />
            </div>
            <span class="resource-card__meta resource-card__meta--mono">{server.slug}</span>
            <span class="resource-card__meta resource-card__meta--mono">{server.image}</span>
            <Show when={
                let description = description.clone();
                move || !description.is_empty()
            }>
                <span class="resource-card__meta">{description.clone()}</span>
            </Show>
            <div class="resource-card__actions">
                <button
                    class="btn"
                    on:click={
                        let slug = details_slug.clone();
                        move |_| on_details.run(slug.clone())
                    }
                >
                    "Details"
                </button>
                <button
                    class="btn btn--danger"
                    on:click={
                        let slug = delete_slug.clone();
                        move |_| on_delete.run(slug.clone())
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
