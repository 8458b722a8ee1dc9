//! Modal dialog for creating a game server.
//!
//! DESIGN
//! ======
//! The slug is derived from the name while the user has not touched the slug
//! field; a manual edit takes over for good. The dialog owns the create call
//! and only reports back on success, so validation and backend errors stay
//! inside the modal.

#[cfg(test)]
#[path = "game_server_create_test.rs"]
mod game_server_create_test;

use leptos::prelude::*;

use crate::net::types::{CreateGameServerRequest, GameServer};
use crate::state::session::Session;

/// Supported game keys with their display labels; the backend maps the key
/// to a container image.
pub(crate) const GAME_OPTIONS: [(&str, &str); 7] = [
    ("minecraft", "Minecraft"),
    ("palworld", "Palworld"),
    ("ark", "ARK: Survival Evolved"),
    ("rust", "Rust"),
    ("factorio", "Factorio"),
    ("satisfactory", "Satisfactory"),
    ("7daystodie", "7 Days to Die"),
];

/// Derive a slug from a display name: lowercase, alphanumeric runs joined by
/// single dashes.
pub(crate) fn generate_slug(name: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in name.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Slugs are lowercase alphanumeric segments joined by single dashes.
pub(crate) fn slug_is_valid(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validate the dialog fields and build the create payload.
pub(crate) fn validate_server_input(
    name: &str,
    slug: &str,
    game: &str,
    description: &str,
) -> Result<CreateGameServerRequest, &'static str> {
    let name = name.trim();
    if name.len() < 3 {
        return Err("Name must be at least 3 characters");
    }
    if !slug_is_valid(slug) {
        return Err("Slug must be lowercase letters and digits separated by dashes");
    }
    if !GAME_OPTIONS.iter().any(|(key, _)| *key == game) {
        return Err("Choose a supported game");
    }
    let description = description.trim();
    Ok(CreateGameServerRequest {
        slug: slug.to_owned(),
        name: name.to_owned(),
        game: game.to_owned(),
        description: if description.is_empty() { None } else { Some(description.to_owned()) },
    })
}

/// Modal dialog for creating a new game server.
#[component]
pub fn GameServerCreateDialog(
    on_created: Callback<GameServer>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let name = RwSignal::new(String::new());
    let slug = RwSignal::new(String::new());
    let slug_dirty = RwSignal::new(false);
    let game = RwSignal::new("minecraft".to_owned());
    let description = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let input = validate_server_input(
            &name.get_untracked(),
            &slug.get_untracked(),
            &game.get_untracked(),
            &description.get_untracked(),
        );
        match input {
            Ok(request) => {
                busy.set(true);
                error.set(None);
                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    match crate::net::game_servers::create(session, &request).await {
                        Ok(server) => on_created.run(server),
                        Err(e) => {
                            error.set(Some(e.to_string()));
                            busy.set(false);
                        }
                    }
                });
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (request, session, on_created);
                }
            }
            Err(message) => error.set(Some(message.to_owned())),
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Game Server"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit();
                    }
                >
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                if !slug_dirty.get_untracked() {
                                    slug.set(generate_slug(&value));
                                }
                                name.set(value);
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Slug"
                        <input
                            class="dialog__input dialog__input--mono"
                            type="text"
                            prop:value=move || slug.get()
                            on:input=move |ev| {
                                slug_dirty.set(true);
                                slug.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Game"
                        <select
                            class="dialog__input"
                            prop:value=move || game.get()
                            on:change=move |ev| game.set(event_target_value(&ev))
                        >
                            {GAME_OPTIONS
                                .iter()
                                .map(|(key, label)| {
                                    view! { <option value={*key}>{*label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Description (optional)"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
