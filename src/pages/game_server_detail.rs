//! Game server detail page: configuration overview, edit form, delete.

#[cfg(test)]
#[path = "game_server_detail_test.rs"]
mod game_server_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::status_chip::{StatusChip, game_server_status_modifier};
use crate::net::types::{GameServer, GameServerEnv, GameServerPort, UpdateGameServerRequest};
use crate::state::session::Session;
use crate::util::guard;

/// Secret values never reach the DOM; everything else renders verbatim.
pub(crate) fn display_env_value(env: &GameServerEnv) -> String {
    if env.is_secret {
        "••••••••".to_owned()
    } else {
        env.value.clone().unwrap_or_default()
    }
}

pub(crate) fn format_server_port(port: &GameServerPort) -> String {
    format!("{} → {}/{}", port.host_port, port.container_port, port.protocol)
}

pub(crate) fn validate_update_input(name: &str) -> Result<(), &'static str> {
    if name.trim().len() < 3 {
        return Err("Name must be at least 3 characters");
    }
    Ok(())
}

/// Both fields are always sent; an emptied description clears it server-side.
pub(crate) fn build_update_request(name: &str, description: &str) -> UpdateGameServerRequest {
    UpdateGameServerRequest {
        name: Some(name.trim().to_owned()),
        description: Some(description.trim().to_owned()),
    }
}

#[component]
pub fn GameServerDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_auth_redirect(session, navigate.clone());

    let params = use_params_map();
    let server_slug = move || params.with_untracked(|p| p.get("slug").unwrap_or_default());

    let server = RwSignal::new(None::<GameServer>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Edit form drafts, seeded from the loaded record.
    let name_draft = RwSignal::new(String::new());
    let description_draft = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let show_delete = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::game_servers::get(session, &server_slug()).await {
                Ok(found) => {
                    name_draft.set(found.name.clone());
                    description_draft.set(found.description.clone().unwrap_or_default());
                    server.set(Some(found));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };
    load();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        if let Err(message) = validate_update_input(&name_draft.get()) {
            notice.set(Some(message.to_owned()));
            return;
        }
        saving.set(true);
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let request =
                build_update_request(&name_draft.get_untracked(), &description_draft.get_untracked());
            match crate::net::game_servers::update(session, &server_slug(), &request).await {
                Ok(updated) => {
                    notice.set(Some("Server updated".to_owned()));
                    name_draft.set(updated.name.clone());
                    description_draft.set(updated.description.clone().unwrap_or_default());
                    server.set(Some(updated));
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            saving.set(false);
        });
        #[cfg(not(feature = "csr"))]
        saving.set(false);
    };

    let on_delete_cancel = Callback::new(move |()| show_delete.set(false));

    // Leaving the page after a successful delete is driven through a signal,
    // keeping the confirm callback free of router state.
    let deleted = RwSignal::new(false);
    let navigate_back = navigate.clone();
    Effect::new(move || {
        if deleted.get() {
            navigate_back("/game-servers", leptos_router::NavigateOptions::default());
        }
    });
    let on_delete_confirm = Callback::new(move |()| {
        show_delete.set(false);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::game_servers::delete(session, &server_slug()).await {
                Ok(()) => deleted.set(true),
                Err(e) => notice.set(Some(e.to_string())),
            }
        });
    });

    view! {
        <div class="page">
            <header class="page__header">
                <a class="page__back" href="/game-servers">"← Game Servers"</a>
                <h1 class="page__title">
                    {move || server.get().map_or_else(|| "Game Server".to_owned(), |s| s.name)}
                </h1>
                <span class="page__spacer"></span>
                <button class="btn btn--danger" on:click=move |_| show_delete.set(true)>
                    "Delete"
                </button>
            </header>

            <Show when=move || notice.get().is_some()>
                <p class="page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                error.get().map(|message| {
                    view! { <ErrorBanner message=message on_retry=Callback::new(move |()| load()) /> }
                })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__loading">"Loading game server..."</p> }
            >
                {move || {
                    server
                        .get()
                        .map(|s| {
                            let ports = s.ports.clone();
                            let envs = s.envs.clone();
                            view! {
                                <div class="info-card">
                                    <h2 class="info-card__title">"Server Information"</h2>
                                    <div class="info-card__grid">
                                        <span class="info-card__label">"Slug"</span>
                                        <span class="info-card__value info-card__value--mono">{s.slug.clone()}</span>
                                        <span class="info-card__label">"Image"</span>
                                        <span class="info-card__value info-card__value--mono">{s.image.clone()}</span>
                                        <span class="info-card__label">"Status"</span>
                                        <span class="info-card__value">
                                            <StatusChip
                                                label=s.status.to_string()
                                                modifier=game_server_status_modifier(s.status)
                                            />
                                        </span>
                                        <span class="info-card__label">"Container"</span>
                                        <span class="info-card__value info-card__value--mono">
                                            {s.container_id.clone().unwrap_or_else(|| "not created".to_owned())}
                                        </span>
                                    </div>
                                    <Show when={
                                        let has_ports = !ports.is_empty();
                                        move || has_ports
                                    }>
                                        <h3 class="info-card__section">"Ports"</h3>
                                        <div class="info-card__badges">
                                            {ports
                                                .iter()
                                                .map(|port| {
                                                    view! { <span class="badge">{format_server_port(port)}</span> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                    <Show when={
                                        let has_envs = !envs.is_empty();
                                        move || has_envs
                                    }>
                                        <h3 class="info-card__section">"Environment"</h3>
                                        <div class="info-card__badges">
                                            {envs
                                                .iter()
                                                .map(|env| {
                                                    view! {
                                                        <span class="badge badge--muted">
                                                            {format!("{}={}", env.key, display_env_value(env))}
                                                        </span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                }}
            </Show>

            <Show when=move || !loading.get() && server.get().is_some()>
                <div class="info-card">
                    <h2 class="info-card__title">"Edit"</h2>
                    <form class="dialog__form" on:submit=on_save>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || name_draft.get()
                                on:input=move |ev| name_draft.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Description"
                            <input
                                class="dialog__input"
                                type="text"
                                prop:value=move || description_draft.get()
                                on:input=move |ev| description_draft.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || show_delete.get()>
                <ConfirmDialog
                    title="Delete Game Server"
                    message={format!(
                        "This will permanently delete \"{}\" and its configuration.",
                        server_slug()
                    )}
                    confirm_label="Delete"
                    danger=true
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
