//! Game server list page with create and delete flows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::game_server_card::GameServerCard;
use crate::components::game_server_create::GameServerCreateDialog;
use crate::net::types::GameServer;
use crate::state::session::Session;
use crate::util::guard;

#[component]
pub fn GameServerListPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_auth_redirect(session, navigate.clone());

    let servers = RwSignal::new(Vec::<GameServer>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let show_create = RwSignal::new(false);
    let delete_slug = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::game_servers::list(session).await {
                Ok(items) => servers.set(items),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };
    load();

    let on_created = Callback::new(move |server: GameServer| {
        show_create.set(false);
        notice.set(Some(format!("Server \"{}\" created", server.name)));
        load();
    });
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    // Navigation is driven through a signal so card callbacks stay plain data.
    let open_details = RwSignal::new(None::<String>);
    let navigate_details = navigate.clone();
    Effect::new(move || {
        if let Some(slug) = open_details.get() {
            open_details.set(None);
            navigate_details(&format!("/game-servers/{slug}"), NavigateOptions::default());
        }
    });
    let on_details = Callback::new(move |slug: String| open_details.set(Some(slug)));
    let on_delete_request = Callback::new(move |slug: String| delete_slug.set(Some(slug)));
    let on_delete_cancel = Callback::new(move |()| delete_slug.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(slug) = delete_slug.get_untracked() else {
            return;
        };
        delete_slug.set(None);
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::game_servers::delete(session, &slug).await {
                Ok(()) => notice.set(Some("Server deleted".to_owned())),
                Err(e) => notice.set(Some(e.to_string())),
            }
            load();
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = slug;
            loading.set(false);
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Game Servers"</h1>
                <span class="page__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Server"
                </button>
                <button class="btn" on:click=move |_| load() disabled=move || loading.get()>
                    "Refresh"
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
                fallback=|| view! { <p class="page__loading">"Loading game servers..."</p> }
            >
                <div class="page__grid">
                    {move || {
                        let items = servers.get();
                        if items.is_empty() {
                            view! {
                                <EmptyState
                                    title="No Game Servers"
                                    detail="Create your first server to get started."
                                />
                            }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|server| {
                                    view! {
                                        <GameServerCard
                                            server=server
                                            on_details=on_details
                                            on_delete=on_delete_request
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Show>

            <Show when=move || show_create.get()>
                <GameServerCreateDialog on_created=on_created on_cancel=on_create_cancel />
            </Show>
            <Show when=move || delete_slug.get().is_some()>
                <ConfirmDialog
                    title="Delete Game Server"
                    message={format!(
                        "This will permanently delete \"{}\" and its configuration.",
                        delete_slug.get().unwrap_or_default()
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
