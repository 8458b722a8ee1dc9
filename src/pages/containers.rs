//! Container list page, the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the container inventory on mount and after every start/stop, and
//! tracks in-flight actions per container id so only the affected card is
//! disabled.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::container_card::ContainerCard;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::net::types::Container;
use crate::state::session::Session;
use crate::util::guard;

#[component]
pub fn ContainerListPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_auth_redirect(session, navigate.clone());

    let containers = RwSignal::new(Vec::<Container>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let busy_ids = RwSignal::new(HashSet::<String>::new());
    let notice = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::containers::list(session).await {
                Ok(items) => containers.set(items),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };
    load();

    let on_start = Callback::new(move |id: String| {
        busy_ids.update(|set| {
            set.insert(id.clone());
        });
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::containers::start(session, &id).await {
                Ok(()) => {
                    notice.set(Some("Container started".to_owned()));
                    load();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            busy_ids.update(|set| {
                set.remove(&id);
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let on_stop = Callback::new(move |id: String| {
        busy_ids.update(|set| {
            set.insert(id.clone());
        });
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let timeout = crate::net::containers::DEFAULT_STOP_TIMEOUT_SECS;
            match crate::net::containers::stop(session, &id, timeout).await {
                Ok(()) => {
                    notice.set(Some("Container stopped".to_owned()));
                    load();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            busy_ids.update(|set| {
                set.remove(&id);
            });
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    // Navigation is driven through a signal so card callbacks stay plain data.
    let open_details = RwSignal::new(None::<String>);
    let navigate_details = navigate.clone();
    Effect::new(move || {
        if let Some(id) = open_details.get() {
            open_details.set(None);
            navigate_details(&format!("/containers/{id}"), NavigateOptions::default());
        }
    });
    let on_details = Callback::new(move |id: String| open_details.set(Some(id)));

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Containers"</h1>
                <span class="page__spacer"></span>
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
                fallback=|| view! { <p class="page__loading">"Loading containers..."</p> }
            >
                <div class="page__grid">
                    {move || {
                        let items = containers.get();
                        if items.is_empty() {
                            view! {
                                <EmptyState
                                    title="No Containers Found"
                                    detail="There are no containers running on this system."
                                />
                            }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|container| {
                                    let busy = busy_ids.get().contains(&container.id);
                                    view! {
                                        <ContainerCard
                                            container=container
                                            busy=busy
                                            on_start=on_start
                                            on_stop=on_stop
                                            on_details=on_details
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
