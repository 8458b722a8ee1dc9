//! Container detail page: info card, port mappings, labels, and logs.

#[cfg(test)]
#[path = "container_detail_test.rs"]
mod container_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::container_card::{can_start, can_stop};
use crate::components::error_banner::ErrorBanner;
use crate::components::status_chip::{StatusChip, container_state_modifier};
use crate::net::types::{Container, ContainerLogEntry, PortMapping};
use crate::state::session::Session;
use crate::util::guard;

/// Render a port mapping the way the backend publishes it.
pub(crate) fn format_port_mapping(port: &PortMapping) -> String {
    format!(
        "{}:{} → {}/{}",
        port.host_ip.as_deref().unwrap_or("0.0.0.0"),
        port.host_port,
        port.container_port,
        port.protocol
    )
}

/// CSS class for one log line, keyed by output stream.
pub(crate) fn log_entry_class(stream: &str) -> &'static str {
    if stream == "stderr" { "log-line log-line--stderr" } else { "log-line log-line--stdout" }
}

#[component]
pub fn ContainerDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_auth_redirect(session, navigate);

    let params = use_params_map();
    let container_id = move || params.with_untracked(|p| p.get("id").unwrap_or_default());

    let container = RwSignal::new(None::<Container>);
    let logs = RwSignal::new(Vec::<ContainerLogEntry>::new());
    let loading = RwSignal::new(true);
    let logs_loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);
    let action_busy = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::containers::get(session, &container_id()).await {
                Ok(found) => container.set(Some(found)),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };

    let load_logs = move || {
        logs_loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let lines = crate::net::containers::DEFAULT_LOG_LINES;
            match crate::net::containers::logs(session, &container_id(), lines).await {
                Ok(entries) => logs.set(entries),
                Err(e) => notice.set(Some(e.to_string())),
            }
            logs_loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        logs_loading.set(false);
    };

    load();
    load_logs();

    let on_start = move |_| {
        action_busy.set(true);
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::containers::start(session, &container_id()).await {
                Ok(()) => {
                    notice.set(Some("Container started".to_owned()));
                    load();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            action_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        action_busy.set(false);
    };

    let on_stop = move |_| {
        action_busy.set(true);
        notice.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let timeout = crate::net::containers::DEFAULT_STOP_TIMEOUT_SECS;
            let result = crate::net::containers::stop(session, &container_id(), timeout).await;
            match result {
                Ok(()) => {
                    notice.set(Some("Container stopped".to_owned()));
                    load();
                }
                Err(e) => notice.set(Some(e.to_string())),
            }
            action_busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        action_busy.set(false);
    };

    view! {
        <div class="page">
            <header class="page__header">
                <a class="page__back" href="/containers">"← Containers"</a>
                <h1 class="page__title">
                    {move || {
                        container.get().map_or_else(|| "Container".to_owned(), |c| c.name)
                    }}
                </h1>
                <span class="page__spacer"></span>
                <Show when=move || container.get().is_some_and(|c| can_start(c.state))>
                    <button class="btn btn--primary" disabled=move || action_busy.get() on:click=on_start>
                        "Start"
                    </button>
                </Show>
                <Show when=move || container.get().is_some_and(|c| can_stop(c.state))>
                    <button class="btn btn--danger" disabled=move || action_busy.get() on:click=on_stop>
                        "Stop"
                    </button>
                </Show>
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
                fallback=|| view! { <p class="page__loading">"Loading container..."</p> }
            >
                {move || {
                    container
                        .get()
                        .map(|c| {
                            let mut labels: Vec<_> = c.labels.clone().into_iter().collect();
                            labels.sort();
                            let ports = c.ports.clone();
                            view! {
                                <div class="info-card">
                                    <h2 class="info-card__title">"Container Information"</h2>
                                    <div class="info-card__grid">
                                        <span class="info-card__label">"ID"</span>
                                        <span class="info-card__value info-card__value--mono">{c.id.clone()}</span>
                                        <span class="info-card__label">"Name"</span>
                                        <span class="info-card__value">{c.name.clone()}</span>
                                        <span class="info-card__label">"Image"</span>
                                        <span class="info-card__value info-card__value--mono">{c.image.clone()}</span>
                                        <span class="info-card__label">"State"</span>
                                        <span class="info-card__value">
                                            <StatusChip
                                                label=c.state.to_string()
                                                modifier=container_state_modifier(c.state)
                                            />
                                        </span>
                                        <span class="info-card__label">"Status"</span>
                                        <span class="info-card__value">{c.status.clone()}</span>
                                        <span class="info-card__label">"Created"</span>
                                        <span class="info-card__value">{c.created.clone()}</span>
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
                                                    view! {
                                                        <span class="badge">{format_port_mapping(port)}</span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </Show>
                                    <Show when={
                                        let has_labels = !labels.is_empty();
                                        move || has_labels
                                    }>
                                        <h3 class="info-card__section">"Labels"</h3>
                                        <div class="info-card__badges">
                                            {labels
                                                .iter()
                                                .map(|(key, value)| {
                                                    view! {
                                                        <span class="badge badge--muted">
                                                            {format!("{key}: {value}")}
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

            <div class="info-card">
                <header class="info-card__header">
                    <h2 class="info-card__title">"Logs"</h2>
                    <span class="page__spacer"></span>
                    <button class="btn" on:click=move |_| load_logs() disabled=move || logs_loading.get()>
                        "Refresh"
                    </button>
                </header>
                <pre class="log-pane">
                    {move || {
                        let entries = logs.get();
                        if entries.is_empty() {
                            view! { <span class="log-line log-line--empty">"No logs available"</span> }
                                .into_any()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <span class=log_entry_class(&entry.stream)>
                                            {entry.message}
                                            "\n"
                                        </span>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </pre>
            </div>
        </div>
    }
}
