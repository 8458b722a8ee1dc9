//! Mod catalog page: table of mods with create, edit, and delete flows.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::error_banner::ErrorBanner;
use crate::components::mod_form::ModFormDialog;
use crate::net::types::Mod;
use crate::state::session::Session;
use crate::util::guard;

#[component]
pub fn ModListPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    guard::install_auth_redirect(session, navigate);

    let mods = RwSignal::new(Vec::<Mod>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // `Some(None)` opens the form for creation, `Some(Some(m))` for editing.
    let form_target = RwSignal::new(None::<Option<Mod>>);
    let delete_id = RwSignal::new(None::<u64>);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::mods::list(session).await {
                Ok(items) => mods.set(items),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };
    load();

    let on_saved = Callback::new(move |saved: Mod| {
        form_target.set(None);
        notice.set(Some(format!("Mod \"{}\" saved", saved.name)));
        load();
    });
    let on_form_cancel = Callback::new(move |()| form_target.set(None));

    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        delete_id.set(None);
        loading.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::mods::delete(session, id).await {
                Ok(()) => notice.set(Some("Mod deleted".to_owned())),
                Err(e) => notice.set(Some(e.to_string())),
            }
            load();
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1 class="page__title">"Mods"</h1>
                <span class="page__spacer"></span>
                <button class="btn btn--primary" on:click=move |_| form_target.set(Some(None))>
                    "+ Add Mod"
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
                fallback=|| view! { <p class="page__loading">"Loading mods..."</p> }
            >
                {move || {
                    let items = mods.get();
                    if items.is_empty() {
                        view! {
                            <EmptyState
                                title="No Mods Yet"
                                detail="Add a mod to start building the catalog."
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="mod-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Slug"</th>
                                        <th>"Version"</th>
                                        <th>"Description"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {items
                                        .into_iter()
                                        .map(|entry| {
                                            let edit_entry = entry.clone();
                                            let entry_id = entry.id;
                                            view! {
                                                <tr>
                                                    <td>
                                                        {match entry.source_url.clone() {
                                                            Some(url) => view! {
                                                                <a class="mod-table__link" href=url target="_blank">
                                                                    {entry.name.clone()}
                                                                </a>
                                                            }
                                                                .into_any(),
                                                            None => view! { <span>{entry.name.clone()}</span> }
                                                                .into_any(),
                                                        }}
                                                    </td>
                                                    <td class="mod-table__mono">{entry.slug.clone()}</td>
                                                    <td class="mod-table__mono">
                                                        {entry.version.clone().unwrap_or_else(|| "-".to_owned())}
                                                    </td>
                                                    <td>{entry.description.clone().unwrap_or_default()}</td>
                                                    <td class="mod-table__actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| {
                                                                form_target.set(Some(Some(edit_entry.clone())));
                                                            }
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| delete_id.set(Some(entry_id))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </Show>

            {move || {
                form_target.get().map(|existing| match existing {
                    Some(entry) => view! {
                        <ModFormDialog existing=entry on_saved=on_saved on_cancel=on_form_cancel />
                    }
                        .into_any(),
                    None => view! {
                        <ModFormDialog on_saved=on_saved on_cancel=on_form_cancel />
                    }
                        .into_any(),
                })
            }}

            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Mod"
                    message="This will remove the mod from the catalog.".to_owned()
                    confirm_label="Delete"
                    danger=true
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}
