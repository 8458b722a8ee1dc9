//! Modal dialog for creating or editing a mod catalog entry.

#[cfg(test)]
#[path = "mod_form_test.rs"]
mod mod_form_test;

use leptos::prelude::*;

use crate::net::types::{CreateModRequest, Mod, UpdateModRequest};
use crate::state::session::Session;

pub(crate) fn validate_mod_input(name: &str, slug: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name is required");
    }
    if slug.trim().is_empty() {
        return Err("Slug is required");
    }
    Ok(())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

pub(crate) fn build_create_request(
    name: &str,
    slug: &str,
    description: &str,
    source_url: &str,
    version: &str,
) -> CreateModRequest {
    CreateModRequest {
        name: name.trim().to_owned(),
        slug: slug.trim().to_owned(),
        description: optional(description),
        source_url: optional(source_url),
        version: optional(version),
    }
}

pub(crate) fn build_update_request(
    name: &str,
    slug: &str,
    description: &str,
    source_url: &str,
    version: &str,
) -> UpdateModRequest {
    UpdateModRequest {
        name: Some(name.trim().to_owned()),
        slug: Some(slug.trim().to_owned()),
        description: optional(description),
        source_url: optional(source_url),
        version: optional(version),
    }
}

/// Create/edit dialog; pass `existing` to edit. Owns the save call and
/// reports the saved record back through `on_saved`.
#[component]
pub fn ModFormDialog(
    #[prop(optional)] existing: Option<Mod>,
    on_saved: Callback<Mod>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<Session>();
    let editing_id = existing.as_ref().map(|m| m.id);
    let name = RwSignal::new(existing.as_ref().map(|m| m.name.clone()).unwrap_or_default());
    let slug = RwSignal::new(existing.as_ref().map(|m| m.slug.clone()).unwrap_or_default());
    let description =
        RwSignal::new(existing.as_ref().and_then(|m| m.description.clone()).unwrap_or_default());
    let source_url =
        RwSignal::new(existing.as_ref().and_then(|m| m.source_url.clone()).unwrap_or_default());
    let version =
        RwSignal::new(existing.as_ref().and_then(|m| m.version.clone()).unwrap_or_default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let title = if editing_id.is_some() { "Edit Mod" } else { "Add Mod" };

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        if let Err(message) = validate_mod_input(&name.get_untracked(), &slug.get_untracked()) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => {
                    let request = build_update_request(
                        &name.get_untracked(),
                        &slug.get_untracked(),
                        &description.get_untracked(),
                        &source_url.get_untracked(),
                        &version.get_untracked(),
                    );
                    crate::net::mods::update(session, id, &request).await
                }
                None => {
                    let request = build_create_request(
                        &name.get_untracked(),
                        &slug.get_untracked(),
                        &description.get_untracked(),
                        &source_url.get_untracked(),
                        &version.get_untracked(),
                    );
                    crate::net::mods::create(session, &request).await
                }
            };
            match result {
                Ok(saved) => on_saved.run(saved),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
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
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Slug"
                        <input
                            class="dialog__input dialog__input--mono"
                            type="text"
                            prop:value=move || slug.get()
                            on:input=move |ev| slug.set(event_target_value(&ev))
                        />
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
                    <label class="dialog__label">
                        "Source URL (optional)"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || source_url.get()
                            on:input=move |ev| source_url.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Version (optional)"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || version.get()
                            on:input=move |ev| version.set(event_target_value(&ev))
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
                            {move || if busy.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
