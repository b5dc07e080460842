//! Create/edit modal for portfolio projects.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

use leptos::prelude::*;

use crate::net::types::{Project, ProjectInput};
use crate::util::scroll_lock::ScrollLock;

/// Split a comma-separated tech-stack field into trimmed, non-empty entries.
pub(crate) fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Modal form for creating or editing a project.
///
/// `on_close` fires after a successful save or a cancel; the owning page
/// refetches its list there. On a failed save the form stays open with an
/// inline error so nothing has to be re-entered.
#[component]
pub fn ProjectFormModal(project: Option<Project>, on_close: Callback<()>) -> impl IntoView {
    let editing_id = project.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();

    let title = RwSignal::new(project.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        project
            .as_ref()
            .map(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        project
            .as_ref()
            .map_or_else(|| "Web".to_owned(), |p| p.category.clone()),
    );
    let tech_stack = RwSignal::new(
        project
            .as_ref()
            .map(|p| p.tech_stack.join(", "))
            .unwrap_or_default(),
    );
    let thumbnail = RwSignal::new(
        project
            .as_ref()
            .map(|p| p.thumbnail.clone())
            .unwrap_or_default(),
    );
    let live_url = RwSignal::new(
        project
            .as_ref()
            .and_then(|p| p.live_url.clone())
            .unwrap_or_default(),
    );
    let github_url = RwSignal::new(
        project
            .as_ref()
            .and_then(|p| p.github_url.clone())
            .unwrap_or_default(),
    );
    let featured = RwSignal::new(project.as_ref().is_some_and(|p| p.featured));

    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let submit_error = RwSignal::new(String::new());

    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    let on_thumb_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::services::upload_image(&file).await {
                    Ok(res) => thumbnail.set(res.url),
                    Err(e) => submit_error.set(e),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit = Callback::new(move |_| {
        if busy.get() || uploading.get() {
            return;
        }
        let input = ProjectInput {
            title: title.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            category: category.get(),
            tech_stack: split_csv(&tech_stack.get()),
            thumbnail: thumbnail.get(),
            live_url: Some(live_url.get()).filter(|s| !s.is_empty()),
            github_url: Some(github_url.get()).filter(|s| !s.is_empty()),
            featured: featured.get(),
        };
        if input.title.is_empty() || input.description.is_empty() {
            submit_error.set("Title and description are required.".to_owned());
            return;
        }
        if input.thumbnail.is_empty() {
            submit_error.set("Please upload a thumbnail image.".to_owned());
            return;
        }
        busy.set(true);
        submit_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let editing_id = editing_id.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => crate::net::services::update_project(id, &input)
                        .await
                        .map(|_| ()),
                    None => crate::net::services::create_project(&input).await.map(|_| ()),
                };
                match result {
                    Ok(()) => on_close.run(()),
                    Err(e) => {
                        submit_error.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{if is_edit { "Edit Project" } else { "New Project" }}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Category"
                    <select
                        class="dialog__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="Web">"Web"</option>
                        <option value="Mobile">"Mobile"</option>
                        <option value="Desktop">"Desktop"</option>
                        <option value="Other">"Other"</option>
                    </select>
                </label>

                <label class="dialog__label">
                    "Tech Stack (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Rust, Leptos, Postgres"
                        prop:value=move || tech_stack.get()
                        on:input=move |ev| tech_stack.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Thumbnail"
                    <input type="file" accept="image/*" on:change=on_thumb_file/>
                </label>
                <Show when=move || uploading.get()>
                    <p class="dialog__hint">"Uploading..."</p>
                </Show>
                <Show when=move || !thumbnail.get().is_empty()>
                    <img class="dialog__thumb-preview" src=move || thumbnail.get() alt="Thumbnail preview"/>
                </Show>

                <label class="dialog__label">
                    "Live URL"
                    <input
                        class="dialog__input"
                        type="url"
                        prop:value=move || live_url.get()
                        on:input=move |ev| live_url.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "GitHub URL"
                    <input
                        class="dialog__input"
                        type="url"
                        prop:value=move || github_url.get()
                        on:input=move |ev| github_url.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                    />
                    "Featured project"
                </label>

                <Show when=move || !submit_error.get().is_empty()>
                    <p class="dialog__error">{move || submit_error.get()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Saving..." } else if is_edit { "Update Project" } else { "Create Project" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
