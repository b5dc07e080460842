//! Create/edit modal for multi-image gallery posts.

#[cfg(test)]
#[path = "gallery_form_test.rs"]
mod gallery_form_test;

use leptos::prelude::*;

use crate::net::types::{GalleryPost, GalleryPostInput};
use crate::util::scroll_lock::ScrollLock;

/// Submission is allowed only once no save and no upload is in flight.
///
/// `uploads_in_flight` counts individually spawned upload tasks, so one
/// finished file out of a multi-file selection does not unblock submit.
pub(crate) fn can_submit(busy: bool, uploads_in_flight: usize) -> bool {
    !busy && uploads_in_flight == 0
}

/// Drop the image URL at `index`, ignoring out-of-range indices.
pub(crate) fn remove_url_at(urls: &mut Vec<String>, index: usize) {
    if index < urls.len() {
        urls.remove(index);
    }
}

/// Modal form for creating or editing a gallery post.
///
/// New posts collect uploaded image URLs locally until submit; for an
/// existing post, removing an image also deletes it server-side.
#[component]
pub fn GalleryFormModal(post: Option<GalleryPost>, on_close: Callback<()>) -> impl IntoView {
    let editing_id = post.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();
    let removal_id = StoredValue::new(editing_id.clone());

    let title = RwSignal::new(post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        post.as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        post.as_ref()
            .map_or_else(|| "Other".to_owned(), |p| p.category.clone()),
    );
    let order = RwSignal::new(post.as_ref().map(|p| p.order.to_string()).unwrap_or_default());
    let featured = RwSignal::new(post.as_ref().is_some_and(|p| p.featured));
    let image_urls = RwSignal::new(post.as_ref().map(|p| p.image_urls.clone()).unwrap_or_default());

    let busy = RwSignal::new(false);
    let uploads_in_flight = RwSignal::new(0usize);
    let submit_error = RwSignal::new(String::new());

    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(files) = input.files() else {
                return;
            };
            for i in 0..files.length() {
                let Some(file) = files.get(i) else { continue };
                uploads_in_flight.update(|n| *n += 1);
                // Completions write through try_* so a result that lands
                // after the modal closed is a no-op.
                leptos::task::spawn_local(async move {
                    match crate::net::services::upload_image(&file).await {
                        Ok(res) => {
                            let _ = image_urls.try_update(|urls| urls.push(res.url));
                        }
                        Err(e) => {
                            let _ = submit_error.try_set(e);
                        }
                    }
                    let _ = uploads_in_flight.try_update(|n| *n = n.saturating_sub(1));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let remove_image = Callback::new(move |index: usize| {
        match removal_id.with_value(Clone::clone) {
            Some(id) => {
                if !crate::util::browser::confirm("Remove this image?") {
                    return;
                }
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match crate::net::services::remove_gallery_image(&id, index).await {
                        Ok(()) => {
                            let _ = image_urls.try_update(|urls| remove_url_at(urls, index));
                        }
                        Err(e) => {
                            let _ = submit_error.try_set(e);
                        }
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = id;
                }
            }
            None => {
                // Not saved yet; only local state to adjust.
                image_urls.update(|urls| remove_url_at(urls, index));
            }
        }
    });

    let submit = Callback::new(move |_| {
        if !can_submit(busy.get(), uploads_in_flight.get()) {
            return;
        }
        let urls = image_urls.get();
        if urls.is_empty() {
            submit_error.set("Please upload at least one image.".to_owned());
            return;
        }
        let input = GalleryPostInput {
            title: title.get().trim().to_owned(),
            description: Some(description.get().trim().to_owned()).filter(|s| !s.is_empty()),
            category: category.get(),
            image_urls: urls,
            order: order.get().trim().parse().unwrap_or(0),
            featured: featured.get(),
        };
        if input.title.is_empty() {
            submit_error.set("Title is required.".to_owned());
            return;
        }
        busy.set(true);
        submit_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let editing_id = editing_id.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => crate::net::services::update_gallery_post(id, &input)
                        .await
                        .map(|_| ()),
                    None => crate::net::services::create_gallery_post(&input)
                        .await
                        .map(|_| ()),
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
                    <h2>{if is_edit { "Edit Gallery Post" } else { "New Gallery Post" }}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Working on Project"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Description (optional)"
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Tell the story behind these images..."
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
                        <option value="Work">"Work"</option>
                        <option value="Personal">"Personal"</option>
                        <option value="Events">"Events"</option>
                        <option value="Travel">"Travel"</option>
                        <option value="Other">"Other"</option>
                    </select>
                </label>

                <label class="dialog__label">
                    "Order"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0"
                        prop:value=move || order.get()
                        on:input=move |ev| order.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                    />
                    "Featured post"
                </label>

                <div class="dialog__label">
                    {move || format!("Gallery Images ({})", image_urls.get().len())}
                    <input type="file" multiple accept="image/*" on:change=on_files/>
                </div>
                <Show when=move || { uploads_in_flight.get() > 0 }>
                    <p class="dialog__hint">
                        {move || format!("Uploading {} image(s)...", uploads_in_flight.get())}
                    </p>
                </Show>

                <Show when=move || !image_urls.get().is_empty()>
                    <div class="dialog__image-grid">
                        {move || {
                            image_urls
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, url)| {
                                    view! {
                                        <div class="dialog__image-item">
                                            <img src=url alt=format!("Image {}", index + 1)/>
                                            <button
                                                class="dialog__image-remove"
                                                on:click=move |_| remove_image.run(index)
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || !submit_error.get().is_empty()>
                    <p class="dialog__error">{move || submit_error.get()}</p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_submit(busy.get(), uploads_in_flight.get())
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Saving..." } else if is_edit { "Update Post" } else { "Create Post" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
