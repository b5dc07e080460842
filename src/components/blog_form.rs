//! Create/edit modal for blog posts.

#[cfg(test)]
#[path = "blog_form_test.rs"]
mod blog_form_test;

use leptos::prelude::*;

use crate::net::types::{BlogPost, BlogPostInput};
use crate::util::scroll_lock::ScrollLock;

/// Derive a URL slug from a post title: lowercase, alphanumerics kept,
/// runs of anything else collapsed to single hyphens.
pub(crate) fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Modal form for creating or editing a blog post.
#[component]
pub fn BlogFormModal(post: Option<BlogPost>, on_close: Callback<()>) -> impl IntoView {
    let editing_id = post.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();

    let title = RwSignal::new(post.as_ref().map(|p| p.title.clone()).unwrap_or_default());
    let slug = RwSignal::new(post.as_ref().map(|p| p.slug.clone()).unwrap_or_default());
    let excerpt = RwSignal::new(post.as_ref().map(|p| p.excerpt.clone()).unwrap_or_default());
    let content = RwSignal::new(post.as_ref().map(|p| p.content.clone()).unwrap_or_default());
    let cover_image = RwSignal::new(
        post.as_ref()
            .and_then(|p| p.cover_image.clone())
            .unwrap_or_default(),
    );
    let tags = RwSignal::new(post.as_ref().map(|p| p.tags.join(", ")).unwrap_or_default());
    let published = RwSignal::new(post.as_ref().is_some_and(|p| p.published));

    let busy = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let submit_error = RwSignal::new(String::new());

    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    let on_cover_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
                return;
            };
            uploading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::services::upload_image(&file).await {
                    Ok(res) => cover_image.set(res.url),
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
        let title_value = title.get().trim().to_owned();
        let slug_value = {
            let raw = slug.get().trim().to_owned();
            if raw.is_empty() { slugify(&title_value) } else { raw }
        };
        let input = BlogPostInput {
            title: title_value,
            slug: slug_value,
            excerpt: excerpt.get().trim().to_owned(),
            content: content.get(),
            cover_image: Some(cover_image.get()).filter(|s| !s.is_empty()),
            tags: crate::components::project_form::split_csv(&tags.get()),
            published: published.get(),
        };
        if input.title.is_empty() || input.content.trim().is_empty() {
            submit_error.set("Title and content are required.".to_owned());
            return;
        }
        busy.set(true);
        submit_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let editing_id = editing_id.clone();
            leptos::task::spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => crate::net::services::update_blog_post(id, &input)
                        .await
                        .map(|_| ()),
                    None => crate::net::services::create_blog_post(&input)
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
                    <h2>{if is_edit { "Edit Post" } else { "New Post" }}</h2>
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
                    "Slug (leave empty to derive from title)"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=move || slugify(&title.get())
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Excerpt"
                    <textarea
                        class="dialog__input"
                        rows="2"
                        prop:value=move || excerpt.get()
                        on:input=move |ev| excerpt.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Content (markdown)"
                    <textarea
                        class="dialog__input dialog__input--content"
                        rows="10"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="dialog__label">
                    "Cover Image"
                    <input type="file" accept="image/*" on:change=on_cover_file/>
                </label>
                <Show when=move || uploading.get()>
                    <p class="dialog__hint">"Uploading..."</p>
                </Show>

                <label class="dialog__label">
                    "Tags (comma separated)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || tags.get()
                        on:input=move |ev| tags.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || published.get()
                        on:change=move |ev| published.set(event_target_checked(&ev))
                    />
                    "Published"
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
                        {move || if busy.get() { "Saving..." } else if is_edit { "Update Post" } else { "Create Post" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
