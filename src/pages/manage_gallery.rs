//! Admin page for managing multi-image gallery posts.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::components::gallery_form::GalleryFormModal;
use crate::components::loader::Loader;
use crate::net::types::GalleryPost;
use crate::state::fetch::use_fetch;
use crate::util::browser;

/// Gallery management grid with a create/edit modal.
#[component]
pub fn ManageGalleryPage() -> impl IntoView {
    let posts = use_fetch(crate::net::services::fetch_gallery);

    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<GalleryPost>);
    let action_error = RwSignal::new(String::new());

    let on_create = move |_| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_edit = Callback::new(move |post: GalleryPost| {
        editing.set(Some(post));
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !browser::confirm("Are you sure you want to delete this gallery post?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::services::delete_gallery_post(&id).await {
                Ok(()) => posts.refetch(),
                Err(e) => action_error.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let on_modal_close = Callback::new(move |()| {
        show_modal.set(false);
        editing.set(None);
        posts.refetch();
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Manage Gallery"</h1>
                    <p class="admin-page__subtitle">
                        "Upload and manage gallery posts with multiple images"
                    </p>
                </div>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Post"
                </button>
            </header>

            <Show when=move || !action_error.get().is_empty()>
                <p class="admin-page__error">{move || action_error.get()}</p>
            </Show>

            {move || {
                let state = posts.state.get();
                if let Some(list) = state.data {
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"No gallery posts yet. Create your first post!"</p>
                                <button class="btn btn--primary" on:click=on_create>
                                    "Create Post"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="gallery-grid">
                                {list
                                    .into_iter()
                                    .map(|post| {
                                        let id = post.id.clone();
                                        let edit_target = post.clone();
                                        let thumb = post.image_urls.first().cloned().unwrap_or_default();
                                        view! {
                                            <div class="gallery-card">
                                                <div class="gallery-card__thumb">
                                                    <img src=thumb alt=post.title.clone()/>
                                                    <span class="gallery-card__count">
                                                        {post.image_urls.len()}
                                                        " images"
                                                    </span>
                                                </div>
                                                <div class="gallery-card__info">
                                                    <h3>{post.title.clone()}</h3>
                                                    <p>{post.category.clone()}</p>
                                                    <Show when={
                                                        let featured = post.featured;
                                                        move || featured
                                                    }>
                                                        <span class="featured-badge">"Featured"</span>
                                                    </Show>
                                                </div>
                                                <div class="gallery-card__actions">
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| on_edit.run(edit_target.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| on_delete.run(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                } else if state.loading {
                    view! { <Loader full_screen=true/> }.into_any()
                } else {
                    let message = state.error.unwrap_or_else(|| "Something went wrong.".to_owned());
                    view! {
                        <ErrorMessage
                            message=message
                            on_retry=Callback::new(move |()| posts.refetch())
                        />
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_modal.get()>
                <GalleryFormModal post=editing.get() on_close=on_modal_close/>
            </Show>
        </div>
    }
}
