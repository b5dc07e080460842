//! Admin page for creating, editing, and deleting blog posts.

use leptos::prelude::*;

use crate::components::blog_form::BlogFormModal;
use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::net::types::BlogPost;
use crate::state::fetch::use_fetch;
use crate::util::browser;
use crate::util::format::format_date;

/// Blog management table with a create/edit modal.
#[component]
pub fn ManageBlogPage() -> impl IntoView {
    // One big page; the admin table is not paginated.
    let posts = use_fetch(|| crate::net::services::fetch_blog_page(1, 1000));

    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<BlogPost>);
    let action_error = RwSignal::new(String::new());

    let on_create = move |_| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_edit = Callback::new(move |post: BlogPost| {
        editing.set(Some(post));
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !browser::confirm("Are you sure you want to delete this blog post?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::services::delete_blog_post(&id).await {
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
                    <h1>"Manage Blog"</h1>
                    <p class="admin-page__subtitle">"Write, edit, and publish blog posts"</p>
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
                if let Some(page) = state.data {
                    if page.posts.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"No posts yet. Write your first post!"</p>
                                <button class="btn btn--primary" on:click=on_create>
                                    "Create Post"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"Slug"</th>
                                        <th>"Published"</th>
                                        <th>"Created"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {page
                                        .posts
                                        .into_iter()
                                        .map(|post| {
                                            let id = post.id.clone();
                                            let slug = post.slug.clone();
                                            let edit_target = post.clone();
                                            view! {
                                                <tr>
                                                    <td>{post.title.clone()}</td>
                                                    <td class="admin-table__mono">{post.slug.clone()}</td>
                                                    <td>{if post.published { "Yes" } else { "Draft" }}</td>
                                                    <td>{format_date(&post.created_at)}</td>
                                                    <td class="admin-table__actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| {
                                                                browser::open_in_new_tab(&format!("/blog/{slug}"));
                                                            }
                                                        >
                                                            "View"
                                                        </button>
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
                <BlogFormModal post=editing.get() on_close=on_modal_close/>
            </Show>
        </div>
    }
}
