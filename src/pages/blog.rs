//! Public blog index with pagination.
//!
//! The page number is the fetch hook's dependency key: changing it re-runs
//! the producer automatically.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::state::fetch::use_fetch_with_deps;
use crate::util::format::format_date;

const PAGE_SIZE: usize = 6;

/// Paged list of published blog posts.
#[component]
pub fn BlogIndexPage() -> impl IntoView {
    let page = RwSignal::new(1usize);
    let posts = use_fetch_with_deps(
        move || crate::net::services::fetch_blog_page(page.get_untracked(), PAGE_SIZE),
        move || page.get(),
    );

    view! {
        <div class="blog-page">
            <h1>"Blog"</h1>
            {move || {
                let state = posts.state.get();
                if let Some(data) = state.data {
                    let total_pages = data.total_pages.max(1);
                    view! {
                        <div class="blog-page__list">
                            {data
                                .posts
                                .into_iter()
                                .map(|post| {
                                    let href = format!("/blog/{}", post.slug);
                                    view! {
                                        <article class="blog-card">
                                            <A href=href>
                                                <h3>{post.title}</h3>
                                            </A>
                                            <p class="blog-card__date">{format_date(&post.created_at)}</p>
                                            <p>{post.excerpt}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="blog-page__pagination">
                            <button
                                class="btn"
                                disabled=move || { page.get() <= 1 }
                                on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                            >
                                "Previous"
                            </button>
                            <span>{move || format!("Page {} of {total_pages}", page.get())}</span>
                            <button
                                class="btn"
                                disabled=move || { page.get() >= total_pages }
                                on:click=move |_| page.update(|p| *p += 1)
                            >
                                "Next"
                            </button>
                        </div>
                    }
                        .into_any()
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
        </div>
    }
}
