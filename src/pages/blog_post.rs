//! Single blog post page, addressed by slug.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::state::fetch::use_fetch_with_deps;
use crate::util::format::format_date;
use crate::util::markdown;

/// Full blog post with markdown body. Re-fetches when the slug changes.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let post = use_fetch_with_deps(
        move || {
            let slug = params.read_untracked().get("slug").unwrap_or_default();
            async move { crate::net::services::fetch_blog_post(&slug).await }
        },
        slug,
    );

    view! {
        <div class="blog-post-page">
            <A href="/blog" attr:class="blog-post-page__back">
                "← All posts"
            </A>
            {move || {
                let state = post.state.get();
                if let Some(p) = state.data {
                    view! {
                        <article class="blog-post">
                            {p.cover_image.map(|url| view! { <img class="blog-post__cover" src=url alt=""/> })}
                            <h1>{p.title}</h1>
                            <p class="blog-post__date">{format_date(&p.created_at)}</p>
                            <div class="blog-post__tags">
                                {p
                                    .tags
                                    .into_iter()
                                    .map(|t| view! { <span class="tech-badge">{t}</span> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <div class="blog-post__body" inner_html=markdown::render(&p.content)></div>
                        </article>
                    }
                        .into_any()
                } else if state.loading {
                    view! { <Loader full_screen=true/> }.into_any()
                } else {
                    let message = state.error.unwrap_or_else(|| "Post not found.".to_owned());
                    view! {
                        <ErrorMessage
                            message=message
                            on_retry=Callback::new(move |()| post.refetch())
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
