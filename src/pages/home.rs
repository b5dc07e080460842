//! Landing page: hero, featured projects, CV preview, and recent articles.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::net::types::Project;
use crate::state::fetch::use_fetch;
use crate::util::format::format_date;
use crate::util::scroll_lock::ScrollLock;

/// How many posts the recent-articles strip shows.
const RECENT_POSTS: usize = 3;

/// Hosted resume document, served as a static asset.
const RESUME_PATH: &str = "/resume.pdf";

/// Pick the projects the landing page highlights: featured only, capped at
/// three so the strip stays one row.
pub(crate) fn pick_featured(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(|p| p.featured).take(3).collect()
}

/// Home page with hero copy, featured work, CV section, and recent posts.
#[component]
pub fn HomePage() -> impl IntoView {
    let projects = use_fetch(crate::net::services::fetch_projects);

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Hi, I build things for the web."</h1>
                <p class="hero__subtitle">
                    "Full-stack developer. Have a look at my work, read the blog, or get in touch."
                </p>
                <div class="hero__actions">
                    <A href="/projects" attr:class="btn btn--primary">
                        "View Projects"
                    </A>
                    <A href="/contact" attr:class="btn">
                        "Contact Me"
                    </A>
                </div>
            </section>

            <section class="home-featured">
                <h2>"Featured Projects"</h2>
                {move || {
                    let state = projects.state.get();
                    if let Some(list) = state.data {
                        view! {
                            <div class="home-featured__grid">
                                {pick_featured(list)
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <div class="project-card">
                                                <img src=p.thumbnail alt=p.title.clone()/>
                                                <h3>{p.title}</h3>
                                                <p>{p.description}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    } else if state.loading {
                        view! { <Loader/> }.into_any()
                    } else {
                        // A fetch fault here is cosmetic; the hero stands alone.
                        ().into_any()
                    }
                }}
            </section>

            <CvSection/>
            <RecentArticles/>

            <section class="home-cta">
                <h2>"Have a project in mind?"</h2>
                <A href="/contact" attr:class="btn btn--primary">
                    "Let's Talk"
                </A>
            </section>
        </div>
    }
}

/// CV blurb with a preview modal and a direct download link.
#[component]
fn CvSection() -> impl IntoView {
    let preview_open = RwSignal::new(false);

    view! {
        <section class="home-cv">
            <h2>"My CV"</h2>
            <p>"A quick overview of where I've worked and what I've shipped."</p>
            <div class="home-cv__actions">
                <button class="btn btn--primary" on:click=move |_| preview_open.set(true)>
                    "Preview CV"
                </button>
                <a class="btn" href=RESUME_PATH download="resume.pdf">
                    "Download CV"
                </a>
            </div>

            <Show when=move || preview_open.get()>
                <ResumePreviewModal on_close=Callback::new(move |()| preview_open.set(false))/>
            </Show>
        </section>
    }
}

/// Fullscreen CV preview. Background scrolling is suppressed while open.
#[component]
fn ResumePreviewModal(on_close: Callback<()>) -> impl IntoView {
    let lock = ScrollLock::acquire();
    on_cleanup(move || drop(lock));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--resume" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"CV Preview"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <iframe class="dialog__frame" src=RESUME_PATH title="Resume Preview"></iframe>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <a class="btn btn--primary" href=RESUME_PATH download="resume.pdf">
                        "Download"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Strip of the newest blog posts; hidden entirely when there are none.
#[component]
fn RecentArticles() -> impl IntoView {
    let recent = use_fetch(move || crate::net::services::fetch_blog_page(1, RECENT_POSTS));

    view! {
        <section class="home-articles">
            {move || {
                let state = recent.state.get();
                if let Some(page) = state.data {
                    if page.posts.is_empty() {
                        return ().into_any();
                    }
                    view! {
                        <div class="home-articles__header">
                            <h2>"Recent Articles"</h2>
                            <A href="/blog" attr:class="btn">
                                "View All Articles"
                            </A>
                        </div>
                        <div class="home-articles__grid">
                            {page
                                .posts
                                .into_iter()
                                .map(|post| {
                                    let href = format!("/blog/{}", post.slug);
                                    view! {
                                        <article class="article-card">
                                            <A href=href>
                                                <h3>{post.title}</h3>
                                            </A>
                                            <p class="article-card__date">
                                                {format_date(&post.created_at)}
                                            </p>
                                            <p>{post.excerpt}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                } else if state.loading {
                    view! { <Loader/> }.into_any()
                } else {
                    let message = state.error.unwrap_or_else(|| "Something went wrong.".to_owned());
                    view! {
                        <ErrorMessage
                            message=message
                            on_retry=Callback::new(move |()| recent.refetch())
                        />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
