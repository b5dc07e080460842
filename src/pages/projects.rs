//! Public projects page listing all portfolio projects.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::state::fetch::use_fetch;

/// Grid of all projects with tech badges and outbound links.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = use_fetch(crate::net::services::fetch_projects);

    view! {
        <div class="projects-page">
            <h1>"Projects"</h1>
            {move || {
                let state = projects.state.get();
                if let Some(list) = state.data {
                    if list.is_empty() {
                        view! { <p class="empty-state">"Nothing here yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="projects-page__grid">
                                {list
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <article class="project-card">
                                                <img src=p.thumbnail alt=p.title.clone()/>
                                                <h3>{p.title}</h3>
                                                <p class="project-card__category">{p.category}</p>
                                                <p>{p.description}</p>
                                                <div class="project-card__badges">
                                                    {p
                                                        .tech_stack
                                                        .into_iter()
                                                        .map(|t| view! { <span class="tech-badge">{t}</span> })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                                <div class="project-card__links">
                                                    {p
                                                        .live_url
                                                        .map(|url| {
                                                            view! {
                                                                <a href=url target="_blank" rel="noreferrer">"Live"</a>
                                                            }
                                                        })}
                                                    {p
                                                        .github_url
                                                        .map(|url| {
                                                            view! {
                                                                <a href=url target="_blank" rel="noreferrer">"Source"</a>
                                                            }
                                                        })}
                                                </div>
                                            </article>
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
                            on_retry=Callback::new(move |()| projects.refetch())
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
