//! Admin dashboard: collection counts and quick actions.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::net::types::ContactMessage;
use crate::state::fetch::use_fetch;

/// Counts shown on the dashboard stat cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub projects: usize,
    pub blog_posts: usize,
    pub unread_messages: usize,
    pub gallery_posts: usize,
}

pub(crate) fn unread_count(messages: &[ContactMessage]) -> usize {
    messages.iter().filter(|m| !m.read).count()
}

async fn fetch_stats() -> Result<DashboardStats, String> {
    let projects = crate::net::services::fetch_projects().await?;
    let blog = crate::net::services::fetch_blog_page(1, 1).await?;
    let messages = crate::net::services::fetch_messages().await?;
    let gallery = crate::net::services::fetch_gallery().await?;
    Ok(DashboardStats {
        projects: projects.len(),
        blog_posts: blog.total_posts.max(blog.posts.len()),
        unread_messages: unread_count(&messages),
        gallery_posts: gallery.len(),
    })
}

/// Dashboard page with one stat card per collection.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let stats = use_fetch(fetch_stats);

    view! {
        <div class="admin-dashboard-page">
            <header class="admin-page__header">
                <h1>"Dashboard"</h1>
                <p class="admin-page__subtitle">"Welcome back! Here's your portfolio overview."</p>
            </header>

            {move || {
                let state = stats.state.get();
                if let Some(s) = state.data {
                    let cards = [
                        ("Projects", s.projects, "/admin/projects"),
                        ("Blog Posts", s.blog_posts, "/admin/blog"),
                        ("Unread Messages", s.unread_messages, "/admin/messages"),
                        ("Gallery Posts", s.gallery_posts, "/admin/gallery"),
                    ];
                    view! {
                        <div class="admin-dashboard__stats">
                            {cards
                                .into_iter()
                                .map(|(label, count, href)| {
                                    view! {
                                        <A href=href attr:class="stat-card">
                                            <p class="stat-card__label">{label}</p>
                                            <p class="stat-card__count">{count}</p>
                                        </A>
                                    }
                                })
                                .collect::<Vec<_>>()}
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
                            on_retry=Callback::new(move |()| stats.refetch())
                        />
                    }
                        .into_any()
                }
            }}

            <section class="admin-dashboard__actions">
                <h2>"Quick Actions"</h2>
                <div class="admin-dashboard__actions-grid">
                    <A href="/admin/projects" attr:class="action-card">"Manage Projects"</A>
                    <A href="/admin/blog" attr:class="action-card">"Manage Blog"</A>
                    <A href="/admin/gallery" attr:class="action-card">"Manage Gallery"</A>
                    <A href="/" attr:class="action-card">"View Live Site"</A>
                </div>
            </section>
        </div>
    }
}
