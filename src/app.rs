//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::admin_layout::AdminLayout;
use crate::components::layout::Layout;
use crate::pages::{
    about::AboutPage, admin_dashboard::AdminDashboardPage, blog::BlogIndexPage,
    blog_post::BlogPostPage, contact::ContactPage, home::HomePage, login::LoginPage,
    manage_blog::ManageBlogPage, manage_gallery::ManageGalleryPage,
    manage_projects::ManageProjectsPage, projects::ProjectsPage, view_messages::ViewMessagesPage,
};
use crate::state::auth::{AuthState, hydrate_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores the persisted session once on the
/// client, and sets up routing for the public site and the admin panel.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::hydrating());
    provide_context(auth);

    // One-shot client-side hydration; effects never run during SSR, so the
    // guard shows its loading state until this completes in the browser.
    Effect::new(move || {
        if auth.get_untracked().loading {
            hydrate_session(auth);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-client.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("blog") view=BlogIndexPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </ParentRoute>

                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("dashboard") view=AdminDashboardPage/>
                    <Route path=StaticSegment("projects") view=ManageProjectsPage/>
                    <Route path=StaticSegment("blog") view=ManageBlogPage/>
                    <Route path=StaticSegment("gallery") view=ManageGalleryPage/>
                    <Route path=StaticSegment("messages") view=ViewMessagesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
