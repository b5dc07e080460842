//! Admin panel navigation sidebar with logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{logout, use_auth};

const MENU: [(&str, &str); 5] = [
    ("/admin/dashboard", "Dashboard"),
    ("/admin/projects", "Projects"),
    ("/admin/blog", "Blog Posts"),
    ("/admin/gallery", "Gallery"),
    ("/admin/messages", "Messages"),
];

/// Sidebar with admin navigation links and a logout button.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(auth);
        navigate("/admin/login", NavigateOptions::default());
    };

    view! {
        <aside class="admin-sidebar">
            <div class="admin-sidebar__header">
                <h2 class="admin-sidebar__logo">"Admin Panel"</h2>
            </div>

            <nav class="admin-sidebar__nav">
                {MENU
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <A href=path attr:class="admin-sidebar__link">
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="admin-sidebar__footer">
                <button class="admin-sidebar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
