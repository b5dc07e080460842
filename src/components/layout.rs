//! Public site layout: top navigation, routed content, footer.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

const NAV: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/blog", "Blog"),
    ("/contact", "Contact"),
];

/// Wrapper for the public marketing pages.
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="site-layout">
            <header class="site-header">
                <A href="/" attr:class="site-header__brand">
                    "Portfolio"
                </A>
                <nav class="site-header__nav">
                    {NAV
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <A href=path attr:class="site-header__link">
                                    {label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </header>

            <main class="site-main">
                <Outlet/>
            </main>

            <footer class="site-footer">
                <p>"© 2026. Built with Leptos."</p>
            </footer>
        </div>
    }
}
