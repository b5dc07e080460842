//! Admin panel layout: route guard, sidebar, routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::Sidebar;

/// Wrapper for all `/admin/*` pages. Everything inside is session-gated.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="admin-layout">
                <Sidebar/>
                <main class="admin-layout__content">
                    <Outlet/>
                </main>
            </div>
        </ProtectedRoute>
    }
}
