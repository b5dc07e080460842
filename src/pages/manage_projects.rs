//! Admin page for creating, editing, and deleting projects.

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::components::project_form::ProjectFormModal;
use crate::net::types::Project;
use crate::state::fetch::use_fetch;
use crate::util::browser;
use crate::util::format::format_date;

/// Project management table with a create/edit modal.
#[component]
pub fn ManageProjectsPage() -> impl IntoView {
    let projects = use_fetch(crate::net::services::fetch_projects);

    let show_modal = RwSignal::new(false);
    let editing = RwSignal::new(None::<Project>);
    let action_error = RwSignal::new(String::new());

    let on_create = move |_| {
        editing.set(None);
        show_modal.set(true);
    };

    let on_edit = Callback::new(move |project: Project| {
        editing.set(Some(project));
        show_modal.set(true);
    });

    let on_delete = Callback::new(move |id: String| {
        if !browser::confirm("Are you sure you want to delete this project?") {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::services::delete_project(&id).await {
                Ok(()) => projects.refetch(),
                Err(e) => action_error.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    // Close after save or cancel; refetch so the table reflects mutations.
    let on_modal_close = Callback::new(move |()| {
        show_modal.set(false);
        editing.set(None);
        projects.refetch();
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Manage Projects"</h1>
                    <p class="admin-page__subtitle">
                        "Create, edit, and delete your portfolio projects"
                    </p>
                </div>
                <button class="btn btn--primary" on:click=on_create>
                    "+ New Project"
                </button>
            </header>

            <Show when=move || !action_error.get().is_empty()>
                <p class="admin-page__error">{move || action_error.get()}</p>
            </Show>

            {move || {
                let state = projects.state.get();
                if let Some(list) = state.data {
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"No projects yet. Create your first project!"</p>
                                <button class="btn btn--primary" on:click=on_create>
                                    "Create Project"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Thumbnail"</th>
                                        <th>"Title"</th>
                                        <th>"Category"</th>
                                        <th>"Featured"</th>
                                        <th>"Created"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|project| {
                                            let id = project.id.clone();
                                            let edit_target = project.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <img
                                                            class="admin-table__thumb"
                                                            src=project.thumbnail.clone()
                                                            alt=project.title.clone()
                                                        />
                                                    </td>
                                                    <td>{project.title.clone()}</td>
                                                    <td>{project.category.clone()}</td>
                                                    <td>{if project.featured { "Yes" } else { "No" }}</td>
                                                    <td>{format_date(&project.created_at)}</td>
                                                    <td class="admin-table__actions">
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| browser::open_in_new_tab("/projects")
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
                            on_retry=Callback::new(move |()| projects.refetch())
                        />
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_modal.get()>
                <ProjectFormModal project=editing.get() on_close=on_modal_close/>
            </Show>
        </div>
    }
}
