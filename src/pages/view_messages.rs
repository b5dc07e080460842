//! Admin page for reading and deleting contact messages.
//!
//! Two-pane layout: message list on the left, selected message detail on the
//! right. Opening an unread message marks it read on the server and
//! refreshes the list.

#[cfg(test)]
#[path = "view_messages_test.rs"]
mod view_messages_test;

use leptos::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::components::loader::Loader;
use crate::net::types::ContactMessage;
use crate::state::fetch::use_fetch;
use crate::util::browser;
use crate::util::format::format_date;

/// Whether the list row with `id` is the currently opened message.
pub(crate) fn is_selected(selected: Option<&ContactMessage>, id: &str) -> bool {
    selected.map(|m| m.id.as_str()) == Some(id)
}

/// Contact message inbox.
#[component]
pub fn ViewMessagesPage() -> impl IntoView {
    let messages = use_fetch(crate::net::services::fetch_messages);

    let selected = RwSignal::new(None::<ContactMessage>);
    let action_error = RwSignal::new(String::new());

    let on_select = Callback::new(move |message: ContactMessage| {
        let needs_read = !message.read;
        let id = message.id.clone();
        selected.set(Some(message));
        if needs_read {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::services::mark_message_read(&id).await {
                    Ok(_) => messages.refetch(),
                    Err(e) => action_error.set(e),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = id;
            }
        }
    });

    let on_delete = Callback::new(move |id: String| {
        if !browser::confirm("Are you sure you want to delete this message?") {
            return;
        }
        if selected.get_untracked().as_ref().map(|m| m.id.as_str()) == Some(id.as_str()) {
            selected.set(None);
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::services::delete_message(&id).await {
                Ok(()) => messages.refetch(),
                Err(e) => action_error.set(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let unread_label = move || {
        let count = messages
            .state
            .get()
            .data
            .map_or(0, |list| list.iter().filter(|m| !m.read).count());
        format!("{count} unread messages")
    };

    view! {
        <div class="admin-page messages-page">
            <header class="admin-page__header">
                <div>
                    <h1>"Contact Messages"</h1>
                    <p class="admin-page__subtitle">{unread_label}</p>
                </div>
            </header>

            <Show when=move || !action_error.get().is_empty()>
                <p class="admin-page__error">{move || action_error.get()}</p>
            </Show>

            {move || {
                let state = messages.state.get();
                if let Some(list) = state.data {
                    view! {
                        <div class="messages-layout">
                            <div class="messages-list">
                                {if list.is_empty() {
                                    view! { <p class="empty-state">"No messages yet"</p> }.into_any()
                                } else {
                                    list.into_iter()
                                        .map(|message| {
                                            let target = message.clone();
                                            let active = {
                                                let id = message.id.clone();
                                                move || {
                                                    selected.with(|s| is_selected(s.as_ref(), &id))
                                                }
                                            };
                                            view! {
                                                <button
                                                    class="message-item"
                                                    class=("message-item--unread", !message.read)
                                                    class=("message-item--active", active)
                                                    on:click=move |_| on_select.run(target.clone())
                                                >
                                                    <strong>{message.name.clone()}</strong>
                                                    <span class="message-item__subject">
                                                        {message
                                                            .subject
                                                            .clone()
                                                            .unwrap_or_else(|| "No subject".to_owned())}
                                                    </span>
                                                    <span class="message-item__date">
                                                        {format_date(&message.created_at)}
                                                    </span>
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }}
                            </div>

                            <div class="message-detail">
                                {move || {
                                    selected
                                        .get()
                                        .map_or_else(
                                            || {
                                                view! {
                                                    <p class="empty-state">"Select a message to view"</p>
                                                }
                                                    .into_any()
                                            },
                                            |message| {
                                                let mailto = format!(
                                                    "mailto:{}?subject=Re: {}",
                                                    message.email,
                                                    message.subject.clone().unwrap_or_else(|| "Your message".to_owned()),
                                                );
                                                let id = message.id.clone();
                                                view! {
                                                    <div class="message-detail__content">
                                                        <div class="message-detail__header">
                                                            <div>
                                                                <h2>{message.name.clone()}</h2>
                                                                <p class="message-detail__email">{message.email.clone()}</p>
                                                                <p class="message-detail__date">
                                                                    {format_date(&message.created_at)}
                                                                </p>
                                                            </div>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_delete.run(id.clone())
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                        {message
                                                            .subject
                                                            .clone()
                                                            .map(|s| {
                                                                view! {
                                                                    <p class="message-detail__subject">
                                                                        <strong>"Subject: "</strong>
                                                                        {s}
                                                                    </p>
                                                                }
                                                            })}
                                                        <p class="message-detail__body">{message.message.clone()}</p>
                                                        <a class="btn" href=mailto>
                                                            "Reply via Email"
                                                        </a>
                                                    </div>
                                                }
                                                    .into_any()
                                            },
                                        )
                                }}
                            </div>
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
                            on_retry=Callback::new(move |()| messages.refetch())
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
