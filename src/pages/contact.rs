//! Public contact page with a message form.

use leptos::prelude::*;

use crate::net::types::NewMessage;

/// Contact form; successful submission clears the form and shows a note.
#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = NewMessage {
            name: name.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            subject: subject.get().trim().to_owned(),
            message: message.get().trim().to_owned(),
        };
        if input.name.is_empty() || input.email.is_empty() || input.message.is_empty() {
            sent.set(false);
            info.set("Name, email, and message are required.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::services::send_message(&input).await {
                Ok(_) => {
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                    sent.set(true);
                    info.set("Thanks! I'll get back to you soon.".to_owned());
                }
                Err(e) => {
                    sent.set(false);
                    info.set(e);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    };

    view! {
        <div class="contact-page">
            <h1>"Get In Touch"</h1>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-form__input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="contact-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="contact-form__input"
                    type="text"
                    placeholder="Subject (optional)"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <textarea
                    class="contact-form__input"
                    rows="6"
                    placeholder="Your message"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>

                <Show when=move || !info.get().is_empty()>
                    <p class=move || {
                        if sent.get() { "contact-form__note" } else { "contact-form__error" }
                    }>{move || info.get()}</p>
                </Show>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
