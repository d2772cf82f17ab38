use leptos::{html, prelude::*};

use crate::contact::{ContactMessage, ContactStatus};

#[component]
pub fn ContactForm(recipient: &'static str) -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(ContactStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let msg = match ContactMessage::new(&name.value(), &email.value(), &message.value()) {
            Ok(msg) => msg,
            Err(err) => {
                set_status.set(ContactStatus::Invalid(err));
                return;
            }
        };
        let href = msg.mailto_href(recipient);
        match window().location().set_href(&href) {
            Ok(()) => set_status.set(ContactStatus::Opened),
            Err(err) => {
                log::warn!("Couldn't open mail client: {err:?}");
                set_status.set(ContactStatus::Idle);
            }
        }
    };

    view! {
        <form on:submit=on_submit class="grid gap-3 max-w-lg" aria-label="Contact form">
            <label class="sr-only" for="name">
                "Name"
            </label>
            <input
                node_ref=name_ref
                id="name"
                name="name"
                placeholder="Your name"
                class="rounded-md border border-black/10 bg-transparent px-3 py-2"
                required
            />
            <label class="sr-only" for="email">
                "Email"
            </label>
            <input
                node_ref=email_ref
                id="email"
                name="email"
                type="email"
                placeholder="Your email"
                class="rounded-md border border-black/10 bg-transparent px-3 py-2"
                required
            />
            <label class="sr-only" for="message">
                "Message"
            </label>
            <textarea
                node_ref=message_ref
                id="message"
                name="message"
                placeholder="Your message"
                rows=5
                class="rounded-md border border-black/10 bg-transparent px-3 py-2"
                required
            ></textarea>
            <div class="flex items-center gap-3">
                <button class="rounded-md bg-brand px-4 py-2 text-white text-sm font-semibold hover:bg-brand-dark">
                    "Send"
                </button>
                {move || match status.get() {
                    ContactStatus::Idle => None,
                    ContactStatus::Invalid(err) => {
                        Some(
                            view! {
                                <span class="text-xs text-red-600" role="alert">
                                    {err.to_string()}
                                </span>
                            }
                                .into_any(),
                        )
                    }
                    ContactStatus::Opened => {
                        Some(
                            view! {
                                <span class="text-xs text-green-600" role="status">
                                    "Opening your mail app…"
                                </span>
                            }
                                .into_any(),
                        )
                    }
                }}
            </div>
        </form>
        <p class="mt-3 text-xs text-gray-600">
            "Or write directly to " <a href=format!("mailto:{recipient}") class="underline">{recipient}</a>
        </p>
    }
}
