use leptos::either::EitherOf3;
use leptos::{ev::SubmitEvent, html, prelude::*};
use server_fn::codec::Json;

use crate::contact::{SubmitStatus, SEND_FAILED_MESSAGE};
use crate::content::{EMAIL, LINKEDIN_URL, LOCATION, PHONE, PHONE_HREF, RESUME_PATH};

use super::section::SectionContainer;

#[server(input = Json)]
pub async fn send_message(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{deliver, ContactSubmission, CONTACT_RELAY_URL};

    let submission = ContactSubmission::new(&name, &email, &message)
        .map_err(|err| ServerFnError::new(err.user_message()))?;
    tracing::info!(from = %submission.email, "forwarding contact message");
    deliver(CONTACT_RELAY_URL, &submission).await.map_err(|err| {
        tracing::error!("contact delivery failed: {err}");
        ServerFnError::new(err.user_message())
    })
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(SubmitStatus::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // a send is already in flight, ignore the repeat
        if status.get_untracked().is_loading() {
            return;
        }
        let fields = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        );
        let (name_el, email_el, message_el) = match fields {
            (Some(name_el), Some(email_el), Some(message_el)) => (name_el, email_el, message_el),
            _ => {
                set_status.set(SubmitStatus::Error(SEND_FAILED_MESSAGE.to_string()));
                return;
            }
        };
        set_status.set(SubmitStatus::Loading);
        let name = name_el.value();
        let email = email_el.value();
        let message = message_el.value();
        leptos::task::spawn_local(async move {
            let result = send_message(name, email, message).await;
            match &result {
                Ok(()) => {
                    // only a delivered message clears the fields, a failed
                    // one stays editable for another attempt
                    name_el.set_value("");
                    email_el.set_value("");
                    message_el.set_value("");
                }
                Err(err) => log::error!("contact submission failed: {err}"),
            }
            set_status.set(SubmitStatus::settled(result));
        });
    };

    let button_label = move || match status.get() {
        SubmitStatus::Loading => "Sending...",
        SubmitStatus::Sent => "Message sent ✔",
        SubmitStatus::Idle | SubmitStatus::Error(_) => "Send message",
    };

    view! {
        <SectionContainer title="Contact & Resume" eyebrow="Let's talk">
            <div class="grid gap-7 md:grid-cols-[1.4fr,1fr]">
                <form
                    class="space-y-4 rounded-2xl border border-neutral-800 bg-neutral-900/70 p-5"
                    on:submit=submit
                >
                    <div>
                        <label
                            for="contact_name"
                            class="mb-1 block text-xs font-medium text-neutral-100"
                        >
                            "Name"
                        </label>
                        <input
                            id="contact_name"
                            node_ref=name_ref
                            required=true
                            type="text"
                            placeholder="Your name"
                            class="w-full rounded-md border border-neutral-700 bg-neutral-950 px-3 py-2 text-xs text-neutral-100 placeholder:text-neutral-500 focus:border-emerald-400 focus:outline-none focus:ring-1 focus:ring-emerald-400"
                        />
                    </div>
                    <div>
                        <label
                            for="contact_email"
                            class="mb-1 block text-xs font-medium text-neutral-100"
                        >
                            "Email"
                        </label>
                        <input
                            id="contact_email"
                            node_ref=email_ref
                            required=true
                            type="email"
                            placeholder="you@example.com"
                            class="w-full rounded-md border border-neutral-700 bg-neutral-950 px-3 py-2 text-xs text-neutral-100 placeholder:text-neutral-500 focus:border-emerald-400 focus:outline-none focus:ring-1 focus:ring-emerald-400"
                        />
                    </div>
                    <div>
                        <label
                            for="contact_message"
                            class="mb-1 block text-xs font-medium text-neutral-100"
                        >
                            "Message"
                        </label>
                        <textarea
                            id="contact_message"
                            node_ref=message_ref
                            required=true
                            rows=4
                            placeholder="Tell me about the role, project or idea..."
                            class="w-full rounded-md border border-neutral-700 bg-neutral-950 px-3 py-2 text-xs text-neutral-100 placeholder:text-neutral-500 focus:border-emerald-400 focus:outline-none focus:ring-1 focus:ring-emerald-400"
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        disabled=move || status.get().is_loading()
                        class="inline-flex items-center rounded-full bg-emerald-500/90 px-5 py-2 text-xs font-semibold text-neutral-950 transition hover:bg-emerald-400 disabled:cursor-wait disabled:opacity-70"
                    >
                        {button_label}
                    </button>
                    {move || match status.get() {
                        SubmitStatus::Sent => {
                            EitherOf3::A(
                                view! {
                                    <p class="mt-1 text-[11px] text-emerald-300">
                                        "Thanks for reaching out! I'll get back to you soon."
                                    </p>
                                },
                            )
                        }
                        SubmitStatus::Error(message) => {
                            EitherOf3::B(
                                view! { <p class="mt-1 text-[11px] text-red-400">{message}</p> },
                            )
                        }
                        SubmitStatus::Idle | SubmitStatus::Loading => EitherOf3::C(()),
                    }}
                </form>

                <div class="space-y-4 rounded-2xl border border-neutral-800 bg-neutral-900/70 p-5 text-xs text-neutral-300">
                    <div>
                        <h3 class="mb-2 text-sm font-semibold text-neutral-50">"Direct contact"</h3>
                        <p>
                            "Email: "
                            <a
                                href=format!("mailto:{EMAIL}")
                                class="text-emerald-300/90 hover:text-emerald-200"
                            >
                                {EMAIL}
                            </a>
                        </p>
                        <p>
                            "Phone: "
                            <a href=PHONE_HREF class="text-emerald-300/90 hover:text-emerald-200">
                                {PHONE}
                            </a>
                        </p>
                        <p>{LOCATION}</p>
                    </div>

                    <div>
                        <h3 class="mb-2 text-sm font-semibold text-neutral-50">"Resume"</h3>
                        <p class="mb-2">"Prefer a PDF? Download my latest resume here:"</p>
                        <a
                            href=RESUME_PATH
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center rounded-full border border-emerald-500/40 bg-neutral-950 px-4 py-1.5 text-[11px] font-medium text-emerald-100 transition hover:bg-emerald-500/10"
                        >
                            "Download Resume"
                        </a>
                    </div>

                    <div>
                        <h3 class="mb-2 text-sm font-semibold text-neutral-50">"Socials"</h3>
                        <div class="flex flex-wrap gap-3">
                            <a
                                href=format!("https://github.com/{}", crate::content::GITHUB_USERNAME)
                                target="_blank"
                                rel="noreferrer"
                                class="text-emerald-300/90 hover:text-emerald-200"
                            >
                                "GitHub"
                            </a>
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noreferrer"
                                class="text-emerald-300/90 hover:text-emerald-200"
                            >
                                "LinkedIn"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </SectionContainer>
    }
}
