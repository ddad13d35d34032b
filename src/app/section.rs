use leptos::{html, prelude::*};
use leptos_use::use_intersection_observer;

/// Shared shell for every page section: eyebrow line, heading, and a
/// one-shot reveal once the section scrolls into view.
#[component]
pub fn SectionContainer(
    title: &'static str,
    #[prop(optional, into)] eyebrow: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);

    // reveal once; scrolling back out does not hide the section again
    use_intersection_observer(container_ref, move |entries, _| {
        if entries.iter().any(|entry| entry.is_intersecting()) {
            set_revealed.set(true);
        }
    });

    view! {
        <section class="py-14 md:py-20">
            <div
                node_ref=container_ref
                class=move || {
                    if revealed.get() {
                        "mx-auto max-w-4xl px-4 reveal reveal-visible"
                    } else {
                        "mx-auto max-w-4xl px-4 reveal"
                    }
                }
            >
                {eyebrow
                    .map(|eyebrow| {
                        view! {
                            <p class="mb-2 text-sm font-semibold uppercase tracking-[0.2em] text-emerald-300/70">
                                {eyebrow}
                            </p>
                        }
                    })}
                <h2 class="mb-8 text-3xl font-semibold tracking-tight text-neutral-50 md:text-4xl">
                    {title}
                </h2>
                {children()}
            </div>
        </section>
    }
}
