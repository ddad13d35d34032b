use leptos::{ev::PointerEvent, html, prelude::*};
use leptos_use::use_window_scroll;

use crate::content::{FULL_NAME, PORTRAIT_PATH, ROLE};
use crate::motion::{self, Tilt};

#[component]
pub fn Hero() -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(Tilt::default());
    let (_, scroll_y) = use_window_scroll();

    let glow_style = move || {
        // subscribe to scroll so the glow tracks the card through the viewport
        scroll_y.track();
        let el = if let Some(el) = card_ref.get() {
            el
        } else {
            // server render and first client frame: resting state
            return motion::glow_style(0.0);
        };
        let rect = el.get_bounding_client_rect();
        let viewport = window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        motion::glow_style(motion::scroll_progress(rect.top(), rect.height(), viewport))
    };

    let on_pointer_move = move |ev: PointerEvent| {
        let el = if let Some(el) = card_ref.get_untracked() {
            el
        } else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        set_tilt.set(Tilt::from_pointer(x, y, rect.width(), rect.height()));
    };

    let on_pointer_leave = move |_: PointerEvent| set_tilt.set(Tilt::default());

    view! {
        <div class="relative border-b border-neutral-900 bg-gradient-to-b from-neutral-950 via-neutral-950 to-neutral-900">
            <div class="mx-auto flex max-w-4xl flex-col items-center gap-10 px-4 py-12 md:flex-row md:items-center md:justify-between md:py-24">
                <div class="relative w-full md:flex-1">
                    <div class="pointer-events-none absolute -inset-x-6 -inset-y-6 -z-10 bg-gradient-to-b from-emerald-500/10 via-neutral-950/90 to-transparent blur-2xl"></div>

                    <p class="mb-3 text-[13px] font-semibold uppercase tracking-[0.2em] text-emerald-300/80 md:text-sm">
                        {ROLE}
                    </p>

                    <h1 class="mb-4 text-4xl font-semibold leading-tight tracking-tight text-neutral-50 md:text-5xl md:leading-tight">
                        "I build dependable "
                        <span class="text-emerald-300/90">"backend services"</span>
                        " and fast, friendly "
                        <span class="text-emerald-300/90">"interfaces"</span>
                        "."
                    </h1>

                    <p class="mb-6 max-w-xl text-[15px] text-neutral-300 md:text-base">
                        "I'm Nora, a full-stack engineer with seven years of experience shipping cloud-native products in Rust, Go, Python, and TypeScript. I care about clean architecture, readable code, and software that survives contact with production."
                    </p>

                    <div class="mb-6 flex flex-wrap items-center gap-4">
                        <a
                            href="#projects"
                            class="rounded-full bg-emerald-500/90 px-6 py-2.5 text-xs font-semibold text-neutral-950 shadow-md shadow-emerald-500/30 transition hover:bg-emerald-400 md:text-sm"
                        >
                            "See my work"
                        </a>
                        <a
                            href="#contact"
                            class="text-xs text-neutral-300 hover:text-emerald-300/90 md:text-sm"
                        >
                            "Contact me →"
                        </a>
                    </div>

                    <div class="flex flex-wrap gap-3 text-[12px] text-neutral-400 md:text-[13px]">
                        <span class="inline-flex items-center gap-2">
                            <span class="h-2 w-2 animate-pulse rounded-full bg-emerald-400"></span>
                            "Open to senior full-stack & backend roles"
                        </span>
                        <span>"Rust · Go · Python · React · AWS · GCP"</span>
                    </div>

                    <a
                        href="#skills"
                        class="mt-8 flex flex-col items-center gap-1 text-[11px] text-neutral-500 md:hidden"
                    >
                        <span>"Scroll down"</span>
                        <span class="h-6 w-px overflow-hidden rounded-full bg-neutral-700">
                            <span class="block h-full w-full animate-bounce bg-emerald-400"></span>
                        </span>
                    </a>
                </div>

                // desktop-only photo card with pointer tilt and scroll glow
                <div class="hidden md:flex md:flex-1 md:justify-end">
                    <div node_ref=card_ref class="relative aspect-[3/4] w-80">
                        <div
                            style=glow_style
                            class="pointer-events-none absolute inset-0 rounded-[1.75rem] bg-gradient-to-tr from-emerald-500/30 via-teal-500/25 to-sky-500/20 blur-2xl"
                        ></div>

                        <div
                            class="tilt-card relative h-full w-full overflow-hidden rounded-[1.75rem] border border-neutral-700 bg-neutral-900/90 shadow-xl shadow-black/60 transition-transform duration-200 ease-out"
                            style=move || tilt.get().transform()
                            on:pointermove=on_pointer_move
                            on:pointerleave=on_pointer_leave
                        >
                            <img
                                src=PORTRAIT_PATH
                                alt=FULL_NAME
                                class="h-full w-full object-cover object-center"
                            />
                            <div class="pointer-events-none absolute inset-0 rounded-[1.75rem] border border-emerald-300/10"></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
