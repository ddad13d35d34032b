use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::content::{FULL_NAME, NAV_ITEMS, PORTRAIT_THUMB_PATH, RESUME_PATH, ROLE};
use crate::motion::passed_scroll_threshold;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    let header_class = move || {
        let base = "sticky top-0 z-40 border-b border-neutral-800 bg-neutral-950/90 backdrop-blur";
        if passed_scroll_threshold(scroll_y.get()) {
            format!("{base} shadow-[0_10px_30px_rgba(0,0,0,0.65)]")
        } else {
            base.to_string()
        }
    };

    view! {
        <header class=header_class>
            <div class="mx-auto flex max-w-4xl items-center justify-between px-4 py-3 md:py-4">
                <a href="#home" class="flex items-center gap-3">
                    <div class="h-9 w-9 overflow-hidden rounded-2xl border border-emerald-500/40 bg-neutral-900 shadow-sm shadow-emerald-500/40">
                        <img
                            src=PORTRAIT_THUMB_PATH
                            alt=FULL_NAME
                            class="h-full w-full object-cover object-center"
                        />
                    </div>
                    <div class="flex flex-col leading-tight">
                        <span class="text-sm font-semibold tracking-tight text-neutral-50">
                            {FULL_NAME}
                        </span>
                        <span class="text-[11px] text-neutral-400">{ROLE}</span>
                    </div>
                </a>
                <nav class="hidden items-center gap-5 md:flex">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    class="group relative text-sm text-neutral-300 transition-colors hover:text-emerald-300/90"
                                >
                                    {item.label}
                                    <span class="pointer-events-none absolute inset-x-0 -bottom-1 h-[2px] origin-center scale-x-0 bg-emerald-400/80 transition-transform duration-200 ease-out group-hover:scale-x-100"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href=RESUME_PATH
                        target="_blank"
                        rel="noopener noreferrer"
                        class="rounded-full border border-emerald-500/40 bg-neutral-900 px-4 py-1.5 text-xs font-medium text-emerald-100 shadow-sm transition hover:border-emerald-400 hover:bg-emerald-500/10"
                    >
                        "Resume"
                    </a>
                </nav>
                <button
                    class="inline-flex h-9 w-9 items-center justify-center rounded-md border border-neutral-700 md:hidden"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <div class=move || {
                        if menu_open.get() {
                            "space-y-1.5 transition-transform duration-200 rotate-90"
                        } else {
                            "space-y-1.5 transition-transform duration-200"
                        }
                    }>
                        <span class="block h-0.5 w-5 bg-neutral-100"></span>
                        <span class="block h-0.5 w-5 bg-neutral-100"></span>
                    </div>
                </button>
            </div>
            {move || {
                if !menu_open.get() {
                    None
                } else {
                    Some(
                        view! {
                            <nav class="border-t border-neutral-800 bg-neutral-950 md:hidden">
                                <div class="mx-auto flex max-w-4xl flex-col gap-1 px-4 py-3 text-sm">
                                    {NAV_ITEMS
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <a
                                                    href=item.href
                                                    on:click=move |_| set_menu_open.set(false)
                                                    class="py-1 text-neutral-200 transition-colors hover:text-emerald-300/90"
                                                >
                                                    {item.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                    <a
                                        href=RESUME_PATH
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        on:click=move |_| set_menu_open.set(false)
                                        class="mt-2 rounded-md border border-emerald-500/40 bg-neutral-900 px-3 py-1.5 text-center text-xs text-emerald-100 transition hover:bg-emerald-500/10"
                                    >
                                        "Download Resume"
                                    </a>
                                </div>
                            </nav>
                        },
                    )
                }
            }}
        </header>
    }
}
