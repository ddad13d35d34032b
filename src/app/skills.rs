use leptos::prelude::*;

use crate::accordion::Accordion;
use crate::content::{SkillLevel, SKILL_GROUPS};

use super::section::SectionContainer;

#[component]
pub fn Skills() -> impl IntoView {
    // first group open on load, mobile only
    let (accordion, set_accordion) = signal(Accordion::start_open(0));

    view! {
        <SectionContainer title="Technical Skills" eyebrow="What I work with">
            <div class="space-y-3 md:hidden">
                {SKILL_GROUPS
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        let is_open = move || accordion.get().is_open(index);
                        view! {
                            <div class="overflow-hidden rounded-xl border border-neutral-800 bg-neutral-900/70 shadow-md shadow-black/50">
                                <button
                                    type="button"
                                    class="flex w-full items-center justify-between gap-3 px-4 py-3"
                                    on:click=move |_| set_accordion.update(|state| state.toggle(index))
                                >
                                    <div class="flex items-center gap-3">
                                        <span class="text-lg">{group.icon}</span>
                                        <div class="flex flex-col items-start">
                                            <span class="text-sm font-semibold text-neutral-50">
                                                {group.title}
                                            </span>
                                            <span class="mt-1 rounded-full border border-emerald-400/40 bg-neutral-950 px-2 py-[2px] text-[11px] text-emerald-200">
                                                {group.level.label()}
                                            </span>
                                        </div>
                                    </div>
                                    <span class=move || {
                                        if is_open() {
                                            "text-xs text-neutral-400 transition-transform rotate-90"
                                        } else {
                                            "text-xs text-neutral-400 transition-transform"
                                        }
                                    }>"›"</span>
                                </button>

                                <div class="px-4 pb-2">
                                    <LevelBar level=group.level />
                                </div>

                                {move || {
                                    if !is_open() {
                                        None
                                    } else {
                                        Some(
                                            view! {
                                                <div class="border-t border-neutral-800 px-4 py-3 text-sm text-neutral-300">
                                                    <SkillList items=group.items />
                                                </div>
                                            },
                                        )
                                    }
                                }}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="hidden md:grid md:grid-cols-2 md:gap-6">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="relative rounded-xl border border-neutral-800 bg-neutral-900/70 p-6 shadow-md shadow-black/50 transition hover:border-emerald-400/50">
                                <div class="mb-3 flex items-start justify-between gap-3">
                                    <div class="flex items-center gap-3">
                                        <span class="text-xl">{group.icon}</span>
                                        <div>
                                            <h3 class="text-base font-semibold text-neutral-50">
                                                {group.title}
                                            </h3>
                                            <span class="mt-1 inline-block rounded-full border border-emerald-400/40 bg-neutral-950 px-2 py-[3px] text-[11px] text-emerald-200">
                                                {group.level.label()}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="group relative cursor-help">
                                        <span class="flex h-4 w-4 items-center justify-center rounded-full border border-neutral-600 text-[10px] text-neutral-500 group-hover:border-emerald-300 group-hover:text-emerald-300">
                                            "?"
                                        </span>
                                        <div class="pointer-events-none absolute right-0 top-6 z-20 w-56 rounded-md border border-neutral-700 bg-neutral-950 px-3 py-2 text-[11px] text-neutral-200 opacity-0 shadow-lg shadow-black/60 transition-opacity group-hover:opacity-100">
                                            {group.tooltip}
                                        </div>
                                    </div>
                                </div>

                                <div class="mb-3">
                                    <LevelBar level=group.level />
                                </div>

                                <SkillList items=group.items />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionContainer>
    }
}

#[component]
fn LevelBar(level: SkillLevel) -> impl IntoView {
    view! {
        <div class="h-1.5 w-full rounded-full bg-neutral-800">
            <div class=format!("h-1.5 rounded-full {}", level.bar_class())></div>
        </div>
    }
}

#[component]
fn SkillList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-1.5 text-sm leading-relaxed text-neutral-300">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex gap-2">
                            <span class="mt-[6px] h-1.5 w-1.5 shrink-0 rounded-full bg-emerald-400/80"></span>
                            <span>{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
