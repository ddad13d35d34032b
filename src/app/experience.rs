use leptos::prelude::*;

use crate::content::EXPERIENCES;

use super::section::SectionContainer;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <SectionContainer title="Experience" eyebrow="Where I've worked">
            <div class="space-y-6">
                {EXPERIENCES
                    .iter()
                    .map(|entry| {
                        view! {
                            <article class="rounded-2xl border border-neutral-800 bg-neutral-900/70 p-5 transition hover:-translate-y-0.5 hover:border-emerald-500/40">
                                <div class="mb-3 flex flex-wrap items-baseline justify-between gap-2">
                                    <div>
                                        <h3 class="text-base font-semibold text-neutral-50">
                                            {entry.role}
                                        </h3>
                                        <p class="text-sm text-neutral-400">{entry.company}</p>
                                    </div>
                                    <div class="text-right text-[11px] text-neutral-400">
                                        <p>{entry.period}</p>
                                        <p>{entry.location}</p>
                                    </div>
                                </div>
                                <ul class="space-y-1.5 text-sm text-neutral-300">
                                    {entry
                                        .highlights
                                        .iter()
                                        .map(|highlight| {
                                            view! {
                                                <li class="flex gap-2">
                                                    <span class="mt-1 h-1.5 w-1.5 shrink-0 rounded-full bg-emerald-400/80"></span>
                                                    <span>{*highlight}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionContainer>
    }
}
