use leptos::prelude::*;

use crate::content::PROJECTS;

use super::section::SectionContainer;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <SectionContainer title="Projects" eyebrow="What I've built">
            <div class="grid gap-5 md:grid-cols-2">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="group flex flex-col rounded-2xl border border-neutral-800 bg-neutral-900/70 p-5 shadow-sm shadow-black/70 transition hover:-translate-y-0.5 hover:border-emerald-500/40">
                                <div class="mb-3">
                                    <h3 class="text-sm font-semibold text-neutral-50 group-hover:text-emerald-300/90">
                                        {project.name}
                                    </h3>
                                    <p class="text-xs text-neutral-400">{project.tagline}</p>
                                </div>
                                <p class="mb-4 text-xs text-neutral-300">{project.description}</p>
                                <div class="mb-3 flex flex-wrap gap-1.5">
                                    {project
                                        .tech
                                        .iter()
                                        .map(|tech| {
                                            view! {
                                                <span class="rounded-full border border-neutral-700 bg-neutral-950 px-2 py-0.5 text-[10px] text-neutral-300">
                                                    {*tech}
                                                </span>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                                {project
                                    .link
                                    .map(|link| {
                                        view! {
                                            <a
                                                href=link
                                                target="_blank"
                                                rel="noreferrer"
                                                class="mt-auto text-[11px] text-emerald-300/90 hover:text-emerald-200"
                                            >
                                                "View project →"
                                            </a>
                                        }
                                    })}
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </SectionContainer>
    }
}
