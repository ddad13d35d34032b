use leptos::prelude::*;

use crate::content::GITHUB_USERNAME;

use super::section::SectionContainer;

#[component]
pub fn GithubActivity() -> impl IntoView {
    let chart_url = format!("https://ghchart.rshah.org/{GITHUB_USERNAME}");
    let profile_url = format!("https://github.com/{GITHUB_USERNAME}");

    view! {
        <SectionContainer title="GitHub Activity" eyebrow="Building in public">
            <div class="grid items-start gap-6 md:grid-cols-[1.6fr,1fr]">
                <div class="rounded-2xl border border-neutral-800 bg-neutral-900/70 p-4">
                    <p class="mb-3 text-xs text-neutral-400">
                        "A quick look at my recent contribution activity."
                    </p>
                    <div class="w-full overflow-x-auto rounded-lg border border-neutral-800 bg-neutral-950">
                        <img
                            src=chart_url
                            alt=format!("GitHub contributions for {GITHUB_USERNAME}")
                            loading="lazy"
                            class="w-full"
                        />
                    </div>
                </div>

                <div class="space-y-3 rounded-2xl border border-neutral-800 bg-neutral-900/70 p-4 text-base text-neutral-300">
                    <p>
                        "Most of my public work is backend services, Rust tooling, and full-stack experiments. Expect plenty of Rust, Go, TypeScript and React in my repos."
                    </p>
                    <p>
                        "Lately I've been exploring WebAssembly frontends and wiring LLM tooling into otherwise ordinary backends."
                    </p>
                    <a
                        href=profile_url
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center text-emerald-300/90 hover:text-emerald-200"
                    >
                        "Visit my GitHub →"
                    </a>
                </div>
            </div>
        </SectionContainer>
    }
}
