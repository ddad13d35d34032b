use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::FULL_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="border-t border-neutral-900 py-6">
            <div class="mx-auto flex max-w-5xl flex-col items-center justify-between gap-2 px-4 text-[11px] text-neutral-500 sm:flex-row">
                <p>{format!("© {year} {FULL_NAME}")}</p>
                <p>"Built with Leptos & Tailwind · Dark-mode by default."</p>
            </div>
        </footer>
    }
}
