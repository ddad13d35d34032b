mod contact;
mod experience;
mod footer;
mod github;
mod header;
mod hero;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content;
use contact::ContactSection;
use experience::Experience;
use footer::Footer;
use github::GithubActivity;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=content::SITE_DESCRIPTION />
                <link rel="shortcut icon" type="image/png" href="/favicon.png" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-neutral-950 text-neutral-50 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", content::FULL_NAME) />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site is one page; the header links scroll to anchored sections.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=content::ROLE />
        <Header />
        // sections carry their own max-width containers so the hero band can
        // bleed to the viewport edge; scroll-mt keeps anchor jumps clear of
        // the sticky header
        <main class="w-full">
            <section id="home" class="scroll-mt-20">
                <Hero />
            </section>
            <section id="skills" class="scroll-mt-20">
                <Skills />
            </section>
            <section id="experience" class="scroll-mt-20">
                <Experience />
            </section>
            <section id="projects" class="scroll-mt-20">
                <Projects />
            </section>
            <section id="github" class="scroll-mt-20">
                <GithubActivity />
            </section>
            <section id="contact" class="scroll-mt-20">
                <ContactSection />
            </section>
        </main>
        <Footer />
    }
}
