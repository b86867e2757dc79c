mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod scroll;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    content::PROFILE,
    nav::Section,
    reveal::{RevealSpec, SECTION_TITLE},
};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use reveal::Reveal;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
                <noscript>
                    <style>".mount-reveal { opacity: 1 !important; transform: none !important; }"</style>
                </noscript>
            </head>
            <body class="bg-background text-foreground antialiased">
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
        <Title formatter=|title| {
            format!("{} {} - {title}", PROFILE.first_name, PROFILE.last_name)
        } />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The whole site: navbar, the six sections in order, then the footer.
#[component]
fn HomePage() -> impl IntoView {
    scroll::provide_active_section();

    view! {
        <Title text=PROFILE.headline />
        <main class="overflow-x-hidden">
            <Navbar />
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Experience />
            <Contact />
            <Footer />
        </main>
    }
}

/// Full-height wrapper carrying the anchor id the navbar links to.
#[component]
fn PageSection(
    section: Section,
    #[prop(default = "min-h-screen pb-20 px-6 noise-bg")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=section.id() class=class>
            {children()}
        </section>
    }
}

/// Two-tone section heading that reveals when scrolled to.
#[component]
fn SectionTitle(
    lead: &'static str,
    accent: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] centered: bool,
    #[prop(default = SECTION_TITLE)] spec: RevealSpec,
) -> impl IntoView {
    let (wrapper, line) = if centered {
        ("mb-16 text-center", "accent-line mb-8 mx-auto w-fit")
    } else {
        ("mb-16", "accent-line mb-8")
    };
    view! {
        <Reveal spec class=wrapper>
            <div class=line />
            <h2 class="text-6xl lg:text-7xl font-black text-foreground leading-tight">
                {lead}
                " "
                <span class="text-accent">{accent}</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-xl text-muted mt-6 max-w-2xl">{s}</p> }
                })}
        </Reveal>
    }
}
