use leptos::prelude::*;

use crate::{
    content::PROFILE,
    nav::{MobileMenu, NavLink, Section, NAV_LINKS},
};

use super::scroll::use_active_section;

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu, set_menu) = signal(MobileMenu::default());
    let is_open = move || menu.with(MobileMenu::is_open);

    view! {
        <nav class="fixed top-0 w-full z-50 bg-background/80 backdrop-blur-md border-b border-border">
            <div class="max-w-7xl mx-auto px-6 py-4 flex justify-between items-center">
                <a href=Section::Home.href() class="text-2xl font-bold text-foreground">
                    {PROFILE.monogram}
                    <span class="text-accent">"."</span>
                </a>

                <div class="hidden md:flex gap-8 items-center">
                    {NAV_LINKS.iter().map(|link| view! { <NavItem link=*link /> }).collect_view()}
                </div>

                <button
                    class="md:hidden text-foreground text-2xl leading-none"
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || is_open().to_string()
                    on:click=move |_| set_menu.update(MobileMenu::toggle)
                >
                    {move || if is_open() { "✕" } else { "☰" }}
                </button>

                <Show when=is_open>
                    <div class="absolute top-16 left-0 right-0 md:hidden bg-gradient-to-b from-background via-background/95 to-background/80 border-b border-border backdrop-blur-md">
                        <div class="flex flex-col gap-4 p-6">
                            {NAV_LINKS
                                .iter()
                                .map(|link| {
                                    let link = *link;
                                    let on_select = Callback::new(move |_: ()| {
                                        set_menu.update(MobileMenu::select);
                                    });
                                    view! { <NavItem link on_select /> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

/// A link to one section, highlighted while that section is active. The
/// browser follows the anchor; `on_select` runs first.
#[component]
fn NavItem(link: NavLink, #[prop(optional, into)] on_select: Option<Callback<()>>) -> impl IntoView {
    let active = use_active_section();
    let class = move || {
        if active.get() == link.section {
            "text-sm font-medium transition-colors text-accent"
        } else {
            "text-sm font-medium transition-colors text-muted hover:text-foreground"
        }
    };
    view! {
        <a
            href=link.section.href()
            class=class
            aria-current=move || (active.get() == link.section).then_some("true")
            on:click=move |_| {
                if let Some(cb) = on_select {
                    cb.run(());
                }
            }
        >
            {link.label}
        </a>
    }
}
