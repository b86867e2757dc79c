use leptos::prelude::*;

use crate::{
    content::{PROFILE, SOCIALS},
    nav::Section,
    reveal::hero,
};

use super::{reveal::use_mount_reveal, PageSection};

#[component]
pub fn Hero() -> impl IntoView {
    let pose = use_mount_reveal();
    let [name, subtitle, image, cta] = hero::steps();

    view! {
        <PageSection section=Section::Home class="min-h-screen pt-24 pb-7 px-6 noise-bg">
            <div class="max-w-7xl mx-auto grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <div>
                        <div class="accent-line mb-8" />
                        <h1
                            class="mount-reveal text-7xl lg:text-8xl font-black text-foreground leading-tight"
                            style=move || name.style(pose.get(), 0)
                        >
                            {PROFILE.first_name}
                            " "
                            <span class="text-accent">{PROFILE.last_name}</span>
                        </h1>
                        <p
                            class="mount-reveal text-2xl lg:text-3xl text-muted mt-6 font-medium"
                            style=move || subtitle.style(pose.get(), 0)
                        >
                            {PROFILE.headline}
                        </p>
                    </div>

                    <p class="text-lg text-muted leading-relaxed max-w-lg">{PROFILE.summary}</p>

                    <div class="mount-reveal flex flex-wrap gap-4" style=move || cta.style(pose.get(), 0)>
                        <a
                            href=Section::Projects.href()
                            class="px-8 py-4 bg-accent text-background font-bold rounded-lg hover:opacity-90 transition-opacity"
                        >
                            "View My Work"
                        </a>
                        <a
                            href=Section::Contact.href()
                            class="px-8 py-4 glass-effect font-bold rounded-lg hover:border-accent/50 transition-all"
                        >
                            "Get in Touch"
                        </a>
                    </div>

                    <div class="flex gap-6">
                        {SOCIALS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.label
                                        class="text-muted hover:text-accent transition-colors text-2xl"
                                    >
                                        <i class=social.icon_class />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div
                    class="mount-reveal relative h-96 lg:h-[78%] min-h-96"
                    style=move || image.style(pose.get(), 0)
                >
                    <div class="absolute inset-0 bg-gradient-to-br from-accent/20 to-transparent rounded-2xl" />
                    <img
                        src=PROFILE.image_path
                        alt=format!("{} {}", PROFILE.first_name, PROFILE.last_name)
                        class="w-full h-full object-cover rounded-2xl"
                    />
                </div>
            </div>
        </PageSection>
    }
}
