use leptos::prelude::*;

use crate::{
    content::{ABOUT_HIGHLIGHTS, PROFILE},
    nav::Section,
    reveal::ABOUT_CONTENT,
};

use super::{reveal::Reveal, PageSection, SectionTitle};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <PageSection section=Section::About>
            <div class="max-w-4xl mx-auto pt-24">
                <SectionTitle lead="About" accent="Me" />

                <Reveal
                    spec=ABOUT_CONTENT
                    class="space-y-8 text-lg text-muted leading-relaxed"
                >
                    <p>
                        "I'm "
                        <span class="text-accent font-semibold">
                            {format!("{} {}", PROFILE.first_name, PROFILE.last_name)}
                        </span>
                        ", a full-stack developer and designer passionate about building elegant, scalable products that solve real-world problems. With a deep interest in both engineering and design, I believe the best products emerge at the intersection of these disciplines."
                    </p>
                    <p>
                        "My journey into tech started with a curiosity about how things work. I've since built multiple SaaS projects, designed robust systems, and continuously pushed myself to learn cutting-edge technologies. I'm fascinated by AI, systems thinking, and the 20/80 rule: doing the 20% of work that generates 80% of the value."
                    </p>

                    <div class="grid md:grid-cols-2 gap-12 my-12">
                        {ABOUT_HIGHLIGHTS
                            .iter()
                            .map(|highlight| {
                                view! {
                                    <div>
                                        <h3 class="text-xl font-bold text-foreground mb-4 flex items-center gap-2">
                                            <span class="accent-line" />
                                            {highlight.heading}
                                        </h3>
                                        <ul class="space-y-2 text-muted">
                                            {highlight
                                                .items
                                                .iter()
                                                .map(|item| {
                                                    view! {
                                                        <li class="flex items-center gap-2">
                                                            <span class="text-accent">"→"</span>
                                                            {*item}
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p>
                        "I'm constantly learning, experimenting with new technologies, and staying updated with industry trends. Great products are built through collaboration, clear thinking, and relentless focus on what matters most."
                    </p>
                </Reveal>
            </div>
        </PageSection>
    }
}
