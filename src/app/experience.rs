use leptos::prelude::*;

use crate::{
    content::{ExperienceEntry, EXPERIENCE},
    nav::Section,
    reveal::EXPERIENCE_ITEMS,
};

use super::{
    reveal::{RevealGroup, RevealItem},
    PageSection, SectionTitle,
};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <PageSection section=Section::Experience>
            <div class="max-w-4xl mx-auto pt-24">
                <SectionTitle lead="Experience &" accent="Achievements" />
                <RevealGroup spec=EXPERIENCE_ITEMS class="space-y-8">
                    {EXPERIENCE
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! {
                                <RevealItem index>
                                    <ExperienceCard entry=*entry />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </div>
        </PageSection>
    }
}

#[component]
fn ExperienceCard(entry: ExperienceEntry) -> impl IntoView {
    view! {
        <div class="glass-effect p-8 rounded-xl border-l-4 border-accent hover:border-accent/50 transition-all">
            <div class="flex justify-between items-start mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-foreground">{entry.title}</h3>
                    <p class="text-accent font-semibold mt-2">{entry.company}</p>
                </div>
                <span class="text-muted text-sm">{entry.duration}</span>
            </div>
            <p class="text-muted leading-relaxed mb-6">{entry.description}</p>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {entry
                    .achievements
                    .iter()
                    .map(|achievement| {
                        view! {
                            <div class="bg-accent/5 p-4 rounded-lg">
                                <p class="text-sm text-foreground">{*achievement}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
