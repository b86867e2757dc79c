use leptos::prelude::*;

use crate::{
    content::{SkillCategory, DESIGN_TOOLS, DEVELOPMENT_TOOLS, SKILL_CATEGORIES},
    nav::Section,
    reveal::SKILL_CARDS,
};

use super::{
    reveal::{RevealGroup, RevealItem},
    PageSection, SectionTitle,
};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <PageSection section=Section::Skills>
            <div class="max-w-6xl mx-auto pt-24">
                <SectionTitle
                    lead="Skills &"
                    accent="Expertise"
                    subtitle="A comprehensive overview of my technical and professional capabilities."
                />
                <RevealGroup
                    spec=SKILL_CARDS
                    class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6 mt-12"
                >
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! {
                                <RevealItem index>
                                    <SkillCard category=*category />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>

                <div class="mt-20 grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <ToolGrid heading="Development Tools" tools=&DEVELOPMENT_TOOLS />
                    <ToolGrid heading="Design Tools" tools=&DESIGN_TOOLS />
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn SkillCard(category: SkillCategory) -> impl IntoView {
    view! {
        <div class="h-full p-6 rounded-xl border border-white/10 bg-white/[0.03] hover:bg-white/[0.06] transition-all duration-200 hover:-translate-y-1">
            <div class="flex items-center gap-3 mb-5">
                <div class="p-2 rounded-lg bg-accent/10 text-xl leading-none">{category.icon}</div>
                <h3 class="text-lg font-semibold text-foreground">{category.category}</h3>
            </div>
            <ul class="space-y-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="text-sm text-muted hover:text-foreground transition-colors flex items-center gap-2">
                                <span class="text-accent text-xs">"▸"</span>
                                {*skill}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ToolGrid(heading: &'static str, tools: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-3xl font-bold text-foreground mb-8 flex items-center gap-3">
                <span class="accent-line" />
                {heading}
            </h3>
            <div class="grid grid-cols-2 gap-4">
                {tools
                    .iter()
                    .map(|tool| {
                        view! {
                            <div class="glass-effect p-4 rounded-lg text-center hover:border-accent/50 transition-all">
                                <p class="text-sm font-medium text-foreground">{*tool}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
