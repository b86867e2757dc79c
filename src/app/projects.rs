use leptos::prelude::*;

use crate::{
    content::{Project, PROJECTS},
    nav::Section,
    reveal::PROJECT_CARDS,
};

use super::{
    reveal::{RevealGroup, RevealItem},
    PageSection, SectionTitle,
};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <PageSection section=Section::Projects>
            <div class="max-w-6xl mx-auto pt-24">
                <SectionTitle
                    lead="Featured"
                    accent="Projects"
                    subtitle="A selection of work that demonstrates my approach to design, engineering, and product development."
                />
                <RevealGroup spec=PROJECT_CARDS class="grid grid-cols-1 md:grid-cols-2 gap-8 mt-12">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <RevealItem index>
                                    <ProjectCard project=*project />
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
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <a
            href=project.href
            class="group block h-full p-6 rounded-xl border border-white/10 bg-black/10 hover:bg-black/20 transition-all duration-200 hover:scale-[1.03] cursor-pointer"
        >
            <div class="flex items-start justify-between mb-5">
                <div class="p-3 rounded-lg bg-accent/10 text-2xl leading-none">{project.icon}</div>
                <span class="text-xs font-semibold text-accent uppercase">{project.kind}</span>
            </div>

            <h3 class="text-xl font-semibold text-foreground mb-2 group-hover:text-accent transition-colors">
                {project.title}
            </h3>
            <p class="text-sm text-muted mb-5 line-clamp-2">{project.description}</p>

            <div class="flex flex-wrap gap-2 mb-5">
                {project
                    .tech
                    .iter()
                    .map(|t| {
                        view! {
                            <span class="text-[10px] px-2 py-1 rounded-full bg-white/[0.05] text-muted border border-white/[0.08]">
                                {*t}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="flex items-center gap-3 text-accent font-medium group-hover:gap-5 transition-all">
                <span>"View Project"</span>
                <span class="group-hover:translate-x-1 transition-transform">"→"</span>
            </div>
        </a>
    }
}
