pub mod state;

use self::state::create_state;
use crate::shared::catalog_view::CatalogGrid;
use crate::shared::components::{CardAnimated, FilterTabs};
use crate::shared::icons::icon;
use contracts::domain::a002_project::aggregate::Project;
use leptos::prelude::*;

#[component]
pub fn ProjectList() -> impl IntoView {
    let filter = create_state();
    let categories = filter.categories();

    view! {
        <FilterTabs
            categories=categories
            active=Signal::derive(move || filter.active_category())
            on_select=Callback::new(move |c: String| filter.select_category(c))
        />
        <CatalogGrid
            filter=filter
            class="projects-grid"
            empty_message="No projects in this category yet."
            render=|project: Project, delay: u32| view! { <ProjectCard project=project delay_ms=delay /> }
        />
    }
}

#[component]
fn ProjectCard(project: Project, delay_ms: u32) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=delay_ms class="project-card" ripple=true>
            {project.image.clone().map(|src| view! {
                <div class="project-image">
                    <img src=src alt=project.title.clone() loading="lazy" />
                </div>
            })}
            <div class="project-content">
                <h3 class="project-title">{project.title.clone()}</h3>
                <p class="project-description">{project.description.clone()}</p>
                <div class="project-tech">
                    {project
                        .tags
                        .iter()
                        .map(|t| view! { <span class="tech-tag">{t.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="project-links">
                    {project.demo_url.clone().map(|url| view! {
                        <a class="project-link" href=url target="_blank" rel="noopener">
                            {icon("external")} " Live Demo"
                        </a>
                    })}
                    {project.repo_url.clone().map(|url| view! {
                        <a class="project-link" href=url target="_blank" rel="noopener">
                            {icon("github")} " Code"
                        </a>
                    })}
                </div>
            </div>
        </CardAnimated>
    }
}
