//! Card for one project on the projects page.
//!
//! DESIGN
//! ======
//! All rendered strings and visibility decisions come pre-computed in the
//! [`ProjectCardView`] view-model; this component only lays them out. The
//! card is static once built, so conditional pieces are plain `Option`
//! views rather than reactive blocks.

use leptos::prelude::*;

use governance::view::{ProjectCardView, ProjectStatus};

/// A project card with goals, budget, deadline, manager, status chip, and
/// the manager-only Tribute action.
#[component]
pub fn ProjectCard(view_model: ProjectCardView, tribute_href: String) -> impl IntoView {
    let ProjectCardView {
        id_label,
        goals,
        budget_label,
        deadline_label,
        manager_label,
        status,
        tribute_visible,
    } = view_model;

    let project_number = id_label.trim_start_matches('#').to_owned();

    let goal_rows = goals
        .into_iter()
        .map(|goal| {
            let link = (!goal.link.is_empty()).then(|| {
                view! {
                    <a
                        class="project-card__goal-link"
                        href=goal.link
                        target="_blank"
                        rel="noopener"
                    >
                        "Tracking Link"
                    </a>
                }
            });
            view! {
                <div class="project-card__goal">
                    <h3 class="project-card__goal-title">{goal.title}</h3>
                    {link}
                </div>
            }
        })
        .collect::<Vec<_>>();

    let status_chip = status.map(|status| {
        let class = match status {
            ProjectStatus::Active => "project-card__status project-card__status--active",
            ProjectStatus::Expired => "project-card__status project-card__status--expired",
        };
        view! { <span class=class>{status.label()}</span> }
    });

    let tribute = tribute_visible.then(|| {
        view! {
            <a class="btn project-card__tribute" href=tribute_href>
                "Tribute"
            </a>
        }
    });

    view! {
        <div class="project-card" data-project=project_number>
            <p class="project-card__id">{id_label}</p>
            {goal_rows}
            <p class="project-card__line">{budget_label}</p>
            <p class="project-card__line">{deadline_label}</p>
            <p class="project-card__line">{manager_label}</p>
            {status_chip}
            {tribute}
        </div>
    }
}
