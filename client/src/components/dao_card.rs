//! Card for one DAO on the home page.

use leptos::prelude::*;

use governance::model::Dao;

/// A DAO card linking into its projects and proposals.
#[component]
pub fn DaoCard(chain_id: u64, dao: Dao) -> impl IntoView {
    let id = dao.id.to_string().to_lowercase();
    let projects_href = format!("/daos/{chain_id}/{id}/projects");
    let proposals_href = format!("/daos/{chain_id}/{id}/proposals");
    let title = format!("{} ({})", dao.token.name, dao.token.symbol);

    view! {
        <div class="dao-card" data-dao=id.clone()>
            <h3 class="dao-card__name">{title}</h3>
            <span class="dao-card__id">{id.clone()}</span>
            <div class="dao-card__actions">
                <a class="btn" href=projects_href>
                    "Projects"
                </a>
                <a class="btn" href=proposals_href>
                    "Proposals"
                </a>
            </div>
        </div>
    }
}
