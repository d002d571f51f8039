//! Projects page: card grid for one DAO's projects.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use governance::deployments;
use governance::model::Project;
use governance::view;

use crate::components::connect_button::ConnectButton;
use crate::components::project_card::ProjectCard;
use crate::state::reads::ReadState;
use crate::state::wallet::WalletState;
use crate::util;

/// Projects page — indexer-backed cards plus the propose-project entry.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let params = use_params_map();
    let wallet = expect_context::<RwSignal<WalletState>>();
    let projects = RwSignal::new(ReadState::<Vec<Project>>::Idle);

    let target = Memo::new(move |_| {
        let params = params.get();
        util::route::parse_dao_route(
            params.get("chain_id").as_deref(),
            params.get("dao_id").as_deref(),
        )
    });

    let load = move || {
        let Some((chain_id, dao)) = target.get_untracked() else {
            return;
        };
        let Some(endpoint) = deployments::indexer_endpoint(chain_id) else {
            return;
        };
        projects.set(ReadState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::graph::fetch_projects(endpoint, dao).await {
                Ok(list) => projects.set(ReadState::Ready(list)),
                Err(error) => projects.set(ReadState::Failed(error)),
            }
        });
    };

    Effect::new(move || {
        if target.get().is_some() {
            load();
        }
    });

    let propose_href = move || {
        target
            .get()
            .map(|(chain_id, dao)| {
                format!("/daos/{chain_id}/{}/projects/propose", dao.to_string().to_lowercase())
            })
            .unwrap_or_default()
    };

    view! {
        <div class="projects-page">
            <header class="toolbar">
                <span class="toolbar__title" data-cy="home-button">
                    <a href="/">"Tiller"</a>
                </span>
                <span class="toolbar__spacer"></span>
                <ConnectButton/>
            </header>

            <main class="projects-page__content">
                <h1>"Projects"</h1>
                <Show
                    when=move || target.get().is_some()
                    fallback=|| view! { <p role="alert">"Unknown DAO route."</p> }
                >
                    <div class="projects-page__actions">
                        <a class="btn btn--primary" data-cy="cta-button" href=propose_href>
                            "Propose Project"
                        </a>
                    </div>
                    {move || match projects.get() {
                        ReadState::Idle | ReadState::Loading => {
                            view! { <p>"Loading projects..."</p> }.into_any()
                        }
                        ReadState::Failed(error) => {
                            view! {
                                <div class="projects-page__error">
                                    <p role="alert">"Failed to load data. " {error}</p>
                                    <button class="btn" on:click=move |_| load()>
                                        "Retry"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        ReadState::Ready(list) => {
                            let now_secs = util::now::unix_seconds();
                            let viewer = wallet.get().account;
                            let (chain_id, dao) = target.get().unwrap_or_default();
                            let dao_segment = dao.to_string().to_lowercase();
                            view! {
                                <div class="projects-page__cards">
                                    {list
                                        .iter()
                                        .map(|project| {
                                            let card = view::project_card(project, viewer, now_secs);
                                            let tribute_href = format!(
                                                "/daos/{chain_id}/{dao_segment}/projects/{}/tribute",
                                                project.project_id,
                                            );
                                            view! {
                                                <ProjectCard view_model=card tribute_href=tribute_href/>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </Show>
            </main>
        </div>
    }
}
