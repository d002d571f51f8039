//! Proposals page: table of one DAO's governance proposals.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use governance::deployments;
use governance::model::Proposal;

use crate::components::connect_button::ConnectButton;
use crate::state::reads::ReadState;
use crate::util;

/// Proposals page — loading, error + retry, empty, and table states.
#[component]
pub fn ProposalsPage() -> impl IntoView {
    let params = use_params_map();
    let proposals = RwSignal::new(ReadState::<Vec<Proposal>>::Idle);

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
        proposals.set(ReadState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::graph::fetch_proposals(endpoint, dao).await {
                Ok(list) => proposals.set(ReadState::Ready(list)),
                Err(error) => proposals.set(ReadState::Failed(error)),
            }
        });
    };

    Effect::new(move || {
        if target.get().is_some() {
            load();
        }
    });

    view! {
        <div class="proposals-page">
            <header class="toolbar">
                <span class="toolbar__title" data-cy="home-button">
                    <a href="/">"Tiller"</a>
                </span>
                <span class="toolbar__spacer"></span>
                <ConnectButton/>
            </header>

            <main class="proposals-page__content">
                <h1>"Proposals"</h1>
                {move || match proposals.get() {
                    ReadState::Idle | ReadState::Loading => {
                        view! { <p data-testid="progress-icon">"Loading proposals..."</p> }
                            .into_any()
                    }
                    ReadState::Failed(_) => {
                        view! {
                            <div class="proposals-page__error">
                                <p role="alert">"Failed to load data."</p>
                                <button
                                    class="btn"
                                    data-testid="retry-btn"
                                    aria-label="retry"
                                    on:click=move |_| load()
                                >
                                    "Retry"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    ReadState::Ready(list) if list.is_empty() => {
                        view! { <p>"This DAO has not had any proposals yet."</p> }.into_any()
                    }
                    ReadState::Ready(list) => {
                        view! {
                            <table class="proposals-table" data-testid="proposals-table">
                                <thead>
                                    <tr>
                                        <th>"Proposal #"</th>
                                        <th>"Description"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|proposal| {
                                            view! {
                                                <tr>
                                                    <td>{proposal.serial}</td>
                                                    <td class="proposals-table__description">
                                                        {proposal.description}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
