//! Home page: wallet connection and the DAO list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Once a wallet session exists on a supported
//! chain it queries the indexer for DAOs and renders cards linking into
//! projects and proposals.

use leptos::prelude::*;

use governance::deployments;
use governance::model::Dao;

use crate::components::connect_button::ConnectButton;
use crate::components::dao_card::DaoCard;
use crate::state::reads::ReadState;
use crate::state::wallet::WalletState;

/// Home page — connect control, DAO cards, and the create-DAO entry point.
#[component]
pub fn HomePage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let daos = RwSignal::new(ReadState::<Vec<Dao>>::Idle);

    let load = move || {
        let Some(chain_id) = wallet.get_untracked().chain_id else {
            return;
        };
        let Some(endpoint) = deployments::indexer_endpoint(chain_id) else {
            return;
        };
        daos.set(ReadState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::graph::fetch_daos(endpoint).await {
                Ok(list) => daos.set(ReadState::Ready(list)),
                Err(error) => daos.set(ReadState::Failed(error)),
            }
        });
    };

    Effect::new(move || {
        if wallet.get().is_connected() {
            load();
        } else {
            daos.set(ReadState::Idle);
        }
    });

    let unsupported_chain = move || {
        wallet
            .get()
            .chain_id
            .is_some_and(|chain_id| deployments::indexer_endpoint(chain_id).is_none())
    };

    let chain_id = move || wallet.get().chain_id.unwrap_or_default();

    view! {
        <div class="home-page">
            <header class="toolbar">
                <span class="toolbar__title" data-cy="home-button">
                    <a href="/">"Tiller"</a>
                </span>
                <span class="toolbar__spacer"></span>
                <ConnectButton/>
            </header>

            <main class="home-page__content">
                <Show
                    when=move || wallet.get().is_connected()
                    fallback=|| {
                        view! {
                            <p class="home-page__hint">
                                "Connect your wallet to see your DAOs."
                            </p>
                        }
                    }
                >
                    <Show
                        when=move || !unsupported_chain()
                        fallback=|| {
                            view! {
                                <p class="home-page__hint">
                                    "Unsupported network. Switch your wallet to a supported chain."
                                </p>
                            }
                        }
                    >
                        <div class="home-page__actions">
                            <a class="btn btn--primary" href="/daos/create">
                                "+ New DAO"
                            </a>
                        </div>
                        {move || match daos.get() {
                            ReadState::Idle | ReadState::Loading => {
                                view! { <p>"Loading DAOs..."</p> }.into_any()
                            }
                            ReadState::Failed(error) => {
                                view! {
                                    <div class="home-page__error">
                                        <p role="alert">"Failed to load data. " {error}</p>
                                        <button class="btn" on:click=move |_| load()>
                                            "Retry"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            ReadState::Ready(list) => {
                                view! {
                                    <div class="home-page__cards">
                                        {list
                                            .into_iter()
                                            .map(|dao| {
                                                view! { <DaoCard chain_id=chain_id() dao=dao/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </Show>
                </Show>
            </main>
        </div>
    }
}
