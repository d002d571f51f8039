//! Project proposal page: the form that feeds the submission flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns one [`SubmissionFlow`] per form instance and performs the
//! commands it emits: the forced manager-balance read (through a
//! generation-counted slot so a newer attempt cancels any in-flight one),
//! the fresh extension-enabled read, and opening the submission dialog.
//! Every attempt re-runs the whole read-validate-build sequence; nothing is
//! cached across attempts.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use governance::deployments;
use governance::flow::{Command, SubmissionFlow};
use governance::model::Dao;
use governance::proposal::TransactionIntent;
use governance::validate::{Field, ProjectProposalForm};
use governance::{U256, datetime};

use crate::components::connect_button::ConnectButton;
use crate::components::submit_dialog::SubmitDialog;
use crate::state::reads::{ReadSlot, ReadState};
use crate::state::wallet::WalletState;
use crate::util;

/// Project proposal form page.
#[component]
pub fn ProjectProposalPage() -> impl IntoView {
    let params = use_params_map();
    let wallet = expect_context::<RwSignal<WalletState>>();

    let target = Memo::new(move |_| {
        let params = params.get();
        util::route::parse_dao_route(
            params.get("chain_id").as_deref(),
            params.get("dao_id").as_deref(),
        )
    });

    // Form defaults: the connected account as manager, +30 days deadline.
    let manager = RwSignal::new(
        wallet
            .get_untracked()
            .account
            .map(|account| account.to_string())
            .unwrap_or_default(),
    );
    let budget = RwSignal::new(String::new());
    let deadline = RwSignal::new(
        datetime::default_deadline(util::now::unix_seconds()).unwrap_or_default(),
    );
    let goal_title = RwSignal::new(String::new());
    let goal_description = RwSignal::new(String::new());
    let goal_link = RwSignal::new(String::new());

    // DAO header info.
    let dao_info = RwSignal::new(ReadState::<Dao>::Idle);
    Effect::new(move || {
        let Some((chain_id, dao)) = target.get() else {
            return;
        };
        let Some(endpoint) = deployments::indexer_endpoint(chain_id) else {
            return;
        };
        dao_info.set(ReadState::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::graph::fetch_dao(endpoint, dao).await {
                Ok(dao) => dao_info.set(ReadState::Ready(dao)),
                Err(error) => dao_info.set(ReadState::Failed(error)),
            }
        });
    });

    // One flow per form instance, created once the route and deployment
    // table agree on a target.
    let flow = RwSignal::new(None::<SubmissionFlow>);
    Effect::new(move || {
        let Some((chain_id, dao)) = target.get() else {
            return;
        };
        let Some(extension) = deployments::project_management_extension(chain_id) else {
            return;
        };
        flow.set(Some(SubmissionFlow::new(dao, chain_id, extension)));
    });

    // Forced manager-balance reads go through a slot: a newer attempt
    // invalidates any previous in-flight completion.
    let manager_read = RwSignal::new(ReadSlot::<U256>::default());
    let dialog_intent = RwSignal::new(None::<TransactionIntent>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((chain_id, dao)) = target.get_untracked() else {
            return;
        };
        let Some(rpc_endpoint) = deployments::rpc_endpoint(chain_id) else {
            return;
        };

        let form = ProjectProposalForm {
            manager: manager.get_untracked(),
            budget: budget.get_untracked(),
            deadline: deadline.get_untracked(),
            goal_title: goal_title.get_untracked(),
            goal_description: goal_description.get_untracked(),
            goal_link: goal_link.get_untracked(),
        };
        let now_secs = util::now::unix_seconds();

        let command = flow
            .try_update(|flow| {
                flow.as_mut()
                    .map_or(Command::None, |flow| flow.submit(&form, now_secs))
            })
            .unwrap_or(Command::None);
        let Command::ReadManagerBalance { manager: proposed } = command else {
            return;
        };

        let generation = manager_read
            .try_update(ReadSlot::begin)
            .unwrap_or_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome =
                crate::net::rpc::read_manager_balance(rpc_endpoint, dao, proposed).await;
            if let Err(error) = &outcome {
                log::warn!("error reading manager balance: {error}");
            }
            let accepted = manager_read
                .try_update(|slot| slot.complete(generation, outcome.clone()))
                .unwrap_or(false);
            if !accepted {
                // A newer attempt superseded this read; drop it.
                return;
            }

            let command = flow
                .try_update(|flow| {
                    flow.as_mut()
                        .map_or(Command::None, |flow| flow.manager_balance(outcome))
                })
                .unwrap_or(Command::None);
            let Command::ReadExtensionEnabled { extension } = command else {
                return;
            };

            let outcome =
                crate::net::rpc::read_extension_enabled(rpc_endpoint, dao, extension).await;
            let command = flow
                .try_update(|flow| {
                    flow.as_mut()
                        .map_or(Command::None, |flow| flow.extension_enabled(outcome))
                })
                .unwrap_or(Command::None);
            if let Command::OpenDialog(intent) = command {
                dialog_intent.set(Some(intent));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (generation, rpc_endpoint, dao);
        }
    };

    let on_dialog_close = Callback::new(move |()| {
        dialog_intent.set(None);
        flow.update(|flow| {
            if let Some(flow) = flow {
                flow.dialog_closed();
            }
        });
    });

    let busy = move || flow.get().is_some_and(|flow| flow.is_busy());
    let field_error = move |field: Field| {
        flow.get()
            .and_then(|flow| flow.field_error(field).map(ToOwned::to_owned))
    };
    let read_notice =
        move || flow.get().and_then(|flow| flow.read_notice().map(ToOwned::to_owned));
    let alert = move || flow.get().and_then(|flow| flow.alert().map(ToOwned::to_owned));

    let unsupported = move || {
        target
            .get()
            .is_some_and(|(chain_id, _)| {
                deployments::project_management_extension(chain_id).is_none()
            })
    };

    let dao_header = move || match dao_info.get() {
        ReadState::Ready(dao) => Some(view! {
            <div class="proposal-form__dao" role="note">
                <p>"Propose a new project for DAO"</p>
                <h2>{format!("{} ({})", dao.token.name, dao.token.symbol)}</h2>
            </div>
        }),
        _ => None,
    };

    let success_href = move || {
        target
            .get()
            .map(|(chain_id, dao)| {
                format!("/daos/{chain_id}/{}/projects", dao.to_string().to_lowercase())
            })
            .unwrap_or_else(|| "/".to_owned())
    };

    view! {
        <div class="proposal-page">
            <header class="toolbar">
                <span class="toolbar__title" data-cy="home-button">
                    <a href="/">"Tiller"</a>
                </span>
                <span class="toolbar__spacer"></span>
                <ConnectButton/>
            </header>

            <main class="proposal-page__content">
                <Show
                    when=move || !unsupported()
                    fallback=|| {
                        view! {
                            <p role="alert">
                                "Unsupported network. Switch your wallet to a supported chain."
                            </p>
                        }
                    }
                >
                    {dao_header}
                    <form class="proposal-form" on:submit=on_submit>
                        <label class="proposal-form__label">
                            "Manager"
                            <input
                                class="proposal-form__input"
                                data-testid="manager"
                                type="text"
                                placeholder="ETH L1/L2 address: 0x..."
                                prop:value=move || manager.get()
                                on:input=move |ev| manager.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || field_error(Field::Manager).is_some()>
                            <p class="proposal-form__error" role="alert">
                                {move || field_error(Field::Manager).unwrap_or_default()}
                            </p>
                        </Show>
                        <Show when=move || read_notice().is_some()>
                            <p class="proposal-form__notice" role="alert">
                                {move || read_notice().unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="proposal-form__label">
                            "Budget"
                            <input
                                class="proposal-form__input"
                                data-testid="budget"
                                type="number"
                                placeholder="Amount in DAO sweat tokens"
                                prop:value=move || budget.get()
                                on:input=move |ev| budget.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || field_error(Field::Budget).is_some()>
                            <p class="proposal-form__error" role="alert">
                                {move || field_error(Field::Budget).unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="proposal-form__label">
                            "Deadline"
                            <input
                                class="proposal-form__input"
                                data-testid="deadline"
                                type="date"
                                prop:value=move || deadline.get()
                                on:input=move |ev| deadline.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || field_error(Field::Deadline).is_some()>
                            <p class="proposal-form__error" role="alert">
                                {move || field_error(Field::Deadline).unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="proposal-form__label">
                            "Goal"
                            <input
                                class="proposal-form__input"
                                data-testid="goalTitle"
                                type="text"
                                placeholder="Describe a measurable goal of the project"
                                prop:value=move || goal_title.get()
                                on:input=move |ev| goal_title.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || field_error(Field::GoalTitle).is_some()>
                            <p class="proposal-form__error" role="alert">
                                {move || field_error(Field::GoalTitle).unwrap_or_default()}
                            </p>
                        </Show>

                        <label class="proposal-form__label">
                            "Goal Tracking Link"
                            <input
                                class="proposal-form__input"
                                data-testid="goalLink"
                                type="url"
                                placeholder="URL to the board where this goal is tracked"
                                prop:value=move || goal_link.get()
                                on:input=move |ev| goal_link.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="proposal-form__label">
                            "Description"
                            <textarea
                                class="proposal-form__input proposal-form__input--multiline"
                                data-testid="goalDescription"
                                placeholder="Describe the main goal(s) of this project using Markdown format."
                                prop:value=move || goal_description.get()
                                on:input=move |ev| goal_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <Show when=move || !goal_description.get().is_empty()>
                            <p class="proposal-form__preview-caption">"Markdown Preview"</p>
                            <div
                                class="proposal-form__preview"
                                inner_html=move || util::markdown::render(&goal_description.get())
                            ></div>
                        </Show>

                        <Show when=move || alert().is_some()>
                            <p class="proposal-form__alert" role="alert">
                                {move || alert().unwrap_or_default()}
                            </p>
                        </Show>

                        <button
                            class="btn btn--primary"
                            data-testid="submit-button"
                            type="submit"
                            disabled=busy
                        >
                            {move || if busy() { "Checking..." } else { "Submit" }}
                        </button>
                    </form>
                </Show>
            </main>

            <Show when=move || dialog_intent.get().is_some()>
                {move || {
                    dialog_intent
                        .get()
                        .map(|intent| {
                            view! {
                                <SubmitDialog
                                    intent=intent
                                    on_close=on_dialog_close
                                    href_after_success=success_href()
                                />
                            }
                        })
                }}
            </Show>
        </div>
    }
}
