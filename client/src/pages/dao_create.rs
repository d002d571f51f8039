//! DAO create stepper: Name → Founder → Settings → Confirmation → Terms →
//! Payment.
//!
//! DESIGN
//! ======
//! Step order, advancement gating, and the founder add/remove contract are
//! pure functions over the form value so they stay unit-testable; the
//! component only wires signals to them. The final step records the
//! submission — deploying the DAO itself happens outside the surface this
//! app owns.

#[cfg(test)]
#[path = "dao_create_test.rs"]
mod dao_create_test;

use leptos::prelude::*;

use governance::Address;
use governance::units;

use crate::components::connect_button::ConnectButton;

/// Most founders a DAO can launch with.
pub const MAX_FOUNDERS: usize = 5;

/// Stepper views in fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepView {
    Name,
    Founder,
    Settings,
    Confirmation,
    Terms,
    Payment,
}

impl StepView {
    /// All steps in display order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Founder,
        Self::Settings,
        Self::Confirmation,
        Self::Terms,
        Self::Payment,
    ];

    /// Sidebar label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Founder => "Founder",
            Self::Settings => "Settings",
            Self::Confirmation => "Confirm",
            Self::Terms => "Terms",
            Self::Payment => "Payment",
        }
    }

    /// The next step, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|step| *step == self)?;
        Self::ALL.get(index + 1).copied()
    }

    /// The previous step, if any.
    #[must_use]
    pub fn back(self) -> Option<Self> {
        let index = Self::ALL.iter().position(|step| *step == self)?;
        index.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}

/// One founder row in the create form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FounderInput {
    /// Founder wallet address.
    pub address: String,
    /// Initial token allocation, decimal.
    pub initial_tokens: String,
    /// Contact email (optional).
    pub email: String,
}

/// The whole create-DAO form value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DaoCreateForm {
    /// On-chain name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Founder rows, between one and [`MAX_FOUNDERS`].
    pub founders: Vec<FounderInput>,
    /// Voting period in hours.
    pub voting_period_hours: String,
    /// Quorum percentage.
    pub quorum_percent: String,
    /// Whether the terms were accepted.
    pub terms_accepted: bool,
}

impl Default for DaoCreateForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            founders: vec![FounderInput::default()],
            voting_period_hours: "72".to_owned(),
            quorum_percent: "20".to_owned(),
            terms_accepted: false,
        }
    }
}

/// Whether the given step's inputs are complete and well-formed.
#[must_use]
pub fn step_valid(step: StepView, form: &DaoCreateForm) -> bool {
    match step {
        StepView::Name => {
            let symbol = form.symbol.trim();
            !form.name.trim().is_empty() && !symbol.is_empty() && symbol.len() <= 7
        }
        StepView::Founder => {
            (1..=MAX_FOUNDERS).contains(&form.founders.len())
                && form.founders.iter().all(founder_valid)
        }
        StepView::Settings => {
            form.voting_period_hours
                .trim()
                .parse::<u32>()
                .is_ok_and(|hours| hours > 0)
                && form
                    .quorum_percent
                    .trim()
                    .parse::<u32>()
                    .is_ok_and(|quorum| (1..=100).contains(&quorum))
        }
        StepView::Confirmation | StepView::Payment => true,
        StepView::Terms => form.terms_accepted,
    }
}

/// Add an empty founder row; refuses past [`MAX_FOUNDERS`].
pub fn add_founder(form: &mut DaoCreateForm) -> bool {
    if form.founders.len() >= MAX_FOUNDERS {
        return false;
    }
    form.founders.push(FounderInput::default());
    true
}

/// Remove the founder row at `index`; refuses to drop the last row.
pub fn remove_founder(form: &mut DaoCreateForm, index: usize) -> bool {
    if form.founders.len() <= 1 || index >= form.founders.len() {
        return false;
    }
    form.founders.remove(index);
    true
}

fn founder_valid(founder: &FounderInput) -> bool {
    founder.address.trim().parse::<Address>().is_ok()
        && units::parse_token_amount(&founder.initial_tokens)
            .is_ok_and(|tokens| !tokens.is_zero())
}

/// DAO create page with the six-step form.
#[component]
pub fn DaoCreatePage() -> impl IntoView {
    let form = RwSignal::new(DaoCreateForm::default());
    let active = RwSignal::new(StepView::Name);
    let submitted = RwSignal::new(false);

    let can_continue = move || step_valid(active.get(), &form.get());

    let on_back = move |_| {
        if let Some(step) = active.get().back() {
            active.set(step);
        }
    };
    let on_continue = move |_| {
        if !can_continue() {
            return;
        }
        if let Some(step) = active.get().next() {
            active.set(step);
        }
    };
    let on_deploy = move |_| {
        if !step_valid(StepView::Terms, &form.get_untracked()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        log::debug!("dao create submitted: {:?}", form.get_untracked());
        submitted.set(true);
    };

    let update_founder = move |index: usize, apply: fn(&mut FounderInput, String), value: String| {
        form.update(|form| {
            if let Some(founder) = form.founders.get_mut(index) {
                apply(founder, value);
            }
        });
    };

    view! {
        <div class="dao-create-page">
            <header class="toolbar">
                <span class="toolbar__title" data-cy="home-button">
                    <a href="/">"Tiller"</a>
                </span>
                <span class="toolbar__spacer"></span>
                <ConnectButton/>
            </header>

            <main class="dao-create-page__content">
                <nav class="stepper__tabs">
                    {StepView::ALL
                        .iter()
                        .map(|step| {
                            let step = *step;
                            view! {
                                <span
                                    class="stepper__tab"
                                    class:stepper__tab--active=move || active.get() == step
                                >
                                    {step.label()}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <section class="stepper__view">
                    <Show when=move || active.get() == StepView::Name>
                        <h2>"Name"</h2>
                        <label class="stepper__label">
                            "On-chain name"
                            <input
                                class="stepper__input"
                                data-testid="dao-name"
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    form.update(|f| f.name = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="stepper__label">
                            "Token symbol"
                            <input
                                class="stepper__input"
                                data-testid="token-symbol"
                                type="text"
                                maxlength="7"
                                prop:value=move || form.get().symbol
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.symbol = event_target_value(&ev).to_ascii_uppercase();
                                    });
                                }
                            />
                        </label>
                    </Show>

                    <Show when=move || active.get() == StepView::Founder>
                        <h2>"Founders"</h2>
                        {move || {
                            form.get()
                                .founders
                                .iter()
                                .enumerate()
                                .map(|(index, founder)| {
                                    let address = founder.address.clone();
                                    let tokens = founder.initial_tokens.clone();
                                    let email = founder.email.clone();
                                    view! {
                                        <div class="stepper__founder">
                                            <input
                                                class="stepper__input"
                                                type="text"
                                                placeholder="Founder address: 0x..."
                                                prop:value=address
                                                on:input=move |ev| update_founder(
                                                    index,
                                                    |f, v| f.address = v,
                                                    event_target_value(&ev),
                                                )
                                            />
                                            <input
                                                class="stepper__input"
                                                type="number"
                                                placeholder="Initial tokens"
                                                prop:value=tokens
                                                on:input=move |ev| update_founder(
                                                    index,
                                                    |f, v| f.initial_tokens = v,
                                                    event_target_value(&ev),
                                                )
                                            />
                                            <input
                                                class="stepper__input"
                                                type="email"
                                                placeholder="founder@example.com"
                                                prop:value=email
                                                on:input=move |ev| update_founder(
                                                    index,
                                                    |f, v| f.email = v,
                                                    event_target_value(&ev),
                                                )
                                            />
                                            <button
                                                class="btn"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    form.update(|f| {
                                                        remove_founder(f, index);
                                                    });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <button
                            class="btn"
                            on:click=move |ev| {
                                ev.prevent_default();
                                form.update(|f| {
                                    add_founder(f);
                                });
                            }
                            disabled=move || form.get().founders.len() >= MAX_FOUNDERS
                        >
                            "+ Add founder"
                        </button>
                    </Show>

                    <Show when=move || active.get() == StepView::Settings>
                        <h2>"Governance settings"</h2>
                        <label class="stepper__label">
                            "Voting period (hours)"
                            <input
                                class="stepper__input"
                                type="number"
                                prop:value=move || form.get().voting_period_hours
                                on:input=move |ev| {
                                    form.update(|f| f.voting_period_hours = event_target_value(&ev));
                                }
                            />
                        </label>
                        <label class="stepper__label">
                            "Quorum (%)"
                            <input
                                class="stepper__input"
                                type="number"
                                prop:value=move || form.get().quorum_percent
                                on:input=move |ev| {
                                    form.update(|f| f.quorum_percent = event_target_value(&ev));
                                }
                            />
                        </label>
                    </Show>

                    <Show when=move || active.get() == StepView::Confirmation>
                        <h2>"Confirmation"</h2>
                        {move || {
                            let form = form.get();
                            view! {
                                <dl class="stepper__summary">
                                    <dt>"On-chain name"</dt>
                                    <dd data-testid="dao-name">{form.name.clone()}</dd>
                                    <dt>"Token symbol"</dt>
                                    <dd data-testid="token-symbol">{form.symbol.clone()}</dd>
                                    <dt>"Founders"</dt>
                                    <dd>{form.founders.len()}</dd>
                                    <dt>"Voting period"</dt>
                                    <dd>{format!("{} hour(s)", form.voting_period_hours)}</dd>
                                    <dt>"Quorum"</dt>
                                    <dd>{format!("{}%", form.quorum_percent)}</dd>
                                </dl>
                            }
                        }}
                        <p class="stepper__note">
                            "Name and token symbol cannot be changed after deployment."
                        </p>
                    </Show>

                    <Show when=move || active.get() == StepView::Terms>
                        <h2>"Terms"</h2>
                        <label class="stepper__label stepper__label--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || form.get().terms_accepted
                                on:change=move |ev| {
                                    form.update(|f| f.terms_accepted = event_target_checked(&ev));
                                }
                            />
                            "I have read and accept the terms."
                        </label>
                    </Show>

                    <Show when=move || active.get() == StepView::Payment>
                        <h2>"Payment"</h2>
                        <Show
                            when=move || submitted.get()
                            fallback=move || {
                                view! {
                                    <button class="btn btn--primary" on:click=on_deploy>
                                        "Deploy"
                                    </button>
                                }
                            }
                        >
                            <p class="stepper__note">"Submission recorded."</p>
                        </Show>
                    </Show>
                </section>

                <div class="stepper__nav">
                    <Show when=move || active.get().back().is_some()>
                        <button class="btn" on:click=on_back>
                            "Back"
                        </button>
                    </Show>
                    <Show when=move || active.get().next().is_some()>
                        <button
                            class="btn btn--primary"
                            disabled=move || !can_continue()
                            on:click=on_continue
                        >
                            {move || {
                                if active.get() == StepView::Terms { "Sign" } else { "Continue" }
                            }}
                        </button>
                    </Show>
                </div>
            </main>
        </div>
    }
}
