//! Submission dialog: takes ownership of a transaction intent and drives
//! wallet signature and broadcast.
//!
//! ERROR HANDLING
//! ==============
//! A declined signature or broadcast failure is reported inside the dialog
//! and never propagates; the flow only learns that the dialog closed.

#[cfg(test)]
#[path = "submit_dialog_test.rs"]
mod submit_dialog_test;

use leptos::prelude::*;

use governance::abi::Value;
use governance::proposal::TransactionIntent;

use crate::state::wallet::WalletState;

/// The human-readable description carried in a propose intent, if any.
#[must_use]
pub fn description_of(intent: &TransactionIntent) -> Option<&str> {
    intent.args.iter().find_map(|arg| match arg {
        Value::String(text) => Some(text.as_str()),
        _ => None,
    })
}

/// Modal dialog that signs and broadcasts `intent` through the wallet.
#[component]
pub fn SubmitDialog(
    intent: TransactionIntent,
    on_close: Callback<()>,
    href_after_success: String,
) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let sending = RwSignal::new(false);
    let tx_hash = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let description = description_of(&intent).unwrap_or_default().to_owned();
    let target = intent.contract_address.to_string();
    let call_label = format!("{} on chain {}", intent.function_name, intent.chain_id);

    let send_intent = intent;
    let on_confirm = Callback::new(move |()| {
        if sending.get_untracked() || tx_hash.get_untracked().is_some() {
            return;
        }
        let Some(from) = wallet.get_untracked().account else {
            error.set(Some("Connect a wallet first.".to_owned()));
            return;
        };
        sending.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            let intent = send_intent.clone();
            leptos::task::spawn_local(async move {
                match crate::wallet::send_transaction(from, &intent).await {
                    Ok(hash) => tx_hash.set(Some(hash)),
                    Err(message) => error.set(Some(message)),
                }
                sending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (from, &send_intent);
            sending.set(false);
        }
    });

    let success_href = href_after_success;

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Submit Proposal"</h2>
                <p class="dialog__call">{call_label}</p>
                <p class="dialog__target">{target}</p>
                <pre class="dialog__description">{description}</pre>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error" role="alert">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || tx_hash.get().is_some()
                    fallback=move || {
                        view! {
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| on_close.run(())>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_confirm.run(())
                                    disabled=move || sending.get()
                                >
                                    {move || if sending.get() { "Signing..." } else { "Sign and Submit" }}
                                </button>
                            </div>
                        }
                    }
                >
                    <p class="dialog__success">
                        "Transaction submitted: "
                        {move || tx_hash.get().unwrap_or_default()}
                    </p>
                    <a class="btn btn--primary" href=success_href.clone()>
                        "Done"
                    </a>
                </Show>
            </div>
        </div>
    }
}
