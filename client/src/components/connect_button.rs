//! Wallet connect/disconnect control shown in the page header.

use leptos::prelude::*;

use crate::state::wallet::{ConnectionStatus, WalletState};

/// Connect-wallet button, or the truncated account with a disconnect action
/// once a session exists. Connect failures surface inline.
#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();

    let on_connect = move |_| {
        if wallet.get_untracked().status == ConnectionStatus::Connecting {
            return;
        }
        wallet.update(|w| {
            w.status = ConnectionStatus::Connecting;
            w.error = None;
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::wallet::connect().await {
                Ok((account, chain_id)) => wallet.update(|w| w.connected(account, chain_id)),
                Err(error) => wallet.update(|w| w.connect_failed(error)),
            }
        });
    };

    let on_disconnect = move |_| wallet.update(WalletState::disconnected);

    let account_label = move || {
        wallet
            .get()
            .account
            .map(|account| crate::wallet::truncate_address(&account))
            .unwrap_or_default()
    };

    view! {
        <div class="connect">
            <Show
                when=move || wallet.get().is_connected()
                fallback=move || {
                    view! {
                        <button
                            class="btn btn--primary connect__button"
                            on:click=on_connect
                            disabled=move || wallet.get().status == ConnectionStatus::Connecting
                        >
                            {move || {
                                if wallet.get().status == ConnectionStatus::Connecting {
                                    "Connecting..."
                                } else {
                                    "Connect Wallet"
                                }
                            }}
                        </button>
                    }
                }
            >
                <span class="connect__account">{account_label}</span>
                <button class="btn connect__disconnect" on:click=on_disconnect>
                    "Disconnect"
                </button>
            </Show>
            <Show when=move || wallet.get().error.is_some()>
                <p class="connect__error" role="alert">
                    {move || wallet.get().error.unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
