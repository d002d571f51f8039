//! Wallet-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One session per app instance, provided via context. Many components read
//! it concurrently; only the connect/disconnect handlers mutate it.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use governance::Address;

/// Wallet connection lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No provider session; the connect button is showing.
    #[default]
    Disconnected,
    /// Provider approval prompt is open.
    Connecting,
    /// Account and chain are available.
    Connected,
}

/// The single wallet/account/network context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    /// Connection lifecycle position.
    pub status: ConnectionStatus,
    /// Connected account, when any.
    pub account: Option<Address>,
    /// Chain id reported by the provider, when connected.
    pub chain_id: Option<u64>,
    /// Last connect error, surfaced inline next to the button.
    pub error: Option<String>,
}

impl WalletState {
    /// True once an account is available.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected && self.account.is_some()
    }

    /// Apply a successful connect result.
    pub fn connected(&mut self, account: Address, chain_id: u64) {
        self.status = ConnectionStatus::Connected;
        self.account = Some(account);
        self.chain_id = Some(chain_id);
        self.error = None;
    }

    /// Apply a failed connect attempt.
    pub fn connect_failed(&mut self, error: String) {
        self.status = ConnectionStatus::Disconnected;
        self.account = None;
        self.chain_id = None;
        self.error = Some(error);
    }

    /// Drop the session.
    pub fn disconnected(&mut self) {
        *self = Self::default();
    }
}
