use governance::Address;

use super::*;

#[test]
fn default_state_is_disconnected() {
    let state = WalletState::default();
    assert_eq!(state.status, ConnectionStatus::Disconnected);
    assert!(!state.is_connected());
    assert!(state.account.is_none());
}

#[test]
fn connected_sets_account_chain_and_clears_errors() {
    let mut state = WalletState {
        error: Some("user rejected request".to_owned()),
        ..WalletState::default()
    };
    state.connected(Address::ZERO, 31337);

    assert!(state.is_connected());
    assert_eq!(state.chain_id, Some(31337));
    assert!(state.error.is_none());
}

#[test]
fn connect_failure_keeps_session_down_and_surfaces_the_error() {
    let mut state = WalletState::default();
    state.status = ConnectionStatus::Connecting;
    state.connect_failed("user rejected request".to_owned());

    assert!(!state.is_connected());
    assert_eq!(state.error.as_deref(), Some("user rejected request"));
}

#[test]
fn disconnect_resets_everything() {
    let mut state = WalletState::default();
    state.connected(Address::ZERO, 31337);
    state.disconnected();
    assert_eq!(state, WalletState::default());
}
