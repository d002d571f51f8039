use alloy_primitives::address;

use super::*;

// 2026-08-06 12:00:00 UTC
const NOW: i64 = 1_786_017_600;

fn dao() -> Address {
    address!("e237747055b12f4da323bc559ac8d5eb66aac2f7")
}

fn extension() -> Address {
    address!("5FbDB2315678afecb367f032d93F642f64180aa3")
}

fn flow() -> SubmissionFlow {
    SubmissionFlow::new(dao(), 31337, extension())
}

fn valid_form() -> ProjectProposalForm {
    ProjectProposalForm {
        manager: "0xf952a72F39c5Fa22a443200AbE7835128bCb7439".to_owned(),
        budget: "10000".to_owned(),
        deadline: "2222-08-18".to_owned(),
        goal_title: "PM testing".to_owned(),
        goal_description: String::new(),
        goal_link: "https://example.org/board".to_owned(),
    }
}

#[test]
fn happy_path_reaches_ready_to_submit() {
    let mut flow = flow();

    let command = flow.submit(&valid_form(), NOW);
    assert_eq!(
        command,
        Command::ReadManagerBalance {
            manager: address!("f952a72F39c5Fa22a443200AbE7835128bCb7439")
        }
    );
    assert_eq!(flow.state(), FlowState::CheckingManager);
    assert!(flow.is_busy());

    let command = flow.manager_balance(Ok(U256::from(5u8)));
    assert_eq!(
        command,
        Command::ReadExtensionEnabled {
            extension: extension()
        }
    );
    assert_eq!(flow.state(), FlowState::BuildingPayload);

    let command = flow.extension_enabled(Ok(true));
    let Command::OpenDialog(intent) = command else {
        panic!("expected OpenDialog, got {command:?}");
    };
    assert_eq!(flow.state(), FlowState::ReadyToSubmit);
    assert_eq!(intent.contract_address, dao());
    assert_eq!(flow.intent(), Some(&intent));
    assert!(flow.read_notice().is_none());
    assert!(flow.alert().is_none());
}

#[test]
fn validation_failure_returns_to_idle_with_field_errors() {
    let mut flow = flow();
    let mut form = valid_form();
    form.goal_title = String::new();

    assert_eq!(flow.submit(&form, NOW), Command::None);
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(flow.field_error(Field::GoalTitle), Some("Goal title is required."));
    assert!(!flow.is_busy());
}

#[test]
fn zero_manager_balance_rejects_with_member_error() {
    let mut flow = flow();
    flow.submit(&valid_form(), NOW);

    assert_eq!(flow.manager_balance(Ok(U256::ZERO)), Command::None);
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(
        flow.field_error(Field::Manager),
        Some("Manager must be an existing token holder.")
    );
}

#[test]
fn manager_read_error_degrades_to_unverifiable_and_proceeds() {
    // Regression guard: a failed balance read must not hard-block submission.
    let mut flow = flow();
    flow.submit(&valid_form(), NOW);

    let command = flow.manager_balance(Err("rpc unreachable".to_owned()));
    assert_eq!(
        command,
        Command::ReadExtensionEnabled {
            extension: extension()
        }
    );
    assert_eq!(flow.state(), FlowState::BuildingPayload);
    assert_eq!(
        flow.read_notice(),
        Some("Error verifying manager address: rpc unreachable.")
    );

    let command = flow.extension_enabled(Ok(false));
    assert!(matches!(command, Command::OpenDialog(_)));
    assert_eq!(flow.state(), FlowState::ReadyToSubmit);
}

#[test]
fn extension_read_error_aborts_the_attempt() {
    let mut flow = flow();
    flow.submit(&valid_form(), NOW);
    flow.manager_balance(Ok(U256::from(1u8)));

    assert_eq!(
        flow.extension_enabled(Err("rpc unreachable".to_owned())),
        Command::None
    );
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(
        flow.alert(),
        Some("Error reading extension status: rpc unreachable.")
    );
    assert!(flow.intent().is_none());
}

#[test]
fn toggle_reflects_the_fresh_extension_read() {
    for (enabled, expected_toggle) in [(true, 0u8), (false, 1u8)] {
        let mut flow = flow();
        flow.submit(&valid_form(), NOW);
        flow.manager_balance(Ok(U256::from(1u8)));
        let Command::OpenDialog(intent) = flow.extension_enabled(Ok(enabled)) else {
            panic!("expected OpenDialog");
        };
        assert_eq!(
            intent.args[3],
            crate::abi::Value::Array(vec![crate::abi::Value::Uint(U256::from(expected_toggle))])
        );
    }
}

#[test]
fn encoding_error_aborts_and_a_corrected_resubmission_is_fresh() {
    let mut flow = flow();
    let mut form = valid_form();
    form.budget = "1.1234567890123456789".to_owned();

    flow.submit(&form, NOW);
    flow.manager_balance(Ok(U256::from(1u8)));
    assert_eq!(flow.extension_enabled(Ok(true)), Command::None);
    assert_eq!(flow.state(), FlowState::Idle);
    assert_eq!(
        flow.alert(),
        Some("Budget cannot be encoded: amount has more than 18 decimal places.")
    );
    assert!(flow.intent().is_none());

    // Corrected budget: the whole sequence re-runs and produces a fresh intent.
    form.budget = "1.12".to_owned();
    assert!(matches!(
        flow.submit(&form, NOW),
        Command::ReadManagerBalance { .. }
    ));
    assert!(flow.alert().is_none());
    flow.manager_balance(Ok(U256::from(1u8)));
    let Command::OpenDialog(intent) = flow.extension_enabled(Ok(true)) else {
        panic!("expected OpenDialog");
    };
    let payload_arg = &intent.args[4];
    let crate::abi::Value::Array(payloads) = payload_arg else {
        panic!("expected payload array");
    };
    let crate::abi::Value::Bytes(payload) = &payloads[0] else {
        panic!("expected payload bytes");
    };
    assert_eq!(
        crate::abi::decode_uint(&payload[64..]),
        Some(crate::units::parse_token_amount("1.12").unwrap())
    );
}

#[test]
fn submit_is_ignored_while_an_attempt_is_in_flight() {
    let mut flow = flow();
    flow.submit(&valid_form(), NOW);
    assert_eq!(flow.state(), FlowState::CheckingManager);

    assert_eq!(flow.submit(&valid_form(), NOW), Command::None);
    assert_eq!(flow.state(), FlowState::CheckingManager);
}

#[test]
fn stale_read_completions_are_dropped() {
    let mut flow = flow();
    assert_eq!(flow.manager_balance(Ok(U256::from(1u8))), Command::None);
    assert_eq!(flow.extension_enabled(Ok(true)), Command::None);
    assert_eq!(flow.state(), FlowState::Idle);
}

#[test]
fn dialog_close_discards_the_intent_and_allows_resubmission() {
    let mut flow = flow();
    flow.submit(&valid_form(), NOW);
    flow.manager_balance(Ok(U256::from(1u8)));
    flow.extension_enabled(Ok(true));
    assert_eq!(flow.state(), FlowState::ReadyToSubmit);

    // Attempts are serialized while the dialog owns the intent.
    assert_eq!(flow.submit(&valid_form(), NOW), Command::None);

    flow.dialog_closed();
    assert_eq!(flow.state(), FlowState::Closed);
    assert!(flow.intent().is_none());

    assert!(matches!(
        flow.submit(&valid_form(), NOW),
        Command::ReadManagerBalance { .. }
    ));
}
