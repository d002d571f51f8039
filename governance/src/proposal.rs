//! Proposal payload builder and transaction intent assembly.
//!
//! DESIGN
//! ======
//! Everything here is deterministic over its inputs. The extension-enabled
//! flag is a parameter, never cached state: the submission flow reads it
//! fresh on every attempt and passes the result in, so the toggle always
//! reflects the chain state observed during that attempt.

#[cfg(test)]
#[path = "proposal_test.rs"]
mod proposal_test;

use alloy_primitives::{Address, U256};

use crate::abi::{self, Value};
use crate::datetime;
use crate::units::{self, EncodingError};
use crate::validate::ProjectProposal;

/// Proposal kind that targets an extension contract.
pub const PROPOSAL_TYPE_EXTENSION: u8 = 9;

/// ABI signature of the governance propose entrypoint.
pub const PROPOSE_SIGNATURE: &str = "propose(uint8,string,address[],uint256[],bytes[])";

/// An assembled transaction, owned by the submission dialog once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionIntent {
    /// Contract receiving the call (the DAO).
    pub contract_address: Address,
    /// Chain the call must be submitted on.
    pub chain_id: u64,
    /// Function name, for display.
    pub function_name: String,
    /// Full ABI signature used to derive the selector.
    pub signature: String,
    /// Ordered call arguments.
    pub args: Vec<Value>,
}

impl TransactionIntent {
    /// Deterministic calldata for this intent.
    #[must_use]
    pub fn calldata(&self) -> Vec<u8> {
        abi::encode_call(&self.signature, &self.args)
    }
}

/// Output of the payload builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltProposal {
    /// ABI-encoded `(uint256, address, uint256, uint256, string)` tuple.
    pub payload: Vec<u8>,
    /// 1 when the extension must be enabled as part of this proposal, else 0.
    pub toggle: u8,
    /// Human-readable description recorded with the proposal on-chain.
    pub description: String,
}

/// Build the extension payload and description for a validated proposal.
///
/// `extension_enabled` must be the extension-enabled flag read from the
/// chain during this submission attempt.
///
/// # Errors
///
/// Returns an [`EncodingError`] when the budget cannot be scaled to the
/// token's fixed-point representation or the deadline falls outside the
/// encodable range.
pub fn build(
    proposal: &ProjectProposal,
    extension_enabled: bool,
) -> Result<BuiltProposal, EncodingError> {
    let budget_wei = units::parse_token_amount(&proposal.budget)?;
    let deadline =
        u64::try_from(proposal.deadline_secs).map_err(|_| EncodingError::Overflow)?;
    let goals_json = goals_json(proposal);

    let payload = abi::encode(&[
        Value::Uint(U256::ZERO),
        Value::Address(proposal.manager),
        Value::Uint(budget_wei),
        Value::Uint(U256::from(deadline)),
        Value::String(goals_json),
    ]);

    Ok(BuiltProposal {
        payload,
        toggle: u8::from(!extension_enabled),
        description: describe(proposal),
    })
}

/// Assemble the propose-call intent from a built proposal.
#[must_use]
pub fn build_intent(
    dao: Address,
    chain_id: u64,
    extension: Address,
    built: &BuiltProposal,
) -> TransactionIntent {
    TransactionIntent {
        contract_address: dao,
        chain_id,
        function_name: "propose".to_owned(),
        signature: PROPOSE_SIGNATURE.to_owned(),
        args: vec![
            Value::Uint(U256::from(PROPOSAL_TYPE_EXTENSION)),
            Value::String(built.description.clone()),
            Value::Array(vec![Value::Address(extension)]),
            Value::Array(vec![Value::Uint(U256::from(built.toggle))]),
            Value::Array(vec![Value::Bytes(built.payload.clone())]),
        ],
    }
}

/// Build the multi-line proposal description.
///
/// Line order is fixed and significant: this string becomes the on-chain
/// proposal's display text.
#[must_use]
pub fn describe(proposal: &ProjectProposal) -> String {
    let mut description = "New Project Proposal".to_owned();
    for goal in &proposal.goals {
        description = [
            description,
            format!("Goal: {}", goal.goal_title),
            format!("Goal Tracking Link: {}", goal.goal_link),
        ]
        .join(".\n");
    }
    [
        description,
        format!("Manager: {}", proposal.manager),
        format!("Budget: {}", proposal.budget),
        format!(
            "Deadline: {}",
            datetime::format_utc(proposal.deadline_secs).unwrap_or_default()
        ),
    ]
    .join(".\n")
}

fn goals_json(proposal: &ProjectProposal) -> String {
    // Serializing plain strings cannot fail.
    serde_json::to_string(&proposal.goals).unwrap_or_else(|_| "[]".to_owned())
}
