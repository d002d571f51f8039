//! Transaction submission flow state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flow is a pure struct driven by the page that owns the form: the page
//! calls [`SubmissionFlow::submit`], performs whatever [`Command`] comes
//! back (a forced chain read, opening the dialog), and feeds the completed
//! outcome back in. Suspension between reads is just the caller holding the
//! struct, which keeps every path — including read failures and stale
//! completions — testable without a wallet or a network.
//!
//! States: `Idle → Validating → CheckingManager → BuildingPayload →
//! ReadyToSubmit → Closed`. Nothing is cached across attempts; every
//! submission re-validates and re-reads chain state.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use alloy_primitives::{Address, U256};

use crate::proposal::{self, TransactionIntent};
use crate::validate::{self, Field, FieldError, ProjectProposal, ProjectProposalForm};

/// Lifecycle position of one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    /// Form displayed; no attempt in flight.
    #[default]
    Idle,
    /// Client-side rules running (transient within [`SubmissionFlow::submit`]).
    Validating,
    /// Awaiting the forced manager-balance read.
    CheckingManager,
    /// Awaiting the fresh extension-enabled read, then encoding.
    BuildingPayload,
    /// Intent handed to the submission dialog; signing is external.
    ReadyToSubmit,
    /// Dialog closed (success or cancel); a new attempt may start.
    Closed,
}

/// Side effect the caller must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do; inspect state and errors.
    None,
    /// Issue a forced, cache-bypassing balance read for the manager.
    ReadManagerBalance {
        /// Token holder to check.
        manager: Address,
    },
    /// Issue a fresh extension-enabled read for the DAO.
    ReadExtensionEnabled {
        /// Extension contract whose enablement is checked.
        extension: Address,
    },
    /// Open the submission dialog with the assembled intent.
    OpenDialog(TransactionIntent),
}

/// State machine orchestrating one project-proposal form instance.
#[derive(Clone, Debug)]
pub struct SubmissionFlow {
    dao: Address,
    chain_id: u64,
    extension: Address,
    state: FlowState,
    pending: Option<ProjectProposal>,
    field_errors: Vec<FieldError>,
    read_notice: Option<String>,
    alert: Option<String>,
    intent: Option<TransactionIntent>,
}

impl SubmissionFlow {
    /// Create an idle flow for one DAO on one chain.
    #[must_use]
    pub fn new(dao: Address, chain_id: u64, extension: Address) -> Self {
        Self {
            dao,
            chain_id,
            extension,
            state: FlowState::Idle,
            pending: None,
            field_errors: Vec::new(),
            read_notice: None,
            alert: None,
            intent: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Field-level validation errors from the last attempt.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// First error message for a field, if any.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Read-failure notice (manager check degraded to unverifiable).
    #[must_use]
    pub fn read_notice(&self) -> Option<&str> {
        self.read_notice.as_deref()
    }

    /// Top-level alert (encoding failure or aborted extension read).
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Intent owned by the dialog while `ReadyToSubmit`.
    #[must_use]
    pub fn intent(&self) -> Option<&TransactionIntent> {
        self.intent.as_ref()
    }

    /// True while an attempt is between validation and dialog hand-off.
    ///
    /// The submit control is disabled while busy, serializing attempts per
    /// form instance.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(
            self.state,
            FlowState::CheckingManager | FlowState::BuildingPayload
        )
    }

    /// Start a submission attempt from the raw form.
    ///
    /// Validation failures return the flow to `Idle` with field errors and
    /// retain nothing. Success enters `CheckingManager` and commands the
    /// forced manager-balance read.
    pub fn submit(&mut self, form: &ProjectProposalForm, now_secs: i64) -> Command {
        if self.is_busy() || self.state == FlowState::ReadyToSubmit {
            return Command::None;
        }

        self.reset_attempt();
        self.state = FlowState::Validating;

        match validate::validate(form, now_secs) {
            Ok(pending) => {
                let manager = pending.manager;
                self.pending = Some(pending);
                self.state = FlowState::CheckingManager;
                Command::ReadManagerBalance { manager }
            }
            Err(errors) => {
                self.field_errors = errors;
                self.state = FlowState::Idle;
                Command::None
            }
        }
    }

    /// Feed back the forced manager-balance read.
    ///
    /// A zero balance rejects the manager; a read failure is surfaced as a
    /// notice and the check degrades to unverifiable rather than blocking
    /// the attempt.
    pub fn manager_balance(&mut self, outcome: Result<U256, String>) -> Command {
        if self.state != FlowState::CheckingManager {
            // Stale completion from a cancelled read; drop it.
            return Command::None;
        }

        match outcome {
            Ok(balance) if balance.is_zero() => {
                self.pending = None;
                self.field_errors = vec![FieldError {
                    field: Field::Manager,
                    message: validate::MANAGER_NOT_MEMBER.to_owned(),
                }];
                self.state = FlowState::Idle;
                Command::None
            }
            Ok(_) => self.enter_building(),
            Err(error) => {
                self.read_notice = Some(format!("Error verifying manager address: {error}."));
                self.enter_building()
            }
        }
    }

    /// Feed back the fresh extension-enabled read and build the payload.
    ///
    /// The toggle flag must reflect this read, so a failed read aborts the
    /// attempt instead of guessing.
    pub fn extension_enabled(&mut self, outcome: Result<bool, String>) -> Command {
        if self.state != FlowState::BuildingPayload {
            return Command::None;
        }
        let Some(pending) = self.pending.take() else {
            self.state = FlowState::Idle;
            return Command::None;
        };

        match outcome {
            Err(error) => {
                self.alert = Some(format!("Error reading extension status: {error}."));
                self.state = FlowState::Idle;
                Command::None
            }
            Ok(enabled) => match proposal::build(&pending, enabled) {
                Err(encoding) => {
                    self.alert = Some(format!("Budget cannot be encoded: {encoding}."));
                    self.state = FlowState::Idle;
                    Command::None
                }
                Ok(built) => {
                    let intent =
                        proposal::build_intent(self.dao, self.chain_id, self.extension, &built);
                    self.intent = Some(intent.clone());
                    self.state = FlowState::ReadyToSubmit;
                    Command::OpenDialog(intent)
                }
            },
        }
    }

    /// The dialog closed (success or user cancel); control returns here.
    ///
    /// The intent is discarded — a later attempt re-runs the whole
    /// read-validate-build sequence.
    pub fn dialog_closed(&mut self) {
        self.intent = None;
        self.state = FlowState::Closed;
    }

    fn enter_building(&mut self) -> Command {
        self.state = FlowState::BuildingPayload;
        Command::ReadExtensionEnabled {
            extension: self.extension,
        }
    }

    fn reset_attempt(&mut self) {
        self.pending = None;
        self.field_errors.clear();
        self.read_notice = None;
        self.alert = None;
        self.intent = None;
    }
}
