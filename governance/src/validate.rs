//! Client-side validation of the project proposal form.
//!
//! Validation is syntactic and complete-in-one-pass: every failing field is
//! reported, no partial state is retained, and nothing here touches the
//! chain. Whether the budget fits the on-chain fixed-point representation is
//! deliberately *not* checked here — that is an encoding concern surfaced at
//! payload-build time.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use alloy_primitives::Address;

use crate::datetime;
use crate::model::Goal;

/// Inline error message when the proposed manager holds no tokens.
pub const MANAGER_NOT_MEMBER: &str = "Manager must be an existing token holder.";

/// Form field a validation error is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Manager,
    Budget,
    Deadline,
    GoalTitle,
}

/// A field-level validation failure shown inline next to its field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// The field the message belongs to.
    pub field: Field,
    /// Actionable message shown to the user.
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_owned(),
        }
    }
}

/// Raw form input exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectProposalForm {
    /// Proposed manager address.
    pub manager: String,
    /// Budget in governance tokens, decimal.
    pub budget: String,
    /// Deadline as a `YYYY-MM-DD` date-input value.
    pub deadline: String,
    /// Required goal statement.
    pub goal_title: String,
    /// Optional markdown description.
    pub goal_description: String,
    /// Optional tracking-board URL.
    pub goal_link: String,
}

/// A form that passed client-side validation.
///
/// The budget stays as the raw decimal string; scaling happens when the
/// payload is built against fresh chain state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectProposal {
    /// Parsed manager address.
    pub manager: Address,
    /// Budget as the decimal string the user entered.
    pub budget: String,
    /// Deadline as Unix seconds at UTC midnight.
    pub deadline_secs: i64,
    /// Ordered goal list (currently always one entry).
    pub goals: Vec<Goal>,
}

/// Validate the form against the rules of the proposal flow.
///
/// A deadline exactly equal to `now_secs` is rejected; only strictly future
/// deadlines pass.
///
/// # Errors
///
/// Returns every failing field with its message.
pub fn validate(
    form: &ProjectProposalForm,
    now_secs: i64,
) -> Result<ProjectProposal, Vec<FieldError>> {
    let mut errors = Vec::new();

    let manager = match form.manager.trim().parse::<Address>() {
        Ok(address) => Some(address),
        Err(_) => {
            errors.push(FieldError::new(
                Field::Manager,
                "Manager must be a valid ETH L1/L2 address.",
            ));
            None
        }
    };

    if !is_positive_decimal(&form.budget) {
        errors.push(FieldError::new(
            Field::Budget,
            "Budget must be a positive number.",
        ));
    }

    let deadline_secs = if form.deadline.trim().is_empty() {
        errors.push(FieldError::new(Field::Deadline, "Deadline is required."));
        None
    } else {
        match datetime::parse_form_date(&form.deadline) {
            Ok(date) => {
                let secs = datetime::unix_seconds(date);
                if secs > now_secs {
                    Some(secs)
                } else {
                    errors.push(FieldError::new(
                        Field::Deadline,
                        "Deadline must be in the future.",
                    ));
                    None
                }
            }
            Err(_) => {
                errors.push(FieldError::new(
                    Field::Deadline,
                    "Deadline must be a valid date.",
                ));
                None
            }
        }
    };

    if form.goal_title.trim().is_empty() {
        errors.push(FieldError::new(Field::GoalTitle, "Goal title is required."));
    }

    match (manager, deadline_secs) {
        (Some(manager), Some(deadline_secs)) if errors.is_empty() => Ok(ProjectProposal {
            manager,
            budget: form.budget.trim().to_owned(),
            deadline_secs,
            goals: vec![Goal {
                goal_title: form.goal_title.clone(),
                goal_link: form.goal_link.clone(),
                goal_description: form.goal_description.clone(),
            }],
        }),
        _ => Err(errors),
    }
}

/// True when the input is a plain decimal number with a non-zero digit.
///
/// Representability (decimal places, magnitude) is checked later by the
/// encoder, so `1.1234567890123456789` passes here and fails there.
fn is_positive_decimal(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return false;
    }

    let mut seen_dot = false;
    let mut seen_nonzero = false;
    for c in trimmed.chars() {
        match c {
            '.' if !seen_dot => seen_dot = true,
            '0' => {}
            '1'..='9' => seen_nonzero = true,
            _ => return false,
        }
    }
    seen_nonzero
}
