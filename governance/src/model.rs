//! Indexer data model shared across the client, harness, and e2e driver.
//!
//! DESIGN
//! ======
//! These types mirror the indexing service's response payloads (camelCase
//! wire names) so serde round-trips stay lossless. Projects transport their
//! goal list as the JSON string stored on-chain; [`Project::from_record`]
//! decodes it into typed goals at the client boundary.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Governance token metadata of a DAO.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaoToken {
    /// Display name, e.g. `"PMTest"`.
    pub name: String,
    /// Ticker symbol, e.g. `"PMT"`.
    pub symbol: String,
}

/// A DAO entity as the indexer returns it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dao {
    /// The DAO's contract address.
    pub id: Address,
    /// Governance token metadata.
    pub token: DaoToken,
}

/// One measurable project goal.
///
/// Field order is significant: it is the serialized order of the goals JSON
/// embedded in the on-chain payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Short goal statement.
    pub goal_title: String,
    /// URL of the board where the goal is tracked.
    pub goal_link: String,
    /// Free-form markdown description.
    pub goal_description: String,
}

/// Wire shape of a project: goals still embedded as a JSON string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// On-chain project identifier.
    #[serde(rename = "projectID")]
    pub project_id: u64,
    /// Address accountable for delivering the project.
    pub manager: Address,
    /// Budget in governance tokens, as the decimal string the indexer carries.
    pub budget: String,
    /// Deadline as Unix seconds.
    pub deadline: i64,
    /// Goal list as the embedded JSON string.
    pub goals: String,
}

/// A project with its goal list decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    /// On-chain project identifier.
    pub project_id: u64,
    /// Address accountable for delivering the project.
    pub manager: Address,
    /// Budget in governance tokens, as a decimal string.
    pub budget: String,
    /// Deadline as Unix seconds.
    pub deadline: i64,
    /// Decoded goal list.
    pub goals: Vec<Goal>,
}

impl Project {
    /// Decode a wire record, parsing the embedded goals JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the goals string is not a JSON array of
    /// goal objects.
    pub fn from_record(record: ProjectRecord) -> Result<Self, serde_json::Error> {
        let goals = serde_json::from_str(&record.goals)?;
        Ok(Self {
            project_id: record.project_id,
            manager: record.manager,
            budget: record.budget,
            deadline: record.deadline,
            goals,
        })
    }
}

/// A governance proposal row for the proposals table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    /// Sequential proposal number within the DAO.
    pub serial: u64,
    /// Human-readable description recorded with the proposal.
    pub description: String,
}
