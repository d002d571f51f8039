//! View-models for rendered governance entities.
//!
//! DESIGN
//! ======
//! Pages render strings, not domain types; building those strings here keeps
//! the rendered output testable without a browser and identical between the
//! client and the e2e driver's assertions.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use alloy_primitives::Address;

use crate::datetime;
use crate::model::Project;

/// Status chip shown on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    /// Deadline still ahead, viewed by a non-manager.
    Active,
    /// Deadline passed.
    Expired,
}

impl ProjectStatus {
    /// Chip label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
        }
    }
}

/// One goal row on a project card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalLine {
    /// Goal headline.
    pub title: String,
    /// Tracking-board URL (empty when the goal has none).
    pub link: String,
}

/// Everything a project card renders, as final strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardView {
    /// `#112`-style identifier line.
    pub id_label: String,
    /// Goal rows in on-chain order.
    pub goals: Vec<GoalLine>,
    /// `Budget: 10000`
    pub budget_label: String,
    /// `Deadline: Sun, 18 Aug 2222 00:00:00 GMT`
    pub deadline_label: String,
    /// `Manager Address: 0x…` (checksummed)
    pub manager_label: String,
    /// Status chip; owned, unexpired projects show none.
    pub status: Option<ProjectStatus>,
    /// Whether the viewer may tribute to this project.
    pub tribute_visible: bool,
}

/// Build the card view for a project as seen by `viewer` at `now_secs`.
///
/// The Tribute action is reserved for the project's manager and hidden once
/// the deadline has passed.
#[must_use]
pub fn project_card(
    project: &Project,
    viewer: Option<Address>,
    now_secs: i64,
) -> ProjectCardView {
    let expired = project.deadline < now_secs;
    let owned = viewer == Some(project.manager);

    let status = if expired {
        Some(ProjectStatus::Expired)
    } else if owned {
        None
    } else {
        Some(ProjectStatus::Active)
    };

    ProjectCardView {
        id_label: format!("#{}", project.project_id),
        goals: project
            .goals
            .iter()
            .map(|goal| GoalLine {
                title: goal.goal_title.clone(),
                link: goal.goal_link.clone(),
            })
            .collect(),
        budget_label: format!("Budget: {}", project.budget),
        deadline_label: format!(
            "Deadline: {}",
            datetime::format_utc(project.deadline).unwrap_or_default()
        ),
        manager_label: format!("Manager Address: {}", project.manager),
        status,
        tribute_visible: owned && !expired,
    }
}
