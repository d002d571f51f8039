//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render governance view-models and raise callbacks; route-level
//! orchestration and chain access stay in `pages`.

pub mod connect_button;
pub mod dao_card;
pub mod project_card;
pub mod submit_dialog;
