//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration — reading params, issuing
//! chain/indexer reads, driving the submission flow — and delegates
//! rendering details to `components`.

pub mod dao_create;
pub mod home;
pub mod project_proposal;
pub mod projects;
pub mod proposals;
