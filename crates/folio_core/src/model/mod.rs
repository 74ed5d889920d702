//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the canonical project record shared by every data source.
//! - Define the ephemeral view state that drives filtering and layout.
//!
//! # Invariants
//! - Every project is identified by a stable, storage-assigned `ProjectId`.
//! - Optional fields mean "absent"; they never carry a second meaning.

pub mod project;
pub mod view_state;
