//! Repository layer abstractions and SQLite implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for projects and pages.
//! - Isolate SQL details from service orchestration.
//!
//! # Invariants
//! - Writes validate drafts before touching storage.
//! - Reads reject corrupt rows with `RepoError::InvalidData`.

pub mod page_repo;
pub mod project_repo;
