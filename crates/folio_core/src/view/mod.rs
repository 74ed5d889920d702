//! Portfolio view layer.
//!
//! # Responsibility
//! - Derive the visible project list from a collection snapshot and view state.
//! - Shape card and detail projections consumed by a renderer.
//!
//! # Invariants
//! - Nothing in this module performs I/O.
//! - Filtering never reorders the input collection.

pub mod card;
pub mod detail;
pub mod engine;
