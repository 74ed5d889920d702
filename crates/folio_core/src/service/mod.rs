//! Portfolio use-case services.
//!
//! # Responsibility
//! - Load project collections from a configured source into a view.
//! - Run the maintenance jobs (seeding, keep-alive) against storage.
//!
//! # Invariants
//! - The view engine only ever receives collections from this layer; it never
//!   reaches storage itself.

pub mod keep_alive_service;
pub mod portfolio_service;
pub mod seed_service;
pub mod source;
