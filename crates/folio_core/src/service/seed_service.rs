//! Idempotent seeding of the sample catalog.
//!
//! # Invariants
//! - Seeding clears and repopulates in one transaction; a failure leaves the
//!   previous rows untouched.
//! - Running the seed any number of times leaves exactly one catalog copy.

use crate::catalog::sample_drafts;
use crate::repo::project_repo::ProjectRepository;
use crate::service::portfolio_service::ServiceError;
use log::{error, info};
use serde::Serialize;
use std::time::Instant;

/// Outcome of one seed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub removed: usize,
    pub inserted: usize,
}

/// Replaces every stored project with the sample catalog.
pub fn seed_projects<R: ProjectRepository>(repo: &mut R) -> Result<SeedReport, ServiceError> {
    let started_at = Instant::now();
    info!("event=seed module=service status=start");

    let drafts = sample_drafts();
    match repo.replace_all_projects(&drafts) {
        Ok((removed, ids)) => {
            let report = SeedReport {
                removed,
                inserted: ids.len(),
            };
            info!(
                "event=seed module=service status=ok removed={} inserted={} duration_ms={}",
                report.removed,
                report.inserted,
                started_at.elapsed().as_millis()
            );
            Ok(report)
        }
        Err(err) => {
            error!(
                "event=seed module=service status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err.into())
        }
    }
}
