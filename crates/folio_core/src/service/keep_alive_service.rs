//! Database keep-alive job.
//!
//! Touches storage with a write and a delete so that idle hosted databases stay
//! warm. The job leaves no rows behind.

use crate::repo::page_repo::{PageId, PageRepository};
use crate::service::portfolio_service::ServiceError;
use log::{error, info};
use serde::Serialize;
use std::time::Instant;

/// Name of the throwaway page row.
pub const KEEP_ALIVE_PAGE_NAME: &str = "cron-temp";

/// Outcome of one keep-alive run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeepAliveReport {
    pub page_id: PageId,
    pub status: &'static str,
    pub duration_ms: u128,
}

/// Inserts a throwaway page and deletes it by id.
pub fn run_keep_alive<R: PageRepository>(repo: &R) -> Result<KeepAliveReport, ServiceError> {
    let started_at = Instant::now();
    let result = touch(repo);
    let duration_ms = started_at.elapsed().as_millis();

    match result {
        Ok(page_id) => {
            info!(
                "event=keep_alive module=service status=ok page_id={page_id} duration_ms={duration_ms}"
            );
            Ok(KeepAliveReport {
                page_id,
                status: "OK",
                duration_ms,
            })
        }
        Err(err) => {
            error!(
                "event=keep_alive module=service status=error duration_ms={duration_ms} error={err}"
            );
            Err(err)
        }
    }
}

fn touch<R: PageRepository>(repo: &R) -> Result<PageId, ServiceError> {
    let page_id = repo.insert_page(KEEP_ALIVE_PAGE_NAME)?;
    if !repo.delete_page(page_id)? {
        return Err(ServiceError::InconsistentState(
            "keep-alive page missing before delete",
        ));
    }
    Ok(page_id)
}
