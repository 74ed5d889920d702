//! Core domain logic for the Folio portfolio showcase.
//! This crate owns the project model, the filter/view-state engine, storage
//! and the maintenance jobs that operate on it.

pub mod catalog;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use config::{Config, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::project::{NewProject, Project, ProjectId, ProjectValidationError};
pub use model::view_state::{LayoutMode, TagFilter, ViewState};
pub use repo::page_repo::{PageId, PageRepository, SqlitePageRepository};
pub use repo::project_repo::{
    ProjectListQuery, ProjectRepository, RepoError, RepoResult, SqliteProjectRepository,
};
pub use service::keep_alive_service::{run_keep_alive, KeepAliveReport, KEEP_ALIVE_PAGE_NAME};
pub use service::portfolio_service::{PortfolioService, ServiceError};
pub use service::seed_service::{seed_projects, SeedReport};
pub use service::source::{DataSource, ProjectSource, StaticProjectSource};
pub use view::card::{ProjectCard, PLACEHOLDER_IMAGE};
pub use view::detail::{ProjectDetail, SharePayload};
pub use view::engine::{compute_visible, discover_tags, EmptyState, PortfolioView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
