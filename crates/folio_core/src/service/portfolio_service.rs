//! Portfolio use-case service.
//!
//! # Responsibility
//! - Build a fresh `PortfolioView` from a `ProjectSource`.
//! - Resolve detail projections by project id.

use crate::model::project::ProjectId;
use crate::repo::project_repo::RepoError;
use crate::service::source::ProjectSource;
use crate::view::detail::ProjectDetail;
use crate::view::engine::PortfolioView;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for portfolio use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Requested project does not exist in the loaded collection.
    ProjectNotFound(ProjectId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Storage did not reflect a write that just succeeded.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent storage state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Portfolio facade over one project source.
pub struct PortfolioService<S: ProjectSource> {
    source: S,
}

impl<S: ProjectSource> PortfolioService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads the collection and returns a view in its default state.
    pub fn open_view(&self) -> Result<PortfolioView, ServiceError> {
        let projects = self.source.load_projects()?;
        info!(
            "event=view_open module=service status=ok projects={}",
            projects.len()
        );
        Ok(PortfolioView::new(projects))
    }

    /// Loads the collection and projects one entry for the detail view.
    pub fn project_detail(&self, id: ProjectId) -> Result<ProjectDetail, ServiceError> {
        let mut view = self.open_view()?;
        view.open_project(id)
            .map(ProjectDetail::from_project)
            .ok_or(ServiceError::ProjectNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{PortfolioService, ServiceError};
    use crate::repo::project_repo::RepoError;
    use crate::service::source::StaticProjectSource;
    use std::error::Error;

    #[test]
    fn static_view_starts_unfiltered() {
        let service = PortfolioService::new(StaticProjectSource);
        let view = service.open_view().expect("open view");
        assert_eq!(view.visible_count(), view.projects().len());
        assert!(view.available_tags().iter().any(|tag| tag == "AI"));
    }

    #[test]
    fn project_detail_reports_unknown_ids() {
        let service = PortfolioService::new(StaticProjectSource);
        let detail = service.project_detail(1).expect("first sample exists");
        assert_eq!(detail.title, "Creative Digital Art Collection");

        let err = service.project_detail(404).unwrap_err();
        assert!(matches!(err, ServiceError::ProjectNotFound(404)));
    }

    #[test]
    fn repo_errors_are_wrapped_with_their_source() {
        let err = ServiceError::from(RepoError::InvalidData("bad row".to_string()));
        assert!(matches!(err, ServiceError::Repo(RepoError::InvalidData(_))));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("bad row"));
    }
}
