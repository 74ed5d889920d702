//! Project collection sources.
//!
//! # Invariants
//! - Every source returns the full collection in a stable order.
//! - Live and static sources share the same project shape.

use crate::catalog::sample_projects;
use crate::model::project::Project;
use crate::repo::project_repo::{
    ProjectListQuery, ProjectRepository, RepoResult, SqliteProjectRepository,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Supplies the full project collection for one render pass.
pub trait ProjectSource {
    fn load_projects(&self) -> RepoResult<Vec<Project>>;
}

impl ProjectSource for SqliteProjectRepository<'_> {
    fn load_projects(&self) -> RepoResult<Vec<Project>> {
        self.list_projects(&ProjectListQuery::default())
    }
}

/// In-memory source backed by the built-in sample catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticProjectSource;

impl ProjectSource for StaticProjectSource {
    fn load_projects(&self) -> RepoResult<Vec<Project>> {
        Ok(sample_projects())
    }
}

/// Which source backs the portfolio surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    #[default]
    Live,
    Static,
}

impl DataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Static => "static",
        }
    }
}

impl Display for DataSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "static" => Ok(Self::Static),
            other => Err(format!(
                "unsupported data source `{other}`; expected live|static"
            )),
        }
    }
}
