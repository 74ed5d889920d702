//! Card summaries for grid and list layouts.

use crate::model::project::{Project, ProjectId};
use crate::model::view_state::LayoutMode;
use chrono::DateTime;
use serde::Serialize;

/// Cover image used when a project has no media.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-project.jpg";

const GRID_BADGE_LIMIT: usize = 2;
const LIST_BADGE_LIMIT: usize = 3;

/// Compact projection rendered once per visible project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub main_image: String,
    /// Month and year, e.g. `Jan 2024`. Empty when the timestamp is invalid.
    pub date_label: String,
    pub badges: Vec<String>,
    /// Number of tags not shown as badges.
    pub overflow: usize,
    pub layout: LayoutMode,
}

impl ProjectCard {
    pub fn from_project(project: &Project, layout: LayoutMode) -> Self {
        let limit = match layout {
            LayoutMode::Grid => GRID_BADGE_LIMIT,
            LayoutMode::List => LIST_BADGE_LIMIT,
        };
        let tags = project.tag_list();
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            main_image: main_image(project).to_string(),
            date_label: format_epoch_ms(project.created_at, "%b %Y"),
            badges: tags.iter().take(limit).cloned().collect(),
            overflow: tags.len().saturating_sub(limit),
            layout,
        }
    }
}

/// Returns the first media reference or the placeholder image.
pub fn main_image(project: &Project) -> &str {
    project
        .media_list()
        .first()
        .map_or(PLACEHOLDER_IMAGE, String::as_str)
}

/// Formats epoch milliseconds in UTC, returning an empty string when out of range.
pub(crate) fn format_epoch_ms(epoch_ms: i64, pattern: &str) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|value| value.format(pattern).to_string())
        .unwrap_or_default()
}
