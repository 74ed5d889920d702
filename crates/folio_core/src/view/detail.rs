//! Detail projection for a single selected project.

use crate::model::project::{Project, ProjectId};
use crate::view::card::{format_epoch_ms, main_image};
use serde::Serialize;

/// Payload handed to a platform share action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    /// Description text, or empty when the project has none.
    pub text: String,
}

/// Full projection for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub main_image: String,
    /// Long date, e.g. `January 5, 2024`.
    pub created_label: String,
    pub tags: Vec<String>,
    pub tag_count: usize,
    /// Media after the cover image.
    pub gallery: Vec<String>,
    pub is_public: bool,
    pub share: SharePayload,
}

impl ProjectDetail {
    pub fn from_project(project: &Project) -> Self {
        let tags = project.tag_list().to_vec();
        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            main_image: main_image(project).to_string(),
            created_label: format_epoch_ms(project.created_at, "%B %-d, %Y"),
            tag_count: tags.len(),
            tags,
            gallery: project.media_list().iter().skip(1).cloned().collect(),
            is_public: project.is_public,
            share: SharePayload {
                title: project.title.clone(),
                text: project.description.clone().unwrap_or_default(),
            },
        }
    }
}
