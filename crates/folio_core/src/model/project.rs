//! Project domain model.
//!
//! # Responsibility
//! - Define the persisted portfolio entry and its insertable draft shape.
//! - Validate drafts before they reach storage.
//!
//! # Invariants
//! - `id` is unique across a collection for the lifetime of a view session.
//! - `title` is non-blank and at most `TITLE_MAX_CHARS` characters.
//! - `tags == None` and `tags == Some(vec![])` both mean "no tags" for
//!   filtering, but are stored and returned unchanged.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned project identifier.
pub type ProjectId = i64;

/// Maximum title length accepted by storage.
pub const TITLE_MAX_CHARS: usize = 255;

/// Canonical portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    /// Ordered labels used for filtering and categorization.
    pub tags: Option<Vec<String>>,
    /// Ordered media references; the first entry is the cover image.
    pub media_urls: Option<Vec<String>>,
    pub is_public: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Unix epoch milliseconds.
    pub updated_at: i64,
}

impl Project {
    /// Returns tags as a slice, treating an absent sequence as empty.
    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Returns media references as a slice, treating an absent sequence as empty.
    pub fn media_list(&self) -> &[String] {
        self.media_urls.as_deref().unwrap_or(&[])
    }

    /// Returns whether `tag` is attached to this project (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list().iter().any(|value| value == tag)
    }
}

/// Insertable project shape. Identity and timestamps are assigned by storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub media_urls: Option<Vec<String>>,
    pub is_public: bool,
}

impl NewProject {
    /// Creates a private draft with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Validates draft invariants before persistence.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        let chars = self.title.chars().count();
        if chars > TITLE_MAX_CHARS {
            return Err(ProjectValidationError::TitleTooLong { chars });
        }
        Ok(())
    }
}

/// Draft validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyTitle,
    TitleTooLong { chars: usize },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "project title cannot be empty"),
            Self::TitleTooLong { chars } => write!(
                f,
                "project title has {chars} characters; maximum is {TITLE_MAX_CHARS}"
            ),
        }
    }
}

impl Error for ProjectValidationError {}
