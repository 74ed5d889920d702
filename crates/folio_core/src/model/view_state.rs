//! Ephemeral view state for the portfolio surface.
//!
//! # Invariants
//! - Defaults are: empty search term, no tag filter, grid layout.
//! - View state is never persisted; a new view always starts from defaults.

use log::warn;
use serde::{Deserialize, Serialize};

/// Display arrangement for the same filtered data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Grid,
    List,
}

impl LayoutMode {
    /// Parses a layout name, falling back to `Grid` for unknown values.
    ///
    /// Unknown values are a caller contract violation; they are logged and
    /// normalized rather than surfaced as errors.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "grid" => Self::Grid,
            "list" => Self::List,
            other => {
                warn!("event=layout_normalize module=view status=fallback value={other:?}");
                Self::default()
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }
}

/// Active tag filter. At most one tag can be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Maps a UI selection to a filter; the empty selection means "all".
    pub fn from_selection(selection: &str) -> Self {
        if selection.is_empty() {
            Self::All
        } else {
            Self::Tag(selection.to_string())
        }
    }

    /// Returns the selected tag, if any.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Tag(tag) => Some(tag.as_str()),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Tag(_))
    }
}

impl From<Option<String>> for TagFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::All, |tag| Self::from_selection(&tag))
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        Self::from_selection(value)
    }
}

/// Search, filter and layout selections driving what is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search_term: String,
    pub tag_filter: TagFilter,
    pub layout: LayoutMode,
}

impl ViewState {
    /// Returns whether any narrowing criterion (search or tag) is active.
    pub fn has_criteria(&self) -> bool {
        !self.search_term.is_empty() || self.tag_filter.is_active()
    }
}
