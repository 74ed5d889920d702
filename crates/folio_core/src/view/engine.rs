//! Project filter and view-state engine.
//!
//! # Responsibility
//! - Own search term, tag filter and layout mode for one portfolio surface.
//! - Recompute the visible subset on every state or snapshot change.
//! - Discover the distinct tag set offered as filter choices.
//!
//! # Invariants
//! - `compute_visible` output is an order-preserving subsequence of its input.
//! - The engine receives its collection as an argument and never loads data.
//! - Detail selection is independent of filtering.

use crate::model::project::{Project, ProjectId};
use crate::model::view_state::{LayoutMode, TagFilter, ViewState};
use log::debug;
use std::collections::HashSet;

const EMPTY_TITLE: &str = "No projects found";
const EMPTY_HINT_FILTERED: &str = "Try adjusting your search or filter criteria";
const EMPTY_HINT_UNFILTERED: &str = "Add some projects to get started";

/// Message shown when the filtered view has nothing to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Returns whether `project` satisfies both the search and tag criteria.
fn matches(project: &Project, state: &ViewState) -> bool {
    matches_search(project, &state.search_term) && matches_tag(project, &state.tag_filter)
}

fn matches_search(project: &Project, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    project.title.to_lowercase().contains(&needle)
        || project
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}

fn matches_tag(project: &Project, filter: &TagFilter) -> bool {
    filter.tag().map_or(true, |tag| project.has_tag(tag))
}

/// Filters `projects` by `state`, preserving collection order.
pub fn compute_visible<'a>(projects: &'a [Project], state: &ViewState) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| matches(project, state))
        .collect()
}

/// Returns every distinct tag in `projects`, each once, in first-seen order.
pub fn discover_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();
    for tag in projects.iter().flat_map(Project::tag_list) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Stateful portfolio surface over one collection snapshot.
#[derive(Debug, Clone, Default)]
pub struct PortfolioView {
    projects: Vec<Project>,
    state: ViewState,
    visible: Vec<usize>,
    selected: Option<ProjectId>,
}

impl PortfolioView {
    /// Creates a view with default state over `projects`.
    pub fn new(projects: Vec<Project>) -> Self {
        let mut view = Self {
            projects,
            ..Self::default()
        };
        view.recompute();
        view
    }

    /// Installs a new collection snapshot; view state is kept.
    pub fn replace_projects(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        if let Some(id) = self.selected {
            if !self.projects.iter().any(|project| project.id == id) {
                self.selected = None;
            }
        }
        self.recompute();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.state.search_term = term.into();
        self.recompute();
    }

    /// Replaces the tag filter. Unknown tags are accepted and match nothing.
    pub fn set_tag_filter(&mut self, filter: impl Into<TagFilter>) {
        self.state.tag_filter = filter.into();
        self.recompute();
    }

    /// Clears the tag filter.
    pub fn clear_tag_filter(&mut self) {
        self.set_tag_filter(TagFilter::All);
    }

    pub fn set_layout_mode(&mut self, layout: LayoutMode) {
        self.state.layout = layout;
    }

    /// Sets layout from an untyped value, normalizing unknown values to grid.
    pub fn set_layout_mode_str(&mut self, value: &str) {
        self.set_layout_mode(LayoutMode::parse_or_default(value));
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn layout(&self) -> LayoutMode {
        self.state.layout
    }

    /// Full collection snapshot, unfiltered.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching the current state, in collection order.
    pub fn visible(&self) -> Vec<&Project> {
        self.visible
            .iter()
            .filter_map(|index| self.projects.get(*index))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Filter choices derived from the full collection.
    pub fn available_tags(&self) -> Vec<String> {
        discover_tags(&self.projects)
    }

    /// Returns the empty-state message when nothing is visible.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible.is_empty() {
            return None;
        }
        let hint = if self.state.has_criteria() {
            EMPTY_HINT_FILTERED
        } else {
            EMPTY_HINT_UNFILTERED
        };
        Some(EmptyState {
            title: EMPTY_TITLE,
            hint,
        })
    }

    /// Selects a project for detail display. Returns `None` for unknown ids.
    pub fn open_project(&mut self, id: ProjectId) -> Option<&Project> {
        let found = self.projects.iter().find(|project| project.id == id)?;
        self.selected = Some(found.id);
        Some(found)
    }

    pub fn close_project(&mut self) {
        self.selected = None;
    }

    pub fn selected_project(&self) -> Option<&Project> {
        let id = self.selected?;
        self.projects.iter().find(|project| project.id == id)
    }

    fn recompute(&mut self) {
        let state = &self.state;
        self.visible = self
            .projects
            .iter()
            .enumerate()
            .filter(|(_, project)| matches(project, state))
            .map(|(index, _)| index)
            .collect();
        debug!(
            "event=view_recompute module=view status=ok total={} visible={} search_len={} tag_filter={}",
            self.projects.len(),
            self.visible.len(),
            state.search_term.chars().count(),
            state.tag_filter.is_active()
        );
    }
}
