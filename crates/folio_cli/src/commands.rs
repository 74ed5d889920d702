//! Subcommand handlers.
//!
//! Handlers write through a caller-supplied writer so a closed stdout (for
//! example `folio list | head`) ends the command instead of panicking.

use folio_core::db::open_db;
use folio_core::{
    run_keep_alive, seed_projects, Config, DataSource, LayoutMode, PortfolioService,
    PortfolioView, ProjectCard, ProjectDetail, SqlitePageRepository, SqliteProjectRepository,
    StaticProjectSource, TagFilter,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{ErrorKind, Write};

pub type CliResult<T> = Result<T, CliError>;

/// Command failure as seen by `main`.
#[derive(Debug)]
pub enum CliError {
    /// Reader side of stdout went away; not a failure.
    OutputClosed,
    Failed(String),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutputClosed => write!(f, "output closed"),
            Self::Failed(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CliError {}

impl From<String> for CliError {
    fn from(value: String) -> Self {
        Self::Failed(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        if value.kind() == ErrorKind::BrokenPipe {
            Self::OutputClosed
        } else {
            Self::Failed(format!("failed to write output: {value}"))
        }
    }
}

fn describe(err: impl Error) -> String {
    err.to_string()
}

fn open_view(config: &Config) -> CliResult<PortfolioView> {
    info!(
        "event=cli_open_view module=cli status=start source={}",
        config.data_source
    );
    let view = match config.data_source {
        DataSource::Static => PortfolioService::new(StaticProjectSource)
            .open_view()
            .map_err(describe)?,
        DataSource::Live => {
            let mut conn = open_db(&config.db_path).map_err(describe)?;
            let repo = SqliteProjectRepository::try_new(&mut conn).map_err(describe)?;
            let service = PortfolioService::new(repo);
            service.open_view().map_err(describe)?
        }
    };
    Ok(view)
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(describe)?;
    writeln!(out, "{text}")?;
    Ok(())
}

pub fn list(
    out: &mut impl Write,
    config: &Config,
    search: &str,
    tag: Option<&str>,
    layout: &str,
    json: bool,
) -> CliResult<()> {
    let mut view = open_view(config)?;
    view.set_search_term(search);
    view.set_tag_filter(tag.map_or(TagFilter::All, TagFilter::from_selection));
    view.set_layout_mode_str(layout);
    write_view(out, &view, json)
}

fn write_view(out: &mut impl Write, view: &PortfolioView, json: bool) -> CliResult<()> {
    let layout = view.layout();
    let cards: Vec<ProjectCard> = view
        .visible()
        .into_iter()
        .map(|project| ProjectCard::from_project(project, layout))
        .collect();

    if json {
        return write_json(out, &cards);
    }

    if let Some(empty) = view.empty_state() {
        writeln!(out, "{}", empty.title)?;
        writeln!(out, "{}", empty.hint)?;
        return Ok(());
    }

    for card in &cards {
        write_card(out, card)?;
    }
    Ok(())
}

fn write_card(out: &mut impl Write, card: &ProjectCard) -> CliResult<()> {
    let mut badges = card.badges.join(", ");
    if card.overflow > 0 {
        badges.push_str(&format!(" +{}", card.overflow));
    }
    match card.layout {
        LayoutMode::Grid => {
            writeln!(out, "[{}] {} ({})", card.id, card.title, card.date_label)?;
            if !badges.is_empty() {
                writeln!(out, "    {badges}")?;
            }
        }
        LayoutMode::List => {
            let description = card.description.as_deref().unwrap_or("");
            writeln!(
                out,
                "{:>4}  {:<40}  {:<8}  {}  {}",
                card.id, card.title, card.date_label, badges, description
            )?;
        }
    }
    Ok(())
}

pub fn tags(out: &mut impl Write, config: &Config) -> CliResult<()> {
    let view = open_view(config)?;
    for tag in view.available_tags() {
        writeln!(out, "{tag}")?;
    }
    Ok(())
}

pub fn show(out: &mut impl Write, config: &Config, id: i64, json: bool) -> CliResult<()> {
    let mut view = open_view(config)?;
    let detail = view
        .open_project(id)
        .map(ProjectDetail::from_project)
        .ok_or_else(|| CliError::Failed(format!("project not found: {id}")))?;

    if json {
        return write_json(out, &detail);
    }
    write_detail(out, &detail)
}

fn write_detail(out: &mut impl Write, detail: &ProjectDetail) -> CliResult<()> {
    writeln!(out, "{}", detail.title)?;
    writeln!(out, "Created {}", detail.created_label)?;
    if let Some(description) = &detail.description {
        writeln!(out)?;
        writeln!(out, "{description}")?;
    }
    if detail.tag_count > 0 {
        writeln!(out)?;
        writeln!(out, "Tags ({}): {}", detail.tag_count, detail.tags.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "Cover: {}", detail.main_image)?;
    for url in &detail.gallery {
        writeln!(out, "Gallery: {url}")?;
    }
    Ok(())
}

pub fn seed(out: &mut impl Write, config: &Config) -> CliResult<()> {
    let mut conn = open_db(&config.db_path).map_err(describe)?;
    let mut repo = SqliteProjectRepository::try_new(&mut conn).map_err(describe)?;
    let report = seed_projects(&mut repo).map_err(describe)?;
    writeln!(
        out,
        "Projects seeded: removed={} inserted={}",
        report.removed, report.inserted
    )?;
    Ok(())
}

pub fn keep_alive(out: &mut impl Write, config: &Config) -> CliResult<()> {
    let conn = open_db(&config.db_path).map_err(describe)?;
    let repo = SqlitePageRepository::try_new(&conn).map_err(describe)?;
    let report = run_keep_alive(&repo).map_err(describe)?;
    writeln!(out, "{}", report.status)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_detail, write_view, CliError};
    use folio_core::catalog::sample_projects;
    use folio_core::{LayoutMode, PortfolioView, ProjectDetail};
    use std::io::{self, ErrorKind, Write};

    /// Writer whose reader has gone away after `budget` bytes.
    struct ClosedAfter {
        budget: usize,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.budget == 0 {
                return Err(io::Error::from(ErrorKind::BrokenPipe));
            }
            let written = buf.len().min(self.budget);
            self.budget -= written;
            Ok(written)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_pipe_maps_to_closed_output() {
        let mut view = PortfolioView::new(sample_projects());
        view.set_layout_mode(LayoutMode::List);

        let err = write_view(&mut ClosedAfter { budget: 16 }, &view, false).unwrap_err();
        assert!(matches!(err, CliError::OutputClosed));
    }

    #[test]
    fn other_write_errors_stay_failures() {
        let err = CliError::from(io::Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, CliError::Failed(_)));
    }

    #[test]
    fn view_and_detail_render_into_a_buffer() {
        let view = PortfolioView::new(sample_projects());
        let mut buffer = Vec::new();
        write_view(&mut buffer, &view, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("[1] Creative Digital Art Collection (Jan 2025)"));

        let mut buffer = Vec::new();
        let detail = ProjectDetail::from_project(&view.projects()[0]);
        write_detail(&mut buffer, &detail).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Created January 1, 2025"));
        assert!(text.contains("Gallery: "));
    }

    #[test]
    fn empty_view_writes_empty_state() {
        let view = PortfolioView::new(Vec::new());
        let mut buffer = Vec::new();
        write_view(&mut buffer, &view, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("No projects found\nAdd some projects to get started"));
    }
}
