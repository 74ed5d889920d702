//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/list/clear APIs over the `projects` table.
//! - Own the transactional "clear and repopulate" used by seeding.
//!
//! # Invariants
//! - `tags` and `media_urls` are stored as JSON arrays; SQL `NULL` means absent.
//! - List order is `id ASC`, i.e. insertion order.
//! - `replace_all_projects` deletes and inserts in one immediate transaction.

use crate::db::DbError;
use crate::model::project::{NewProject, Project, ProjectId, ProjectValidationError};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    tags,
    media_urls,
    is_public,
    created_at,
    updated_at
FROM projects";

const PROJECT_INSERT_SQL: &str = "INSERT INTO projects (
    title,
    description,
    tags,
    media_urls,
    is_public
) VALUES (?1, ?2, ?3, ?4, ?5);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project and page persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ProjectValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted project data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ProjectValidationError> for RepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListQuery {
    /// Optional exact, case-sensitive tag match.
    pub tag: Option<String>,
    /// Restrict to rows with `is_public = 1`.
    pub public_only: bool,
}

/// Repository interface for project persistence.
pub trait ProjectRepository {
    fn create_project(&mut self, draft: &NewProject) -> RepoResult<ProjectId>;
    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>>;
    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>>;
    /// Returns distinct tags across all projects, sorted.
    fn list_tags(&self) -> RepoResult<Vec<String>>;
    /// Removes every project; returns the number of rows removed.
    fn delete_all_projects(&mut self) -> RepoResult<usize>;
    /// Atomically replaces the whole table content with `drafts`, in order.
    ///
    /// Returns `(removed, inserted_ids)`.
    fn replace_all_projects(
        &mut self,
        drafts: &[NewProject],
    ) -> RepoResult<(usize, Vec<ProjectId>)>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "projects")?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&mut self, draft: &NewProject) -> RepoResult<ProjectId> {
        draft.validate()?;
        insert_project(self.conn, draft)
    }

    fn get_project(&self, id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }
        Ok(None)
    }

    fn list_projects(&self, query: &ProjectListQuery) -> RepoResult<Vec<Project>> {
        let mut sql = format!("{PROJECT_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if query.public_only {
            sql.push_str(" AND is_public = 1");
        }

        if let Some(tag) = query.tag.as_ref() {
            sql.push_str(
                " AND EXISTS (
                    SELECT 1
                    FROM json_each(projects.tags) je
                    WHERE je.value = ?
                )",
            );
            bind_values.push(Value::Text(tag.clone()));
        }

        sql.push_str(" ORDER BY id ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }

    fn list_tags(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT DISTINCT je.value AS tag
             FROM projects, json_each(projects.tags) je
             WHERE je.type = 'text'
             ORDER BY tag ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut tags = Vec::new();
        while let Some(row) = rows.next()? {
            tags.push(row.get("tag")?);
        }
        Ok(tags)
    }

    fn delete_all_projects(&mut self) -> RepoResult<usize> {
        Ok(self.conn.execute("DELETE FROM projects;", [])?)
    }

    fn replace_all_projects(
        &mut self,
        drafts: &[NewProject],
    ) -> RepoResult<(usize, Vec<ProjectId>)> {
        for draft in drafts {
            draft.validate()?;
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed = tx.execute("DELETE FROM projects;", [])?;
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(insert_project(&tx, draft)?);
        }
        tx.commit()?;
        Ok((removed, ids))
    }
}

fn insert_project(conn: &Connection, draft: &NewProject) -> RepoResult<ProjectId> {
    conn.execute(
        PROJECT_INSERT_SQL,
        params![
            draft.title.as_str(),
            draft.description.as_deref(),
            encode_list(draft.tags.as_deref())?,
            encode_list(draft.media_urls.as_deref())?,
            bool_to_int(draft.is_public),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    let id: ProjectId = row.get("id")?;
    let is_public = match row.get::<_, i64>("is_public")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_public value `{other}` for project {id}"
            )));
        }
    };

    Ok(Project {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        tags: decode_list(id, "tags", row.get("tags")?)?,
        media_urls: decode_list(id, "media_urls", row.get("media_urls")?)?,
        is_public,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn encode_list(values: Option<&[String]>) -> RepoResult<Option<String>> {
    values
        .map(serde_json::to_string)
        .transpose()
        .map_err(|err| RepoError::InvalidData(format!("failed to encode list: {err}")))
}

fn decode_list(
    id: ProjectId,
    column: &str,
    raw: Option<String>,
) -> RepoResult<Option<Vec<String>>> {
    raw.map(|text| {
        serde_json::from_str::<Vec<String>>(&text).map_err(|err| {
            RepoError::InvalidData(format!(
                "invalid json in projects.{column} for project {id}: {err}"
            ))
        })
    })
    .transpose()
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}

pub(crate) fn ensure_table_ready(conn: &Connection, table: &str) -> RepoResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    if exists == 1 {
        Ok(())
    } else {
        Err(RepoError::InvalidData(format!(
            "required table `{table}` is missing; run migrations first"
        )))
    }
}
