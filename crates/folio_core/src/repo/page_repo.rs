//! Page repository used by the keep-alive job.
//!
//! # Invariants
//! - Page rows are throwaway; no domain logic reads them.

use crate::repo::project_repo::{ensure_table_ready, RepoResult};
use rusqlite::Connection;

/// Storage-assigned page identifier.
pub type PageId = i64;

/// Repository interface for throwaway page rows.
pub trait PageRepository {
    fn insert_page(&self, name: &str) -> RepoResult<PageId>;
    /// Deletes one page; returns whether a row was removed.
    fn delete_page(&self, id: PageId) -> RepoResult<bool>;
    fn count_pages(&self) -> RepoResult<u64>;
}

/// SQLite-backed page repository.
pub struct SqlitePageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePageRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "pages")?;
        Ok(Self { conn })
    }
}

impl PageRepository for SqlitePageRepository<'_> {
    fn insert_page(&self, name: &str) -> RepoResult<PageId> {
        let id = self.conn.query_row(
            "INSERT INTO pages (name) VALUES (?1) RETURNING id;",
            [name],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    fn delete_page(&self, id: PageId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM pages WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }

    fn count_pages(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pages;", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
