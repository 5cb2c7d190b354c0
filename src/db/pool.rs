//! Lazily opened SQLite handle (lightweight for CLI usage).
//!
//! Nothing touches the file until the first query; the first query opens
//! the connection and creates the schema, every later call reuses it.

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

pub const IN_MEMORY: &str = ":memory:";

pub struct DbPool {
    path: String,
    conn: Option<Connection>,
}

impl DbPool {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            conn: None,
        }
    }

    /// Private in-memory database, mostly for tests.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Open the database and create missing tables.
    /// Safe to call any number of times: only the first call does work.
    pub fn init_database(&mut self) -> AppResult<()> {
        self.conn().map(|_| ())
    }

    /// Connection handle, opened on first use.
    pub fn conn(&mut self) -> AppResult<&mut Connection> {
        if self.conn.is_none() {
            let conn = Connection::open(&self.path)?;
            init_db(&conn)?;
            self.conn = Some(conn);
        }

        self.conn
            .as_mut()
            .ok_or_else(|| AppError::Other(format!("database {} is not open", self.path)))
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&mut Connection) -> AppResult<T>,
    {
        func(self.conn()?)
    }
}
