//! Fixture driver: connection ownership, statement execution, teardown.
//!
//! The driver owns its [`rusqlite::Connection`] for its whole lifetime and
//! assumes exclusive, single-threaded access. Everything runs blocking on
//! the calling thread; callers wanting timeouts configure them on the
//! connection layer (e.g. `busy_timeout`), not here.

use rusqlite::Connection;
use rusqlite::params_from_iter;

use crate::builder;
use crate::criteria::{Criteria, SqlValue};
use crate::dialect::{Backend, Dialect};
use crate::error::FixtureError;
use crate::script::split_statements;

/// How to open a database.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub backend: Backend,
    /// Database path, or `:memory:` for a throwaway in-memory database.
    pub database: String,
}

/// Outcome of an executed statement, for caller inspection.
#[derive(Debug, Clone, Copy)]
pub struct Execution {
    pub rows_affected: usize,
    pub last_insert_rowid: i64,
}

/// A database handle plus the dialect it speaks.
pub struct Driver {
    conn: Connection,
    dialect: Dialect,
}

impl Driver {
    /// Open a database per the given options and verify the handle can
    /// prepare statements.
    pub fn connect(options: &ConnectOptions) -> Result<Self, FixtureError> {
        let conn = match options.backend {
            Backend::Sqlite => {
                if options.database == ":memory:" {
                    Connection::open_in_memory()
                } else {
                    Connection::open(&options.database)
                }
            }
        }
        .map_err(|e| {
            FixtureError::Configuration(format!(
                "cannot open database '{}': {e}",
                options.database
            ))
        })?;

        let driver = Driver {
            conn,
            dialect: options.backend.dialect(),
        };
        driver.capability_check()?;
        Ok(driver)
    }

    /// Open an in-memory database. Useful for testing.
    pub fn open_memory() -> Result<Self, FixtureError> {
        Self::connect(&ConnectOptions {
            backend: Backend::Sqlite,
            database: ":memory:".to_string(),
        })
    }

    /// The handle must at minimum be able to prepare a statement.
    fn capability_check(&self) -> Result<(), FixtureError> {
        self.conn
            .prepare("SELECT 1")
            .map(|_| ())
            .map_err(|e| FixtureError::Configuration(format!("handle failed capability check: {e}")))
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Escape hatch for callers needing raw rusqlite access.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Prepare a statement, bind each parameter in order from position 1,
    /// and run it to completion.
    ///
    /// Booleans and integers bind with their own types; text binds as
    /// text. Result rows, if any, are drained and discarded so the same
    /// path serves both DML and the occasional `SELECT` inside a fixture
    /// script.
    pub fn execute_query(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<Execution, FixtureError> {
        let mut stmt = self.conn.prepare(sql).map_err(|e| FixtureError::PrepareFailed {
            statement: sql.to_string(),
            source: e,
        })?;

        let mut rows = stmt
            .query(params_from_iter(params.iter()))
            .map_err(|e| FixtureError::ExecutionFailed {
                statement: sql.to_string(),
                source: e,
            })?;
        while rows
            .next()
            .map_err(|e| FixtureError::ExecutionFailed {
                statement: sql.to_string(),
                source: e,
            })?
            .is_some()
        {}

        Ok(Execution {
            rows_affected: self.conn.changes() as usize,
            last_insert_rowid: self.conn.last_insert_rowid(),
        })
    }

    /// Fetch a single scalar, e.g. a `COUNT(*)`.
    pub fn query_scalar<T: rusqlite::types::FromSql>(
        &self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<T, FixtureError> {
        let mut stmt = self.conn.prepare(sql).map_err(|e| FixtureError::PrepareFailed {
            statement: sql.to_string(),
            source: e,
        })?;
        stmt.query_row(params_from_iter(params.iter()), |row| row.get(0))
            .map_err(|e| FixtureError::ExecutionFailed {
                statement: sql.to_string(),
                source: e,
            })
    }

    /// Count rows in a table matching the criteria.
    pub fn count_rows(&self, table: &str, criteria: &Criteria) -> Result<i64, FixtureError> {
        let (sql, params) = builder::select_statement(&self.dialect, "COUNT(*)", table, criteria);
        self.query_scalar(&sql, &params)
    }

    /// Insert one row. Column and value counts must match.
    pub fn insert_row(
        &self,
        table: &str,
        columns: &[&str],
        values: &[SqlValue],
    ) -> Result<Execution, FixtureError> {
        if columns.len() != values.len() {
            return Err(FixtureError::InvalidArgument(format!(
                "insert into '{table}': {} columns but {} values",
                columns.len(),
                values.len()
            )));
        }
        let sql = builder::insert_statement(&self.dialect, table, columns);
        self.execute_query(&sql, values)
    }

    /// Update rows matching the criteria. Fails with `InvalidArgument` if
    /// `data` is empty, before touching the backend.
    pub fn update_rows(
        &self,
        table: &str,
        data: &[(&str, SqlValue)],
        criteria: &Criteria,
    ) -> Result<Execution, FixtureError> {
        let (sql, params) = builder::update_statement(&self.dialect, table, data, criteria)?;
        self.execute_query(&sql, &params)
    }

    /// Delete rows matching the criteria. Builds and executes in one step.
    pub fn delete_rows(&self, table: &str, criteria: &Criteria) -> Result<Execution, FixtureError> {
        let (sql, params) = builder::delete_statement(&self.dialect, table, criteria);
        self.execute_query(&sql, &params)
    }

    /// Split a raw script into statements and execute them in order.
    ///
    /// The first failing statement aborts the load; statements already
    /// executed stay committed (no transactional wrapping here).
    pub fn load_script<I>(&self, lines: I) -> Result<(), FixtureError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for statement in split_statements(lines) {
            log::debug!("executing fixture statement: {}", statement.trim_start());
            self.execute_query(&statement, &[])?;
        }
        Ok(())
    }

    pub fn transaction_in_progress(&self) -> bool {
        !self.conn.is_autocommit()
    }

    /// Roll back the open transaction, if any.
    pub fn rollback(&self) -> Result<(), FixtureError> {
        if self.transaction_in_progress() {
            self.execute_query("ROLLBACK", &[])?;
        }
        Ok(())
    }
}

impl Drop for Driver {
    /// Never leave the backend in an uncommitted state when the driver
    /// goes away.
    fn drop(&mut self) {
        if !self.conn.is_autocommit() {
            log::warn!("open transaction at teardown, rolling back");
            if let Err(e) = self.conn.execute_batch("ROLLBACK") {
                log::warn!("teardown rollback failed: {e}");
            }
        }
    }
}
