//! Statement execution with uniform success/failure reporting
//!
//! Every component goes through [`QueryExecutor`] so that statement
//! lifecycle and error-to-message translation live in one place.
//!
//! - [`QueryExecutor::execute`] is fire-and-forget: the result set is
//!   drained and released before it returns.
//! - [`QueryExecutor::execute_for_cursor`] hands the fetched rows and the
//!   affected-row count back to the caller as a [`Cursor`].
//!
//! Failures are always reported (tagged with the statement's name). They are
//! returned as `Err` only when [`ExecOptions::raise_on_error`] is set;
//! otherwise the caller sees `Ok(None)`.

use chrono::NaiveDate;
use futures::TryStreamExt;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{Connection, Either, Executor, FromRow, PgConnection, Postgres};
use tracing::{debug, error, info};

use crate::error::{DbError, DbResult};

/// Per-call execution flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Propagate failures to the caller instead of swallowing them
    pub raise_on_error: bool,
    /// Report `Query "<name>" executed successfully!` on success
    pub print_on_success: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            raise_on_error: false,
            print_on_success: true,
        }
    }
}

impl ExecOptions {
    /// Options for setup statements whose failure must abort the run
    pub fn raising() -> Self {
        Self {
            raise_on_error: true,
            ..Self::default()
        }
    }

    /// Suppress the success message
    pub fn quiet(self) -> Self {
        Self {
            print_on_success: false,
            ..self
        }
    }
}

/// A positional statement parameter (`$1`, `$2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
    Date(NaiveDate),
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// Rows and affected-row count produced by one statement.
///
/// For `SELECT` the count is the number of rows returned, for
/// `UPDATE`/`DELETE`/`INSERT` it is the number of rows touched.
#[derive(Default)]
pub struct Cursor {
    rows: Vec<PgRow>,
    rows_affected: u64,
}

impl std::fmt::Debug for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("rows", &self.rows.len())
            .field("rows_affected", &self.rows_affected)
            .finish()
    }
}

impl Cursor {
    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    pub fn rows(&self) -> &[PgRow] {
        &self.rows
    }

    /// Decode every row into `T`
    pub fn fetch_all<T>(&self) -> DbResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        self.rows
            .iter()
            .map(|row| T::from_row(row).map_err(DbError::from))
            .collect()
    }

    /// Decode the first row into `T`, if there is one
    pub fn fetch_one<T>(&self) -> DbResult<Option<T>>
    where
        T: for<'r> FromRow<'r, PgRow>,
    {
        self.rows
            .first()
            .map(|row| T::from_row(row).map_err(DbError::from))
            .transpose()
    }
}

/// Wraps the single connection shared by every component.
pub struct QueryExecutor {
    conn: PgConnection,
}

impl QueryExecutor {
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Direct access for statements that bypass reporting (tests, session setup).
    pub fn connection_mut(&mut self) -> &mut PgConnection {
        &mut self.conn
    }

    /// Close the underlying connection gracefully.
    pub async fn close(self) -> DbResult<()> {
        self.conn.close().await?;
        Ok(())
    }

    /// Run a statement and discard its rows.
    ///
    /// Returns the affected-row count, or `None` when the statement failed
    /// and `raise_on_error` was not set.
    pub async fn execute(
        &mut self,
        sql: &str,
        name: &str,
        params: &[SqlParam],
        options: ExecOptions,
    ) -> DbResult<Option<u64>> {
        debug!(query = name, params = ?params, "executing: {}", sql.trim());

        match bind_params(sqlx::query(sql), params)
            .execute(&mut self.conn)
            .await
        {
            Ok(result) => {
                if options.print_on_success {
                    info!("Query \"{}\" executed successfully!", name);
                }
                Ok(Some(result.rows_affected()))
            }
            Err(e) => Self::report_failure(name, e, options).map(|()| None),
        }
    }

    /// Run a statement and hand its rows and row count to the caller.
    pub async fn execute_for_cursor(
        &mut self,
        sql: &str,
        name: &str,
        params: &[SqlParam],
        options: ExecOptions,
    ) -> DbResult<Option<Cursor>> {
        debug!(query = name, params = ?params, "executing: {}", sql.trim());

        let query = bind_params(sqlx::query(sql), params);
        match collect_cursor(&mut self.conn, query).await {
            Ok(cursor) => {
                if options.print_on_success {
                    info!("Query \"{}\" executed successfully!", name);
                }
                Ok(Some(cursor))
            }
            Err(e) => Self::report_failure(name, e, options).map(|()| None),
        }
    }

    fn report_failure(name: &str, e: sqlx::Error, options: ExecOptions) -> DbResult<()> {
        error!("Failed to {}: error \"{}\" occurred.", name, e);
        if options.raise_on_error {
            return Err(DbError::Sqlx(e));
        }
        Ok(())
    }
}

async fn collect_cursor<'q>(
    conn: &mut PgConnection,
    query: Query<'q, Postgres, PgArguments>,
) -> Result<Cursor, sqlx::Error> {
    let mut cursor = Cursor::default();
    let mut stream = conn.fetch_many(query);
    while let Some(step) = stream.try_next().await? {
        match step {
            Either::Left(result) => cursor.rows_affected += result.rows_affected(),
            Either::Right(row) => cursor.rows.push(row),
        }
    }
    Ok(cursor)
}

fn bind_params<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    params: &'q [SqlParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        query = match param {
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Date(value) => query.bind(*value),
        };
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_swallow_and_report() {
        let options = ExecOptions::default();
        assert!(!options.raise_on_error);
        assert!(options.print_on_success);
    }

    #[test]
    fn raising_quiet_options() {
        let options = ExecOptions::raising().quiet();
        assert!(options.raise_on_error);
        assert!(!options.print_on_success);
    }

    #[test]
    fn params_convert_from_rust_values() {
        let date = NaiveDate::from_ymd_opt(2001, 9, 14).unwrap();
        let params: Vec<SqlParam> = vec![5.into(), "tracy".into(), date.into()];

        assert_eq!(
            params,
            vec![
                SqlParam::Int(5),
                SqlParam::Text("tracy".to_string()),
                SqlParam::Date(date)
            ]
        );
    }

    #[test]
    fn swallowed_failure_is_not_an_error() {
        let outcome = QueryExecutor::report_failure(
            "delete group",
            sqlx::Error::RowNotFound,
            ExecOptions::default(),
        );
        assert!(outcome.is_ok());
    }

    #[test]
    fn raised_failure_propagates() {
        let outcome = QueryExecutor::report_failure(
            "create students table",
            sqlx::Error::RowNotFound,
            ExecOptions::raising(),
        );
        assert!(matches!(outcome, Err(DbError::Sqlx(sqlx::Error::RowNotFound))));
    }

    #[test]
    fn empty_cursor_has_no_rows() {
        let cursor = Cursor::default();
        assert_eq!(cursor.rows_affected(), 0);
        assert!(cursor.rows().is_empty());
    }
}
