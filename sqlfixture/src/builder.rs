//! Parameterized statement construction.
//!
//! All builders are pure text producers; values are supplied separately at
//! execution time. The DELETE counterpart lives on
//! [`Driver::delete_rows`](crate::driver::Driver::delete_rows) because it
//! executes as part of its contract.

use crate::criteria::{Criteria, SqlValue};
use crate::dialect::Dialect;
use crate::error::FixtureError;

/// Build `INSERT INTO "table" ("c1", …) VALUES (?, …)` with one
/// placeholder per column, in column order.
pub fn insert_statement(dialect: &Dialect, table: &str, columns: &[&str]) -> String {
    let column_list = columns
        .iter()
        .map(|c| dialect.quote(c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({column_list}) VALUES ({placeholders})",
        dialect.quote(table)
    )
}

/// Build `SELECT <expr> FROM "table" WHERE …` together with the criteria
/// parameters. `column_expr` is passed through verbatim (`*`, a column
/// list, `COUNT(*)`, …).
pub fn select_statement(
    dialect: &Dialect,
    column_expr: &str,
    table: &str,
    criteria: &Criteria,
) -> (String, Vec<SqlValue>) {
    let compiled = criteria.compile(dialect);
    let sql = format!(
        "SELECT {column_expr} FROM {} {}",
        dialect.quote(table),
        compiled.text
    );
    (sql, compiled.params)
}

/// Build `UPDATE "table" SET "c1" = ?, … WHERE …` with the data values
/// followed by the criteria parameters.
///
/// An empty data set is rejected with
/// [`FixtureError::InvalidArgument`] before any backend interaction.
pub fn update_statement(
    dialect: &Dialect,
    table: &str,
    data: &[(&str, SqlValue)],
    criteria: &Criteria,
) -> Result<(String, Vec<SqlValue>), FixtureError> {
    if data.is_empty() {
        return Err(FixtureError::InvalidArgument(format!(
            "no columns to update for table '{table}'"
        )));
    }

    let assignments = data
        .iter()
        .map(|(column, _)| format!("{} = ?", dialect.quote(column)))
        .collect::<Vec<_>>()
        .join(", ");
    let compiled = criteria.compile(dialect);

    let sql = format!(
        "UPDATE {} SET {assignments} {}",
        dialect.quote(table),
        compiled.text
    );
    let mut params: Vec<SqlValue> = data.iter().map(|(_, value)| value.clone()).collect();
    params.extend(compiled.params);
    Ok((sql, params))
}

/// Build `DELETE FROM "table" WHERE …` together with the criteria
/// parameters. Exposed for callers that want the text without executing;
/// the driver's `delete_rows` builds and runs it in one step.
pub fn delete_statement(
    dialect: &Dialect,
    table: &str,
    criteria: &Criteria,
) -> (String, Vec<SqlValue>) {
    let compiled = criteria.compile(dialect);
    let sql = format!("DELETE FROM {} {}", dialect.quote(table), compiled.text);
    (sql, compiled.params)
}
