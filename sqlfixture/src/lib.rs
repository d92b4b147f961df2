//! SQL fixture engine for preparing test databases.
//!
//! Splits multi-statement SQL scripts into executable units (honoring a
//! redefinable `DELIMITER` directive, comment lines, and blank lines) and
//! builds parameterized INSERT/SELECT/UPDATE/DELETE statements from
//! loosely-typed criteria whose keys may carry a trailing comparison
//! operator (`"age >"` means column `age`, operator `>`).
//! Backed by SQLite (via rusqlite with bundled feature).

pub mod builder;
pub mod criteria;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod script;

pub use builder::{delete_statement, insert_statement, select_statement, update_statement};
pub use criteria::{CompiledWhere, Criteria, Criterion, Operator, SqlValue};
pub use dialect::{Backend, Dialect};
pub use driver::{ConnectOptions, Driver, Execution};
pub use error::FixtureError;
pub use script::split_statements;
