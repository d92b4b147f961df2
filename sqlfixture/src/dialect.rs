//! Backend selection and per-backend SQL syntax.

use crate::criteria::Operator;
use crate::error::FixtureError;

/// Supported database backends.
///
/// Backends are selected by a configuration tag through [`Backend::from_tag`]
/// rather than by dynamic lookup; an unknown tag is a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
}

impl Backend {
    /// Look up a backend by its configuration tag (case-insensitive).
    pub fn from_tag(tag: &str) -> Result<Self, FixtureError> {
        match tag.to_ascii_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Backend::Sqlite),
            other => Err(FixtureError::Configuration(format!(
                "unknown backend '{other}'"
            ))),
        }
    }

    /// The SQL dialect for this backend.
    pub fn dialect(self) -> Dialect {
        Dialect { backend: self }
    }
}

/// SQL syntax capability of a backend: identifier quoting and the textual
/// form of comparison operators.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    backend: Backend,
}

impl Default for Dialect {
    fn default() -> Self {
        Backend::Sqlite.dialect()
    }
}

impl Dialect {
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Quote a possibly-dotted identifier.
    ///
    /// Each `.`-separated segment is wrapped in double quotes, so both
    /// `schema.table` and `table.column` forms work. Embedded quote
    /// characters are not escaped; fixture identifiers are trusted input.
    ///
    /// ```
    /// use sqlfixture::Dialect;
    ///
    /// let d = Dialect::default();
    /// assert_eq!(d.quote("users"), "\"users\"");
    /// assert_eq!(d.quote("a.b"), "\"a\".\"b\"");
    /// ```
    pub fn quote(&self, name: &str) -> String {
        name.split('.')
            .map(|segment| format!("\"{segment}\""))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// The SQL token for a comparison operator.
    pub fn operator_sql(&self, op: Operator) -> &'static str {
        match op {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Le => "<=",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Like => "LIKE",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }
}
