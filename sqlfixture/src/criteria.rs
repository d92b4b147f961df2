//! Criteria parsing and WHERE-clause compilation.
//!
//! Criteria keys follow the fixture convention of embedding an optional
//! comparison operator after the column name:
//! ```text
//! "age >"      column age, operator >
//! "name like"  column name, operator LIKE
//! "deleted"    column deleted, equality (or IS NULL for a null value)
//! ```
//!
//! A key is parsed exactly once at the boundary into a [`Criterion`];
//! compilation then renders one fragment per criterion and collects the
//! non-null values as the ordered parameter list.

use crate::dialect::Dialect;

/// A loosely-typed parameter value.
///
/// Booleans and integers keep their type through binding; everything else
/// is carried as text (floating-point values included, a deliberate
/// simplification of the binding layer).
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Null,
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v.into())
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl rusqlite::ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match self {
            SqlValue::Bool(b) => b.to_sql(),
            SqlValue::Int(i) => i.to_sql(),
            SqlValue::Text(s) => s.to_sql(),
            SqlValue::Null => Ok(rusqlite::types::ToSqlOutput::Owned(
                rusqlite::types::Value::Null,
            )),
        }
    }
}

/// Comparison operator extracted from a criteria key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
    Like,
    IsNull,
    IsNotNull,
}

/// Recognized operator suffixes, in match-precedence order. The first
/// entry whose `" <token>"` form matches the tail of the key wins.
const SUFFIX_OPERATORS: [(&str, Operator); 6] = [
    ("like", Operator::Like),
    ("!=", Operator::Ne),
    ("<=", Operator::Le),
    (">=", Operator::Ge),
    ("<", Operator::Lt),
    (">", Operator::Gt),
];

/// A parsed criterion: bare column name, operator, and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub field: String,
    pub op: Operator,
    pub value: SqlValue,
}

impl Criterion {
    /// Parse a raw criteria key/value pair.
    ///
    /// For null values, a `!=` occurring past the start of the key marks
    /// negation (`IS NOT NULL`); a key that begins with `!=` is taken
    /// literally. For non-null values the key tail is scanned against the
    /// recognized operator list, case-insensitively; a match only counts
    /// with its separating space, so a column named `range` is not read
    /// as `ran >`.
    pub fn parse(field_spec: &str, value: SqlValue) -> Self {
        if matches!(value, SqlValue::Null) {
            if field_spec.find("!=").is_some_and(|pos| pos > 0) {
                return Criterion {
                    field: field_spec.replacen(" !=", "", 1),
                    op: Operator::IsNotNull,
                    value,
                };
            }
            return Criterion {
                field: field_spec.to_string(),
                op: Operator::IsNull,
                value,
            };
        }

        for (token, op) in SUFFIX_OPERATORS {
            let needle = format!(" {token}");
            let Some(tail_start) = field_spec.len().checked_sub(needle.len()) else {
                continue;
            };
            if !field_spec.is_char_boundary(tail_start) {
                continue;
            }
            if field_spec[tail_start..].eq_ignore_ascii_case(&needle) {
                let mut field = field_spec.to_string();
                if let Some(pos) = find_ignore_ascii_case(&field, &needle) {
                    field.replace_range(pos..pos + needle.len(), "");
                }
                return Criterion { field, op, value };
            }
        }

        Criterion {
            field: field_spec.to_string(),
            op: Operator::Eq,
            value,
        }
    }
}

/// First case-insensitive occurrence of an ASCII needle.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || h.len() < n.len() {
        return None;
    }
    (0..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// A compiled WHERE clause: rendered text plus the ordered parameters.
///
/// The number of `?` placeholders in `text` always equals `params.len()`;
/// null-valued criteria render as `IS NULL` / `IS NOT NULL` and contribute
/// no parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledWhere {
    pub text: String,
    pub params: Vec<SqlValue>,
}

/// An insertion-ordered set of raw criteria entries.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    entries: Vec<(String, SqlValue)>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion under a raw key that may carry a trailing operator.
    pub fn push(&mut self, field_spec: impl Into<String>, value: impl Into<SqlValue>) {
        self.entries.push((field_spec.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Compile into a WHERE clause and parameter list.
    ///
    /// Empty criteria compile to empty text (the `WHERE` keyword is omitted
    /// entirely); otherwise each fragment carries a trailing space and the
    /// fragments are joined with `AND `.
    ///
    /// ```
    /// use sqlfixture::{Criteria, Dialect, SqlValue};
    ///
    /// let mut c = Criteria::new();
    /// c.push("age >", 5);
    /// c.push("name", "x");
    /// c.push("deleted", SqlValue::Null);
    /// let w = c.compile(&Dialect::default());
    /// assert_eq!(w.text, "WHERE \"age\" > ? AND \"name\" = ? AND \"deleted\" IS NULL ");
    /// assert_eq!(w.params.len(), 2);
    /// ```
    pub fn compile(&self, dialect: &Dialect) -> CompiledWhere {
        if self.entries.is_empty() {
            return CompiledWhere {
                text: String::new(),
                params: Vec::new(),
            };
        }

        let mut fragments = Vec::with_capacity(self.entries.len());
        let mut params = Vec::new();
        for (field_spec, value) in &self.entries {
            let criterion = Criterion::parse(field_spec, value.clone());
            let quoted = dialect.quote(&criterion.field);
            let op_sql = dialect.operator_sql(criterion.op);
            match criterion.op {
                Operator::IsNull | Operator::IsNotNull => {
                    fragments.push(format!("{quoted} {op_sql} "));
                }
                _ => {
                    fragments.push(format!("{quoted} {op_sql} ? "));
                    params.push(criterion.value);
                }
            }
        }

        CompiledWhere {
            text: format!("WHERE {}", fragments.join("AND ")),
            params,
        }
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for Criteria {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Criteria {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
