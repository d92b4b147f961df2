//! Multi-statement SQL script splitting.
//!
//! Fixture scripts are plain text with one grammar beyond SQL itself:
//! comment lines (`--`, `#`), blank lines, and `DELIMITER <token>`
//! directive lines. Everything else accumulates line by line until the
//! active delimiter appears at the end of the buffer, at which point one
//! statement is emitted with the delimiter stripped.

/// Character class a delimiter token may be built from.
const DELIMITER_CHARS: [char; 4] = [';', '$', '|', '\\'];

/// Parse a `DELIMITER <token>` directive line, returning the new token.
///
/// The keyword is case-insensitive; the token is one or more characters
/// from `; $ | \`. Anything else is not a directive and is treated as an
/// ordinary script line.
fn parse_delimiter_directive(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    let keyword = trimmed.get(..9)?;
    if !keyword.eq_ignore_ascii_case("DELIMITER") {
        return None;
    }
    let rest = &trimmed[9..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let token = rest.trim();
    if !token.is_empty() && token.chars().all(|c| DELIMITER_CHARS.contains(&c)) {
        Some(token)
    } else {
        None
    }
}

/// Split raw script lines into executable statements.
///
/// The delimiter starts as `;` on every call and is changed only by a
/// `DELIMITER` directive, which takes effect for subsequent lines. Skipped
/// outright: blank lines, a line that is exactly `;`, and comment lines.
/// Each kept line is appended right-trimmed after a `\n`, so emitted
/// statements begin with a newline (backends tolerate this). A trailing
/// statement with no terminating delimiter is emitted as-is.
///
/// ```
/// use sqlfixture::split_statements;
///
/// let stmts = split_statements(["SELECT 1;", "-- comment", "", "SELECT 2;"]);
/// assert_eq!(stmts, vec!["\nSELECT 1", "\nSELECT 2"]);
/// ```
pub fn split_statements<I>(lines: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut delimiter = String::from(";");
    let mut buffer = String::new();
    let mut statements = Vec::new();

    for line in lines {
        let line = line.as_ref();

        if let Some(token) = parse_delimiter_directive(line) {
            delimiter = token.to_string();
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed == ";"
            || trimmed.starts_with("--")
            || trimmed.starts_with('#')
        {
            continue;
        }

        buffer.push('\n');
        buffer.push_str(line.trim_end());

        if buffer.ends_with(delimiter.as_str()) {
            buffer.truncate(buffer.len() - delimiter.len());
            statements.push(std::mem::take(&mut buffer));
        }
    }

    if !buffer.is_empty() {
        statements.push(buffer);
    }

    statements
}
