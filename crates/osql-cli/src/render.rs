//! Output formats for parsed statements.

use clap::ValueEnum;
use osql_core::{Span, Statement};

use crate::error::Result;

/// How a parsed statement is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Canonical SQL.
    #[default]
    Sql,
    /// The AST in Rust debug notation.
    Debug,
    /// The AST as pretty-printed JSON.
    Json,
}

/// Renders `statement` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(statement: &Statement, format: Format) -> Result<String> {
    Ok(match format {
        Format::Sql => statement.to_string(),
        Format::Debug => format!("{statement:#?}"),
        Format::Json => serde_json::to_string_pretty(statement)?,
    })
}

/// Returns the source line holding `span` with a caret marker under it.
#[must_use]
pub fn snippet(source: &str, span: Span) -> String {
    let start = span.start.min(source.len());
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[start..]
        .find('\n')
        .map_or(source.len(), |i| start + i);
    let line = &source[line_start..line_end];
    let column = source[line_start..start].chars().count();
    let width = source[start..span.end.clamp(start, line_end)]
        .chars()
        .count()
        .max(1);
    format!("  {line}\n  {}{}", " ".repeat(column), "^".repeat(width))
}

#[cfg(test)]
mod tests {
    use osql_core::parse_sql;

    use super::*;

    #[test]
    fn test_render_sql() {
        let stmt = parse_sql("select * from logs limit 5").unwrap();
        assert_eq!(
            render(&stmt, Format::Sql).unwrap(),
            "SELECT * FROM logs LIMIT 5"
        );
    }

    #[test]
    fn test_render_json() {
        let stmt = parse_sql("SHOW TABLES LIKE 'acc%'").unwrap();
        let json = render(&stmt, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("Show").is_some());
    }

    #[test]
    fn test_render_debug() {
        let stmt = parse_sql("SELECT 1").unwrap();
        assert!(render(&stmt, Format::Debug).unwrap().starts_with("Select("));
    }

    #[test]
    fn test_snippet_points_at_span() {
        let source = "SELECT a\nFROM WHERE";
        assert_eq!(
            snippet(source, Span::new(14, 19)),
            "  FROM WHERE\n       ^^^^^"
        );
    }

    #[test]
    fn test_snippet_at_end_of_input() {
        assert_eq!(snippet("SELECT (", Span::new(8, 8)), "  SELECT (\n          ^");
    }
}
