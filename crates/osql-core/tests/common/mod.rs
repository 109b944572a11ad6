#![allow(dead_code)]

use osql_core::ast::{Expr, FunctionCall, QuerySpec, Statement};
use osql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_root()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> QuerySpec {
    match parse(sql) {
        Statement::Select(q) => q,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Parses `SELECT <expr>` and returns the single projected expression.
pub fn parse_expr(expr: &str) -> Expr {
    let sql = format!("SELECT {expr}");
    let mut query = parse_select(&sql);
    assert_eq!(
        query.select.elements.len(),
        1,
        "Expected one select element in: {sql}"
    );
    let element = query.select.elements.remove(0);
    assert!(
        element.alias.is_none(),
        "Unexpected alias {:?} in: {sql}",
        element.alias
    );
    element.expr
}

/// Parses `SELECT * FROM t WHERE <cond>` and returns the condition.
pub fn parse_where(cond: &str) -> Expr {
    let sql = format!("SELECT * FROM t WHERE {cond}");
    parse_select(&sql)
        .from
        .and_then(|from| from.where_clause)
        .unwrap_or_else(|| panic!("Expected WHERE clause in: {sql}"))
}

/// Parses `SELECT <call>` and returns the function call.
pub fn parse_call(call: &str) -> FunctionCall {
    let expr = parse_expr(call);
    match expr.as_function() {
        Some(call) => call.clone(),
        None => panic!("Expected function call, got {expr:?}"),
    }
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// tree and string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast1, ast2, "Round-trip changed the tree for: {sql}");
}
