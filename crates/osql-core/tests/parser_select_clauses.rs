//! Tests for the query specification: projection, FROM, WHERE,
//! GROUP BY, HAVING, ORDER BY and LIMIT.

mod common;
use common::*;

use osql_core::ast::{
    Atom, ComparisonOp, Expr, Ident, LimitClause, NullOrdering, OrderDirection, Predicate,
    QualifiedName, Relation, SetQuantifier,
};
use osql_core::ParseErrorKind;

// ===================================================================
// Projection
// ===================================================================

#[test]
fn select_star() {
    let q = parse_select("SELECT * FROM accounts");
    assert!(q.select.wildcard);
    assert!(q.select.elements.is_empty());
    round_trip("SELECT * FROM accounts");
}

#[test]
fn select_star_followed_by_columns() {
    let q = parse_select("SELECT *, age FROM accounts");
    assert!(q.select.wildcard);
    assert_eq!(q.select.elements[0].expr, Expr::column("age"));
    round_trip("SELECT *, age FROM accounts");
}

#[test]
fn select_quantifiers() {
    assert_eq!(
        parse_select("SELECT DISTINCT state FROM accounts")
            .select
            .quantifier,
        Some(SetQuantifier::Distinct)
    );
    assert_eq!(
        parse_select("SELECT ALL state FROM accounts").select.quantifier,
        Some(SetQuantifier::All)
    );
    round_trip("SELECT DISTINCT state, city FROM accounts");
}

#[test]
fn select_without_from() {
    let q = parse_select("SELECT 1 + 1");
    assert!(q.from.is_none());
    round_trip("SELECT 1 + 1");
}

#[test]
fn select_aliases() {
    let q = parse_select(r#"SELECT age AS a, balance b, firstname AS "First Name" FROM accounts"#);
    let aliases: Vec<_> = q
        .select
        .elements
        .iter()
        .map(|e| e.alias.clone())
        .collect();
    assert_eq!(
        aliases,
        vec![
            Some(Ident::new("a")),
            Some(Ident::new("b")),
            Some(Ident::quoted("First Name")),
        ]
    );
    round_trip(r#"SELECT age AS a, balance b, firstname AS "First Name" FROM accounts"#);
}

#[test]
fn select_backtick_column() {
    let q = parse_select("SELECT `first name` FROM accounts");
    assert_eq!(
        q.select.elements[0].expr,
        Expr::atom(Atom::Column(QualifiedName::new(vec![
            Ident::quoted("first name")
        ])))
    );
    round_trip("SELECT `first name` FROM accounts");
}

#[test]
fn select_nested_field_path() {
    let q = parse_select("SELECT employer.address.city FROM accounts");
    assert_eq!(
        q.select.elements[0].expr,
        Expr::column("employer.address.city")
    );
}

#[test]
fn select_keyword_named_columns() {
    let q = parse_select("SELECT date, timestamp, count FROM logs");
    let columns: Vec<_> = q
        .select
        .elements
        .iter()
        .map(|e| e.expr.to_string())
        .collect();
    assert_eq!(columns, vec!["date", "timestamp", "count"]);
    round_trip("SELECT date, timestamp, count FROM logs");
}

#[test]
fn select_at_prefixed_column() {
    let q = parse_select("SELECT @timestamp FROM logs");
    assert_eq!(q.select.elements[0].expr, Expr::column("@timestamp"));
}

// ===================================================================
// FROM
// ===================================================================

#[test]
fn from_table_alias() {
    let q = parse_select("SELECT a.age FROM accounts AS a");
    let Relation::Table { name, alias } = q.from.unwrap().relation else {
        panic!("expected table");
    };
    assert_eq!(name, QualifiedName::from_dotted("accounts"));
    assert_eq!(alias, Some(Ident::new("a")));
}

#[test]
fn from_index_pattern_names() {
    for sql in [
        "SELECT * FROM `logs-*`",
        r#"SELECT * FROM "logs-*""#,
    ] {
        let Relation::Table { name, .. } = parse_select(sql).from.unwrap().relation else {
            panic!("expected table for {sql}");
        };
        assert_eq!(name.parts, vec![Ident::quoted("logs-*")], "{sql}");
    }
    round_trip(r#"SELECT * FROM "logs-*""#);
}

#[test]
fn from_hidden_index() {
    let Relation::Table { name, .. } = parse_select("SELECT * FROM .kibana").from.unwrap().relation
    else {
        panic!("expected table");
    };
    assert_eq!(name.to_dotted(), ".kibana");
    round_trip("SELECT * FROM .kibana");
}

#[test]
fn from_subquery() {
    let q = parse_select("SELECT s.a FROM (SELECT a FROM t WHERE a > 1) AS s");
    let Relation::Subquery { query, alias } = q.from.unwrap().relation else {
        panic!("expected subquery");
    };
    assert_eq!(alias, Ident::new("s"));
    assert!(query.from.unwrap().where_clause.is_some());
    round_trip("SELECT s.a FROM (SELECT a FROM t WHERE a > 1) AS s");
}

#[test]
fn from_subquery_alias_without_as() {
    let q = parse_select("SELECT * FROM (SELECT a FROM t) s");
    assert!(matches!(
        q.from.unwrap().relation,
        Relation::Subquery { alias, .. } if alias.value == "s"
    ));
}

#[test]
fn from_subquery_requires_alias() {
    let err = parse_err("SELECT * FROM (SELECT a FROM t)");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedToken);
}

// ===================================================================
// WHERE / GROUP BY / HAVING
// ===================================================================

#[test]
fn where_comparison() {
    let q = parse_select("SELECT * FROM accounts WHERE age >= 30");
    assert!(matches!(
        q.from.unwrap().where_clause,
        Some(Expr::Predicate(Predicate::Comparison {
            op: ComparisonOp::GtEq,
            ..
        }))
    ));
    round_trip("SELECT * FROM accounts WHERE age >= 30");
}

#[test]
fn group_by_and_having() {
    let sql = "SELECT state, AVG(balance) FROM accounts \
               GROUP BY state, city HAVING AVG(balance) > 1000";
    let from = parse_select(sql).from.unwrap();
    assert_eq!(from.group_by.len(), 2);
    assert!(from.having.is_some());
    round_trip(sql);
}

#[test]
fn having_aggregate_followed_by_order_by() {
    let sql = "SELECT state FROM accounts GROUP BY state HAVING MAX(age) ORDER BY state";
    let from = parse_select(sql).from.unwrap();
    assert_eq!(from.order_by.len(), 1);
    assert_eq!(from.order_by[0].expr, Expr::column("state"));
    round_trip(sql);
}

// ===================================================================
// ORDER BY
// ===================================================================

#[test]
fn order_by_directions_and_nulls() {
    let sql = "SELECT * FROM accounts ORDER BY age DESC NULLS FIRST, name ASC, city NULLS LAST";
    let order_by = parse_select(sql).from.unwrap().order_by;
    assert_eq!(order_by.len(), 3);
    assert_eq!(order_by[0].direction, OrderDirection::Desc);
    assert_eq!(order_by[0].nulls, Some(NullOrdering::First));
    assert_eq!(order_by[1].direction, OrderDirection::Asc);
    assert_eq!(order_by[1].nulls, None);
    assert_eq!(order_by[2].direction, OrderDirection::Asc);
    assert_eq!(order_by[2].nulls, Some(NullOrdering::Last));
    round_trip(sql);
}

#[test]
fn order_by_nulls_requires_position() {
    let err = parse_err("SELECT * FROM accounts ORDER BY age NULLS");
    assert_eq!(err.expected, vec!["FIRST", "LAST"]);
}

// ===================================================================
// LIMIT
// ===================================================================

#[test]
fn limit_only() {
    assert_eq!(
        parse_select("SELECT * FROM accounts LIMIT 10").limit,
        Some(LimitClause {
            offset: None,
            limit: 10
        })
    );
}

#[test]
fn limit_offset_forms_are_equivalent() {
    let comma = parse_select("SELECT * FROM accounts LIMIT 5, 10");
    let keyword = parse_select("SELECT * FROM accounts LIMIT 10 OFFSET 5");
    assert_eq!(comma, keyword);
    round_trip("SELECT * FROM accounts LIMIT 5, 10");
}

#[test]
fn limit_without_from() {
    let q = parse_select("SELECT 1 LIMIT 1");
    assert!(q.from.is_none());
    assert!(q.limit.is_some());
}

#[test]
fn limit_rejects_negative() {
    let err = parse_err("SELECT * FROM accounts LIMIT -1");
    assert_eq!(err.expected, vec!["integer"]);
}

#[test]
fn full_query() {
    let sql = "SELECT state, COUNT(*) AS c FROM accounts WHERE age > 20 \
               GROUP BY state HAVING COUNT(*) > 1 ORDER BY c DESC LIMIT 3 OFFSET 1";
    let q = parse_select(sql);
    let from = q.from.as_ref().unwrap();
    assert!(from.where_clause.is_some());
    assert_eq!(from.group_by, vec![Expr::column("state")]);
    assert_eq!(
        q.limit,
        Some(LimitClause {
            offset: Some(1),
            limit: 3
        })
    );
    round_trip(sql);
}
