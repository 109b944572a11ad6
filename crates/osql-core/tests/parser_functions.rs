//! Tests for function calls: scalar functions, CASE, CAST, special forms,
//! aggregates, windows and HIGHLIGHT.

mod common;
use common::*;

use osql_core::ast::{
    AggregateFunction, DataType, Expr, FunctionCall, GetFormatType, HighlightArgName,
    OrderDirection, RelevanceField, TimeUnit, TimestampFunction, WindowFunction,
};
use osql_core::{Keyword, ParseErrorKind};

// ===================================================================
// Scalar functions
// ===================================================================

#[test]
fn scalar_function_names_are_keywords() {
    let cases = [
        ("abs(x)", Keyword::Abs),
        ("CONCAT(a, b, 'c')", Keyword::Concat),
        ("date_format(d, '%Y')", Keyword::DateFormat),
        ("IFNULL(a, 0)", Keyword::Ifnull),
        ("typeof(a)", Keyword::Typeof),
        ("LEFT(name, 3)", Keyword::Left),
        ("mod(a, 2)", Keyword::Mod),
    ];
    for (sql, expected) in cases {
        let FunctionCall::Scalar { name, .. } = parse_call(sql) else {
            panic!("expected scalar call for {sql}");
        };
        assert_eq!(name, expected, "{sql}");
    }
}

#[test]
fn scalar_function_arguments() {
    let FunctionCall::Scalar { args, .. } = parse_call("substring(name, 1, 3)") else {
        panic!("expected scalar call");
    };
    assert_eq!(args.len(), 3);
    round_trip("SELECT SUBSTRING(name, 1, 3) FROM accounts");
}

#[test]
fn scalar_function_without_arguments() {
    for sql in ["NOW()", "pi()", "CURRENT_DATE()"] {
        let FunctionCall::Scalar { args, .. } = parse_call(sql) else {
            panic!("expected scalar call for {sql}");
        };
        assert!(args.is_empty(), "{sql}");
    }
    round_trip("SELECT NOW(), PI()");
}

#[test]
fn datetime_constant_without_parentheses_is_a_column() {
    assert_eq!(parse_expr("current_date"), Expr::column("current_date"));
}

#[test]
fn nested_calls() {
    let FunctionCall::Scalar { args, .. } = parse_call("ROUND(ABS(balance) / 3, 2)") else {
        panic!("expected scalar call");
    };
    assert_eq!(args.len(), 2);
    round_trip("SELECT ROUND(ABS(balance) / 3, 2) FROM accounts");
}

#[test]
fn unknown_function() {
    let err = parse_err("SELECT foo(1)");
    assert_eq!(err.kind, ParseErrorKind::UnknownFunctionShape);
    assert!(err.message.contains("foo"));
    assert_eq!(err.expected, vec!["function name"]);

    let err = parse_err("SELECT `my func`(1)");
    assert_eq!(err.kind, ParseErrorKind::UnknownFunctionShape);
}

#[test]
fn reserved_word_that_is_not_a_function() {
    let err = parse_err("SELECT DATE_HISTOGRAM(field = 'ts')");
    assert_eq!(err.kind, ParseErrorKind::UnknownFunctionShape);
}

#[test]
fn unterminated_argument_list() {
    let err = parse_err("SELECT abs(x");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedConstruct);
    assert_eq!(err.expected, vec!["')'"]);
}

// ===================================================================
// NESTED
// ===================================================================

#[test]
fn nested_field_and_nested_all() {
    assert!(matches!(
        parse_call("nested(projects.name)"),
        FunctionCall::Scalar {
            name: Keyword::Nested,
            ..
        }
    ));
    let FunctionCall::NestedAll { path } = parse_call("nested(projects.*)") else {
        panic!("expected NESTED(path.*)");
    };
    assert_eq!(path.to_dotted(), "projects");
    round_trip("SELECT NESTED(projects.*), NESTED(projects.name) FROM employees");
}

#[test]
fn nested_all_with_deep_path() {
    let FunctionCall::NestedAll { path } = parse_call("NESTED(a.b.c.*)") else {
        panic!("expected NESTED(path.*)");
    };
    assert_eq!(path.parts.len(), 3);
}

// ===================================================================
// CASE / CAST
// ===================================================================

#[test]
fn searched_case() {
    let FunctionCall::Case {
        operand,
        when_clauses,
        else_clause,
    } = parse_call("CASE WHEN age > 30 THEN 'old' WHEN age > 20 THEN 'mid' ELSE 'young' END")
    else {
        panic!("expected CASE");
    };
    assert!(operand.is_none());
    assert_eq!(when_clauses.len(), 2);
    assert!(else_clause.is_some());
    round_trip("SELECT CASE WHEN age > 30 THEN 'old' ELSE 'young' END FROM accounts");
}

#[test]
fn simple_case() {
    let FunctionCall::Case {
        operand,
        else_clause,
        ..
    } = parse_call("CASE state WHEN 'TN' THEN 1 END")
    else {
        panic!("expected CASE");
    };
    assert_eq!(operand.as_deref(), Some(&Expr::column("state")));
    assert!(else_clause.is_none());
    round_trip("SELECT CASE state WHEN 'TN' THEN 1 END FROM accounts");
}

#[test]
fn case_requires_when() {
    let err = parse_err("SELECT CASE a END");
    assert_eq!(err.expected, vec!["WHEN"]);
}

#[test]
fn case_requires_end() {
    let err = parse_err("SELECT CASE WHEN a THEN 1");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedConstruct);
    assert_eq!(err.expected, vec!["END"]);
}

#[test]
fn cast_types() {
    let cases = [
        ("CAST(a AS INT)", DataType::Int),
        ("cast(a as integer)", DataType::Integer),
        ("CAST(a AS DOUBLE)", DataType::Double),
        ("CAST(a AS LONG)", DataType::Long),
        ("CAST(a AS FLOAT)", DataType::Float),
        ("CAST(a AS STRING)", DataType::String),
        ("CAST(a AS BOOLEAN)", DataType::Boolean),
        ("CAST(a AS DATE)", DataType::Date),
        ("CAST(a AS TIME)", DataType::Time),
        ("CAST(a AS TIMESTAMP)", DataType::Timestamp),
    ];
    for (sql, expected) in cases {
        let FunctionCall::Cast { data_type, .. } = parse_call(sql) else {
            panic!("expected CAST for {sql}");
        };
        assert_eq!(data_type, expected, "{sql}");
    }
    round_trip("SELECT CAST(balance AS DOUBLE) FROM accounts");
}

#[test]
fn cast_rejects_unknown_type() {
    let err = parse_err("SELECT CAST(a AS DATETIME)");
    assert_eq!(err.expected, vec!["data type"]);
}

// ===================================================================
// Special forms
// ===================================================================

#[test]
fn extract() {
    let FunctionCall::Extract { part, .. } = parse_call("EXTRACT(YEAR FROM birthdate)") else {
        panic!("expected EXTRACT");
    };
    assert_eq!(part, TimeUnit::Year);
    let FunctionCall::Extract { part, .. } = parse_call("extract(day_hour from ts)") else {
        panic!("expected EXTRACT");
    };
    assert_eq!(part, TimeUnit::DayHour);
    round_trip("SELECT EXTRACT(YEAR_MONTH FROM birthdate) FROM accounts");
}

#[test]
fn get_format() {
    let FunctionCall::GetFormat { format_type, .. } = parse_call("GET_FORMAT(DATE, 'USA')")
    else {
        panic!("expected GET_FORMAT");
    };
    assert_eq!(format_type, GetFormatType::Date);
    round_trip("SELECT GET_FORMAT(DATETIME, 'ISO')");
}

#[test]
fn timestampadd_and_timestampdiff() {
    let FunctionCall::Timestamp { function, unit, .. } =
        parse_call("TIMESTAMPADD(MINUTE, 5, TIMESTAMP '2020-01-01 00:00:00')")
    else {
        panic!("expected TIMESTAMPADD");
    };
    assert_eq!(function, TimestampFunction::Add);
    assert_eq!(unit, TimeUnit::Minute);

    let FunctionCall::Timestamp { function, .. } = parse_call("timestampdiff(DAY, a, b)") else {
        panic!("expected TIMESTAMPDIFF");
    };
    assert_eq!(function, TimestampFunction::Diff);
    round_trip("SELECT TIMESTAMPDIFF(QUARTER, start, finish) FROM t");
}

#[test]
fn timestamp_functions_reject_compound_units() {
    let err = parse_err("SELECT TIMESTAMPADD(DAY_HOUR, 1, ts)");
    assert_eq!(err.expected, vec!["simple interval unit"]);
}

#[test]
fn position() {
    let FunctionCall::Position { needle, haystack } = parse_call("POSITION('world' IN greeting)")
    else {
        panic!("expected POSITION");
    };
    assert_eq!(needle.to_string(), "'world'");
    assert_eq!(*haystack, Expr::column("greeting"));
    round_trip("SELECT POSITION('world' IN greeting) FROM t");
}

#[test]
fn position_needle_may_use_in_when_parenthesized() {
    let FunctionCall::Position { needle, .. } = parse_call("POSITION((a IN (1, 2)) IN b)") else {
        panic!("expected POSITION");
    };
    assert_eq!(needle.to_string(), "(a IN (1, 2))");
}

#[test]
fn in_predicate_inside_position_haystack() {
    let FunctionCall::Position { haystack, .. } = parse_call("POSITION(a IN b IN (1))") else {
        panic!("expected POSITION");
    };
    assert_eq!(haystack.to_string(), "b IN (1)");
}

// ===================================================================
// Aggregates
// ===================================================================

#[test]
fn count_shapes() {
    let shapes: Vec<_> = ["COUNT(*)", "COUNT(age)", "COUNT(DISTINCT age)"]
        .into_iter()
        .map(|sql| match parse_call(sql) {
            FunctionCall::Aggregate(call) => call.function,
            other => panic!("expected aggregate for {sql}, got {other:?}"),
        })
        .collect();
    assert_eq!(shapes[0], AggregateFunction::CountStar);
    assert!(matches!(
        &shapes[1],
        AggregateFunction::Regular {
            name: Keyword::Count,
            ..
        }
    ));
    assert!(matches!(&shapes[2], AggregateFunction::DistinctCount(_)));
    round_trip("SELECT COUNT(*), COUNT(age), COUNT(DISTINCT age) FROM accounts");
}

#[test]
fn statistical_aggregates() {
    for sql in [
        "AVG(x)",
        "SUM(x)",
        "MIN(x)",
        "MAX(x)",
        "VAR_POP(x)",
        "VAR_SAMP(x)",
        "VARIANCE(x)",
        "STD(x)",
        "STDDEV(x)",
        "STDDEV_POP(x)",
        "STDDEV_SAMP(x)",
    ] {
        assert!(
            matches!(parse_call(sql), FunctionCall::Aggregate(_)),
            "{sql}"
        );
    }
}

#[test]
fn aggregate_with_filter() {
    let FunctionCall::Aggregate(call) = parse_call("AVG(balance) FILTER(WHERE age > 30)") else {
        panic!("expected aggregate");
    };
    assert!(call.filter.is_some());
    assert!(call.order_by.is_empty());
    round_trip("SELECT AVG(balance) FILTER(WHERE age > 30) FROM accounts");
}

#[test]
fn aggregate_with_order_by_and_filter() {
    let FunctionCall::Aggregate(call) =
        parse_call("COUNT(*) ORDER BY age DESC FILTER(WHERE age > 30)")
    else {
        panic!("expected aggregate");
    };
    assert_eq!(call.order_by.len(), 1);
    assert_eq!(call.order_by[0].direction, OrderDirection::Desc);
    assert!(call.filter.is_some());
    round_trip("SELECT COUNT(*) ORDER BY age DESC FILTER(WHERE age > 30) FROM accounts");
}

#[test]
fn aggregate_filter_must_close() {
    let err = parse_err("SELECT COUNT(*) FILTER(WHERE a > 1");
    assert_eq!(err.kind, ParseErrorKind::UnterminatedConstruct);
}

// ===================================================================
// Window functions
// ===================================================================

#[test]
fn ranking_window() {
    let FunctionCall::Window(call) =
        parse_call("ROW_NUMBER() OVER (PARTITION BY state ORDER BY age DESC)")
    else {
        panic!("expected window");
    };
    assert!(matches!(
        call.function,
        WindowFunction::Ranking {
            name: Keyword::RowNumber,
            ..
        }
    ));
    assert_eq!(call.over.partition_by, vec![Expr::column("state")]);
    assert_eq!(call.over.order_by.len(), 1);
    round_trip("SELECT ROW_NUMBER() OVER (PARTITION BY state ORDER BY age DESC) FROM accounts");
}

#[test]
fn aggregate_window() {
    let FunctionCall::Window(call) = parse_call("SUM(balance) OVER (PARTITION BY state)") else {
        panic!("expected window");
    };
    assert!(matches!(call.function, WindowFunction::Aggregate(_)));
    assert!(call.over.order_by.is_empty());
    round_trip("SELECT SUM(balance) OVER (PARTITION BY state) FROM accounts");
}

#[test]
fn empty_over_clause() {
    let FunctionCall::Window(call) = parse_call("RANK() OVER ()") else {
        panic!("expected window");
    };
    assert!(call.over.partition_by.is_empty());
    assert!(call.over.order_by.is_empty());
    round_trip("SELECT DENSE_RANK() OVER () FROM accounts");
}

#[test]
fn ranking_function_requires_over() {
    let err = parse_err("SELECT RANK() FROM accounts");
    assert_eq!(err.expected, vec!["OVER"]);
}

// ===================================================================
// HIGHLIGHT
// ===================================================================

#[test]
fn highlight_field() {
    let FunctionCall::Highlight { field, args } = parse_call("highlight(address)") else {
        panic!("expected HIGHLIGHT");
    };
    assert_eq!(field.to_string(), "address");
    assert!(args.is_empty());
}

#[test]
fn highlight_with_tags() {
    let FunctionCall::Highlight { field, args } =
        parse_call("HIGHLIGHT('*', pre_tags = '<b>', post_tags = '</b>')")
    else {
        panic!("expected HIGHLIGHT");
    };
    assert_eq!(field, RelevanceField::String("*".into()));
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].name, HighlightArgName::PreTags);
    assert_eq!(args[1].value, "</b>");
    round_trip("SELECT HIGHLIGHT('*', pre_tags = '<b>', post_tags = '</b>') FROM accounts");
}

#[test]
fn highlight_rejects_other_options() {
    let err = parse_err("SELECT HIGHLIGHT(title, boost = 2)");
    assert_eq!(err.expected, vec!["PRE_TAGS", "POST_TAGS"]);
}
