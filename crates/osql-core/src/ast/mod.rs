//! Abstract Syntax Tree (AST) types for OpenSearch SQL statements.
//!
//! Every node implements [`Display`](core::fmt::Display), rendering SQL that
//! parses back to an equal tree.

mod expression;
mod function;
mod name;
mod statement;
mod types;

use core::fmt;

pub use expression::{Atom, ComparisonOp, Expr, Literal, MathOp, Predicate};
pub use function::{
    AggregateCall, AggregateFunction, FunctionCall, HighlightArg, HighlightArgName,
    MultiMatchArgName, OverClause, RelevanceArg, RelevanceArgName, RelevanceField,
    RelevanceFunction, RelevanceShape, RelevanceValue, ScoreFunction, TimestampFunction, Weight,
    WeightedField, WindowCall, WindowFunction,
};
pub use name::{Ident, QualifiedName};
pub use statement::{
    ColumnFilter, FromClause, LimitClause, NullOrdering, OrderBy, OrderDirection, QuerySpec,
    Relation, SelectClause, SelectElement, SetQuantifier, ShowPattern, Statement, TableFilter,
};
pub use types::{DataType, GetFormatType, TimeUnit};

/// Writes `items` separated by `sep`.
pub(crate) fn display_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
