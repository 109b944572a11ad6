//! Statement AST types.

use core::fmt;

use super::expression::write_quoted;
use super::{Expr, Ident, QualifiedName, display_separated};

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NullOrdering {
    /// Nulls first.
    First,
    /// Nulls last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The sort direction.
    pub direction: OrderDirection,
    /// Null ordering.
    pub nulls: Option<NullOrdering>,
}

impl OrderBy {
    /// Creates an ascending item with default null ordering.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: OrderDirection::Asc,
            nulls: None,
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.expr, self.direction.as_str())?;
        if let Some(nulls) = self.nulls {
            write!(f, " {}", nulls.as_str())?;
        }
        Ok(())
    }
}

/// `ALL` or `DISTINCT` after SELECT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetQuantifier {
    All,
    Distinct,
}

/// A projected expression with its optional alias.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectElement {
    /// The expression.
    pub expr: Expr,
    /// Optional alias (AS name).
    pub alias: Option<Ident>,
}

impl fmt::Display for SelectElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expr)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

/// The projection list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectClause {
    pub quantifier: Option<SetQuantifier>,
    /// Whether the list starts with `*`.
    pub wildcard: bool,
    /// Elements after the optional leading `*`.
    pub elements: Vec<SelectElement>,
}

impl SelectClause {
    /// Returns true for `SELECT DISTINCT`.
    #[must_use]
    pub const fn is_distinct(&self) -> bool {
        matches!(self.quantifier, Some(SetQuantifier::Distinct))
    }
}

impl fmt::Display for SelectClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        match self.quantifier {
            Some(SetQuantifier::All) => f.write_str("ALL ")?,
            Some(SetQuantifier::Distinct) => f.write_str("DISTINCT ")?,
            None => {}
        }
        if self.wildcard {
            f.write_str("*")?;
            if !self.elements.is_empty() {
                f.write_str(", ")?;
            }
        }
        display_separated(f, &self.elements, ", ")
    }
}

/// The source of a query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    /// An index or table, optionally aliased.
    Table {
        name: QualifiedName,
        alias: Option<Ident>,
    },
    /// `( query ) [AS] alias`
    Subquery {
        query: Box<QuerySpec>,
        alias: Ident,
    },
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table { name, alias } => {
                write!(f, "{name}")?;
                if let Some(alias) = alias {
                    write!(f, " AS {alias}")?;
                }
                Ok(())
            }
            Self::Subquery { query, alias } => write!(f, "({query}) AS {alias}"),
        }
    }
}

/// FROM and the clauses that can only follow it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FromClause {
    pub relation: Relation,
    pub where_clause: Option<Expr>,
    pub group_by: Vec<Expr>,
    pub having: Option<Expr>,
    pub order_by: Vec<OrderBy>,
}

impl FromClause {
    /// Creates a FROM clause without filters, grouping or ordering.
    #[must_use]
    pub const fn new(relation: Relation) -> Self {
        Self {
            relation,
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
        }
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.relation)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            display_separated(f, &self.group_by, ", ")?;
        }
        if let Some(having) = &self.having {
            write!(f, " HAVING {having}")?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            display_separated(f, &self.order_by, ", ")?;
        }
        Ok(())
    }
}

/// `LIMIT [offset,] limit` or `LIMIT limit OFFSET offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitClause {
    pub offset: Option<u64>,
    pub limit: u64,
}

impl fmt::Display for LimitClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.limit)?;
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        Ok(())
    }
}

/// A SELECT query.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuerySpec {
    pub select: SelectClause,
    pub from: Option<FromClause>,
    pub limit: Option<LimitClause>,
}

impl fmt::Display for QuerySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        if let Some(from) = &self.from {
            write!(f, " {from}")?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " {limit}")?;
        }
        Ok(())
    }
}

/// The pattern after `LIKE` in SHOW and DESCRIBE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShowPattern {
    /// Unquoted index pattern such as `logs-2020*` or `acc%`.
    Compatible(String),
    /// Quoted pattern.
    String(String),
}

impl ShowPattern {
    /// Returns the pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Compatible(s) | Self::String(s) => s,
        }
    }
}

impl fmt::Display for ShowPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible(s) => f.write_str(s),
            Self::String(s) => write_quoted(f, s),
        }
    }
}

/// `TABLES LIKE pattern`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableFilter {
    pub pattern: ShowPattern,
}

/// `COLUMNS LIKE pattern`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnFilter {
    pub pattern: ShowPattern,
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statement {
    /// SELECT query.
    Select(QuerySpec),
    /// `SHOW TABLES LIKE pattern`
    Show(TableFilter),
    /// `DESCRIBE TABLES LIKE pattern [COLUMNS LIKE pattern]`
    Describe {
        tables: TableFilter,
        columns: Option<ColumnFilter>,
    },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(query) => write!(f, "{query}"),
            Self::Show(tables) => write!(f, "SHOW TABLES LIKE {}", tables.pattern),
            Self::Describe { tables, columns } => {
                write!(f, "DESCRIBE TABLES LIKE {}", tables.pattern)?;
                if let Some(columns) = columns {
                    write!(f, " COLUMNS LIKE {}", columns.pattern)?;
                }
                Ok(())
            }
        }
    }
}
