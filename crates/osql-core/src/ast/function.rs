//! Function call AST types.
//!
//! Every call shape the dialect supports has its own variant of
//! [`FunctionCall`]; the dispatch keyword that selected the shape is kept
//! where more than one keyword leads to it.

use core::fmt;

use super::expression::write_quoted;
use super::{
    DataType, Expr, GetFormatType, Literal, OrderBy, QualifiedName, TimeUnit, display_separated,
};
use crate::lexer::Keyword;

/// A function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FunctionCall {
    /// A math, date/time, text, flow-control, system or nested function.
    Scalar { name: Keyword, args: Vec<Expr> },
    /// `NESTED(path.*)`
    NestedAll { path: QualifiedName },
    /// An aggregate outside a window.
    Aggregate(AggregateCall),
    /// A ranking function or aggregate followed by `OVER (...)`.
    Window(WindowCall),
    /// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`
    Case {
        operand: Option<Box<Expr>>,
        when_clauses: Vec<(Expr, Expr)>,
        else_clause: Option<Box<Expr>>,
    },
    /// `CAST(expr AS type)`
    Cast {
        expr: Box<Expr>,
        data_type: DataType,
    },
    /// A full-text relevance function.
    Relevance(RelevanceFunction),
    /// `SCORE(relevance_fn [, weight])` and its aliases.
    Score(ScoreFunction),
    /// `HIGHLIGHT(field, pre_tags = .., post_tags = ..)`
    Highlight {
        field: RelevanceField,
        args: Vec<HighlightArg>,
    },
    /// `POSITION(needle IN haystack)`
    Position {
        needle: Box<Expr>,
        haystack: Box<Expr>,
    },
    /// `EXTRACT(part FROM expr)`
    Extract { part: TimeUnit, expr: Box<Expr> },
    /// `GET_FORMAT(type, expr)`
    GetFormat {
        format_type: GetFormatType,
        arg: Box<Expr>,
    },
    /// `TIMESTAMPADD(unit, a, b)` / `TIMESTAMPDIFF(unit, a, b)`
    Timestamp {
        function: TimestampFunction,
        unit: TimeUnit,
        first: Box<Expr>,
        second: Box<Expr>,
    },
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { name, args } => {
                write!(f, "{name}(")?;
                display_separated(f, args, ", ")?;
                f.write_str(")")
            }
            Self::NestedAll { path } => write!(f, "NESTED({path}.*)"),
            Self::Aggregate(call) => write!(f, "{call}"),
            Self::Window(call) => write!(f, "{call}"),
            Self::Case {
                operand,
                when_clauses,
                else_clause,
            } => {
                f.write_str("CASE")?;
                if let Some(operand) = operand {
                    write!(f, " {operand}")?;
                }
                for (when, then) in when_clauses {
                    write!(f, " WHEN {when} THEN {then}")?;
                }
                if let Some(else_clause) = else_clause {
                    write!(f, " ELSE {else_clause}")?;
                }
                f.write_str(" END")
            }
            Self::Cast { expr, data_type } => write!(f, "CAST({expr} AS {data_type})"),
            Self::Relevance(func) => write!(f, "{func}"),
            Self::Score(func) => write!(f, "{func}"),
            Self::Highlight { field, args } => {
                write!(f, "HIGHLIGHT({field}")?;
                for arg in args {
                    write!(f, ", {arg}")?;
                }
                f.write_str(")")
            }
            Self::Position { needle, haystack } => write!(f, "POSITION({needle} IN {haystack})"),
            Self::Extract { part, expr } => write!(f, "EXTRACT({part} FROM {expr})"),
            Self::GetFormat { format_type, arg } => write!(f, "GET_FORMAT({format_type}, {arg})"),
            Self::Timestamp {
                function,
                unit,
                first,
                second,
            } => write!(f, "{}({unit}, {first}, {second})", function.as_str()),
        }
    }
}

/// The call itself of an aggregate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AggregateFunction {
    /// `name(arg)`
    Regular { name: Keyword, arg: Box<Expr> },
    /// `COUNT(*)`
    CountStar,
    /// `COUNT(DISTINCT arg)`
    DistinctCount(Box<Expr>),
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular { name, arg } => write!(f, "{name}({arg})"),
            Self::CountStar => f.write_str("COUNT(*)"),
            Self::DistinctCount(arg) => write!(f, "COUNT(DISTINCT {arg})"),
        }
    }
}

/// An aggregate with its optional filter.
///
/// `order_by` is only ever non-empty together with `filter`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateCall {
    pub function: AggregateFunction,
    pub order_by: Vec<OrderBy>,
    /// `FILTER (WHERE expr)`
    pub filter: Option<Box<Expr>>,
}

impl AggregateCall {
    /// Creates an aggregate without ordering or filter.
    #[must_use]
    pub const fn plain(function: AggregateFunction) -> Self {
        Self {
            function,
            order_by: Vec::new(),
            filter: None,
        }
    }
}

impl fmt::Display for AggregateCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        if let Some(filter) = &self.filter {
            if !self.order_by.is_empty() {
                f.write_str(" ORDER BY ")?;
                display_separated(f, &self.order_by, ", ")?;
            }
            write!(f, " FILTER(WHERE {filter})")?;
        }
        Ok(())
    }
}

/// The function part of a window call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowFunction {
    /// `ROW_NUMBER`, `RANK` or `DENSE_RANK` with any arguments.
    Ranking { name: Keyword, args: Vec<Expr> },
    /// An aggregate used as a window function.
    Aggregate(AggregateFunction),
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ranking { name, args } => {
                write!(f, "{name}(")?;
                display_separated(f, args, ", ")?;
                f.write_str(")")
            }
            Self::Aggregate(func) => write!(f, "{func}"),
        }
    }
}

/// `OVER (PARTITION BY .. ORDER BY ..)`
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverClause {
    pub partition_by: Vec<Expr>,
    pub order_by: Vec<OrderBy>,
}

impl fmt::Display for OverClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OVER (")?;
        if !self.partition_by.is_empty() {
            f.write_str("PARTITION BY ")?;
            display_separated(f, &self.partition_by, ", ")?;
        }
        if !self.order_by.is_empty() {
            if !self.partition_by.is_empty() {
                f.write_str(" ")?;
            }
            f.write_str("ORDER BY ")?;
            display_separated(f, &self.order_by, ", ")?;
        }
        f.write_str(")")
    }
}

/// A window function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowCall {
    pub function: WindowFunction,
    pub over: OverClause,
}

impl fmt::Display for WindowCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.function, self.over)
    }
}

/// `TIMESTAMPADD` or `TIMESTAMPDIFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimestampFunction {
    Add,
    Diff,
}

impl TimestampFunction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "TIMESTAMPADD",
            Self::Diff => "TIMESTAMPDIFF",
        }
    }
}

/// The field operand of a relevance or highlight function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelevanceField {
    /// An unquoted or backtick-quoted field path.
    Name(QualifiedName),
    /// A field written as a string, which may hold wildcards.
    String(String),
    /// Any other constant given as the `fields` value of the keyword form.
    Constant(Literal),
}

impl fmt::Display for RelevanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::String(s) => write_quoted(f, s),
            Self::Constant(literal) => write!(f, "{literal}"),
        }
    }
}

/// A boost written after a field or as a score weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    Decimal(u64),
    Real(f64),
}

impl Weight {
    /// Returns the weight as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Decimal(n) => *n as f64,
            Self::Real(n) => *n,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Real(n) => write!(f, "{n:?}"),
        }
    }
}

/// A field with an optional boost, e.g. `title^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedField {
    pub field: RelevanceField,
    pub weight: Option<Weight>,
}

impl WeightedField {
    /// Creates a field without a boost.
    #[must_use]
    pub const fn new(field: RelevanceField) -> Self {
        Self {
            field,
            weight: None,
        }
    }
}

impl fmt::Display for WeightedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)?;
        if let Some(weight) = &self.weight {
            write!(f, "^{weight}")?;
        }
        Ok(())
    }
}

/// The value of a relevance query or named argument.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelevanceValue {
    /// A bare word such as `AUTO` or `standard`.
    Name(QualifiedName),
    Constant(Literal),
}

impl fmt::Display for RelevanceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Constant(lit) => write!(f, "{lit}"),
        }
    }
}

/// The name of a relevance argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelevanceArgName {
    /// One of the known option names (`boost`, `fuzziness`, ...).
    Keyword(Keyword),
    /// A name given as a string literal.
    Quoted(String),
}

impl fmt::Display for RelevanceArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => f.write_str(&kw.as_str().to_ascii_lowercase()),
            Self::Quoted(s) => write_quoted(f, s),
        }
    }
}

/// `name = value` inside a relevance function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelevanceArg {
    pub name: RelevanceArgName,
    pub value: RelevanceValue,
}

impl fmt::Display for RelevanceArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// The name of one of the two leading arguments in the keyword form of a
/// multi-field call, e.g. `multi_match(query = 'x', fields = 'title')`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MultiMatchArgName {
    Fields,
    Query,
    Quoted(String),
}

impl fmt::Display for MultiMatchArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields => f.write_str("fields"),
            Self::Query => f.write_str("query"),
            Self::Quoted(s) => write_quoted(f, s),
        }
    }
}

/// How a relevance function was written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelevanceShape {
    /// `query('text', ..)`
    NoField,
    /// `match(field, 'text', ..)`
    SingleField,
    /// `multi_match([f1, f2^2], 'text', ..)`
    MultiField,
    /// `multi_match(query = 'text', fields = f, ..)`
    MultiFieldByName {
        query_name: MultiMatchArgName,
        fields_name: MultiMatchArgName,
        /// Whether the field was written inside `[...]`.
        bracketed: bool,
    },
    /// `field = match_query('text', ..)`
    AltSingleField,
    /// `field = multi_match('text', ..)`
    AltMultiField,
}

/// A relevance function call.
///
/// `fields` is empty for [`RelevanceShape::NoField`] and has exactly one
/// entry for the single-field and alternate shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelevanceFunction {
    pub name: Keyword,
    pub shape: RelevanceShape,
    pub fields: Vec<WeightedField>,
    pub query: RelevanceValue,
    pub args: Vec<RelevanceArg>,
}

impl RelevanceFunction {
    fn write_args(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for arg in &self.args {
            write!(f, ", {arg}")?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for RelevanceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name;
        match &self.shape {
            RelevanceShape::NoField => write!(f, "{name}({}", self.query)?,
            RelevanceShape::SingleField => {
                write!(f, "{name}(")?;
                display_separated(f, &self.fields, ", ")?;
                write!(f, ", {}", self.query)?;
            }
            RelevanceShape::MultiField => {
                write!(f, "{name}([")?;
                display_separated(f, &self.fields, ", ")?;
                write!(f, "], {}", self.query)?;
            }
            RelevanceShape::MultiFieldByName {
                query_name,
                fields_name,
                bracketed,
            } => {
                write!(f, "{name}({query_name} = {}, {fields_name} = ", self.query)?;
                if *bracketed {
                    f.write_str("[")?;
                }
                display_separated(f, &self.fields, ", ")?;
                if *bracketed {
                    f.write_str("]")?;
                }
            }
            RelevanceShape::AltSingleField | RelevanceShape::AltMultiField => {
                display_separated(f, &self.fields, ", ")?;
                write!(f, " = {name}({}", self.query)?;
            }
        }
        self.write_args(f)
    }
}

/// `SCORE(relevance_fn [, weight])`, also spelled `SCOREQUERY`/`SCORE_QUERY`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreFunction {
    pub name: Keyword,
    pub function: Box<RelevanceFunction>,
    pub weight: Option<Weight>,
}

impl fmt::Display for ScoreFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}", self.name, self.function)?;
        if let Some(weight) = &self.weight {
            write!(f, ", {weight}")?;
        }
        f.write_str(")")
    }
}

/// Highlight tag options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighlightArgName {
    PreTags,
    PostTags,
}

impl HighlightArgName {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PreTags => "pre_tags",
            Self::PostTags => "post_tags",
        }
    }
}

/// `pre_tags = '<em>'` inside `HIGHLIGHT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HighlightArg {
    pub name: HighlightArgName,
    pub value: String,
}

impl fmt::Display for HighlightArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = ", self.name.as_str())?;
        write_quoted(f, &self.value)
    }
}
