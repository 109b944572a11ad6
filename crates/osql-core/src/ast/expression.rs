//! Expression AST types.
//!
//! Three layers mirror the three precedence domains of the grammar:
//! [`Expr`] holds the boolean connectives, [`Predicate`] the comparison and
//! postfix predicate chain, and [`Atom`] the arithmetic over primaries.

use core::fmt;

use super::{FunctionCall, QualifiedName, TimeUnit, display_separated};

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Literal {
    /// String literal, single- or double-quoted in the source.
    String(String),
    /// Integer literal with its sign folded in.
    Decimal(i64),
    /// Real literal with its sign folded in.
    Real(f64),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// `NULL`.
    Null,
    /// `DATE '…'` or `{d '…'}`.
    Date(String),
    /// `TIME '…'` or `{t '…'}`.
    Time(String),
    /// `TIMESTAMP '…'` or `{ts '…'}`.
    Timestamp(String),
    /// `INTERVAL expr unit`.
    Interval {
        /// The amount.
        value: Box<Expr>,
        /// The unit.
        unit: TimeUnit,
    },
}

/// Writes `s` as a single-quoted SQL string.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("'")?;
    for c in s.chars() {
        match c {
            '\'' => f.write_str("''")?,
            '\\' => f.write_str("\\\\")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("'")
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write_quoted(f, s),
            Self::Decimal(n) => write!(f, "{n}"),
            // Debug keeps a decimal point or exponent so the text lexes as a real.
            Self::Real(n) => write!(f, "{n:?}"),
            Self::Boolean(true) => f.write_str("TRUE"),
            Self::Boolean(false) => f.write_str("FALSE"),
            Self::Null => f.write_str("NULL"),
            Self::Date(s) => {
                f.write_str("DATE ")?;
                write_quoted(f, s)
            }
            Self::Time(s) => {
                f.write_str("TIME ")?;
                write_quoted(f, s)
            }
            Self::Timestamp(s) => {
                f.write_str("TIMESTAMP ")?;
                write_quoted(f, s)
            }
            Self::Interval { value, unit } => write!(f, "INTERVAL {value} {unit}"),
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    Eq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    /// `<>` or `!=`.
    NotEq,
}

impl ComparisonOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::NotEq => "<>",
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MathOp {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `DIV`
    IntDiv,
    /// `MOD`
    ModKeyword,
    /// `+`
    Add,
    /// `-`
    Sub,
}

impl MathOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::IntDiv => "DIV",
            Self::ModKeyword => "MOD",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    /// Returns the precedence tier (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod | Self::IntDiv | Self::ModKeyword => 2,
            Self::Add | Self::Sub => 1,
        }
    }
}

/// A boolean-level expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// `left OR right`
    Or { left: Box<Expr>, right: Box<Expr> },
    /// `left AND right`
    And { left: Box<Expr>, right: Box<Expr> },
    /// `NOT expr`
    Not(Box<Expr>),
    /// A predicate chain.
    Predicate(Predicate),
}

impl Expr {
    /// Wraps an atom as an expression.
    #[must_use]
    pub const fn atom(atom: Atom) -> Self {
        Self::Predicate(Predicate::Atom(atom))
    }

    /// Creates a column reference from a dotted path.
    #[must_use]
    pub fn column(path: &str) -> Self {
        Self::atom(Atom::Column(QualifiedName::from_dotted(path)))
    }

    /// Creates a constant.
    #[must_use]
    pub const fn literal(literal: Literal) -> Self {
        Self::atom(Atom::Constant(literal))
    }

    /// Returns the atom if this expression is nothing more than one.
    #[must_use]
    pub const fn as_atom(&self) -> Option<&Atom> {
        match self {
            Self::Predicate(Predicate::Atom(atom)) => Some(atom),
            _ => None,
        }
    }

    /// Returns the function call if this expression is a bare call.
    #[must_use]
    pub const fn as_function(&self) -> Option<&FunctionCall> {
        match self.as_atom() {
            Some(Atom::Function(call)) => Some(call),
            _ => None,
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or { left, right } => write!(f, "{left} OR {right}"),
            Self::And { left, right } => write!(f, "{left} AND {right}"),
            Self::Not(expr) => write!(f, "NOT {expr}"),
            Self::Predicate(p) => write!(f, "{p}"),
        }
    }
}

/// A predicate chain over atoms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Predicate {
    /// A bare atom.
    Atom(Atom),
    /// `left op right`
    Comparison {
        left: Box<Predicate>,
        op: ComparisonOp,
        right: Box<Predicate>,
    },
    /// `expr IS [NOT] NULL`
    IsNull { expr: Box<Predicate>, negated: bool },
    /// `expr [NOT] BETWEEN low AND high`
    Between {
        expr: Box<Predicate>,
        low: Box<Predicate>,
        high: Box<Predicate>,
        negated: bool,
    },
    /// `left [NOT] LIKE right`
    Like {
        left: Box<Predicate>,
        right: Box<Predicate>,
        negated: bool,
    },
    /// `left REGEXP right`
    Regexp {
        left: Box<Predicate>,
        right: Box<Predicate>,
    },
    /// `expr [NOT] IN (list)`
    In {
        expr: Box<Predicate>,
        list: Vec<Expr>,
        negated: bool,
    },
}

const fn not_prefix(negated: bool) -> &'static str {
    if negated {
        "NOT "
    } else {
        ""
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Comparison { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
            Self::IsNull { expr, negated } => write!(f, "{expr} IS {}NULL", not_prefix(*negated)),
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => write!(f, "{expr} {}BETWEEN {low} AND {high}", not_prefix(*negated)),
            Self::Like {
                left,
                right,
                negated,
            } => write!(f, "{left} {}LIKE {right}", not_prefix(*negated)),
            Self::Regexp { left, right } => write!(f, "{left} REGEXP {right}"),
            Self::In {
                expr,
                list,
                negated,
            } => {
                write!(f, "{expr} {}IN (", not_prefix(*negated))?;
                display_separated(f, list, ", ")?;
                f.write_str(")")
            }
        }
    }
}

/// An expression atom: a primary or arithmetic over primaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Atom {
    /// A constant.
    Constant(Literal),
    /// A column reference.
    Column(QualifiedName),
    /// A function call of any shape.
    Function(FunctionCall),
    /// `( expr )`
    Nested(Box<Expr>),
    /// `left op right`
    Math {
        left: Box<Atom>,
        op: MathOp,
        right: Box<Atom>,
    },
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(lit) => write!(f, "{lit}"),
            Self::Column(name) => write!(f, "{name}"),
            Self::Function(call) => write!(f, "{call}"),
            Self::Nested(expr) => write!(f, "({expr})"),
            Self::Math { left, op, right } => write!(f, "{left} {} {right}", op.as_str()),
        }
    }
}
