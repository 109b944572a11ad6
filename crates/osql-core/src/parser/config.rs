//! Parser configuration.

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Options controlling a [`Parser`](super::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of expressions (parentheses, function arguments,
    /// `NOT` chains, subqueries). Deeper input fails with
    /// [`ParseErrorKind::RecursionLimitExceeded`](super::ParseErrorKind)
    /// instead of exhausting the stack.
    pub max_depth: usize,
}

impl ParserConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
