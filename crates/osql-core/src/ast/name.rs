//! Identifiers and dotted names.

use core::fmt;

/// A single identifier segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    /// The name with quotes and escapes removed.
    pub value: String,
    /// Whether the name was written inside quotes.
    pub quoted: bool,
}

impl Ident {
    /// Creates an unquoted identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: false,
        }
    }

    /// Creates a quoted identifier.
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quoted: true,
        }
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            write!(f, "`{}`", self.value.replace('`', "``"))
        } else {
            f.write_str(&self.value)
        }
    }
}

/// A dot-separated identifier path such as `logs.request.status`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualifiedName {
    /// The segments, outermost first. Never empty.
    pub parts: Vec<Ident>,
}

impl QualifiedName {
    /// Creates a qualified name from its segments.
    #[must_use]
    pub const fn new(parts: Vec<Ident>) -> Self {
        Self { parts }
    }

    /// Builds an unquoted name from a dotted string.
    #[must_use]
    pub fn from_dotted(path: &str) -> Self {
        Self {
            parts: path.split('.').map(Ident::new).collect(),
        }
    }

    /// Returns the last segment.
    #[must_use]
    pub fn last(&self) -> Option<&Ident> {
        self.parts.last()
    }

    /// Returns the segments joined with dots, without quotes.
    #[must_use]
    pub fn to_dotted(&self) -> String {
        self.parts
            .iter()
            .map(|p| p.value.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::display_separated(f, &self.parts, ".")
    }
}
