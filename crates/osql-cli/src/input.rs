//! Reading query text and splitting it into parse units.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Where the query text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// SQL passed on the command line.
    Inline(String),
    /// A file on disk.
    File(PathBuf),
    /// Standard input, selected with `--file -`.
    Stdin,
}

impl Source {
    /// Picks the source from the positional query and `--file`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NoInput`] when neither is given.
    pub fn from_args(query: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (query, file) {
            (Some(sql), _) => Ok(Self::Inline(sql)),
            (None, Some(path)) if path == Path::new("-") => Ok(Self::Stdin),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Err(CliError::NoInput),
        }
    }

    /// Reads the whole source.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if the file or stdin cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Inline(sql) => Ok(sql.clone()),
            Self::File(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            }),
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|source| CliError::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(text)
            }
        }
    }
}

/// One piece of input handed to the parser, with its 1-based first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Splits `text` into parse units.
///
/// In per-line mode every non-blank line is its own statement; otherwise the
/// whole text is one unit.
#[must_use]
pub fn units(text: &str, per_line: bool) -> Vec<Unit<'_>> {
    if !per_line {
        return vec![Unit { line: 1, text }];
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Unit {
            line: i + 1,
            text: line,
        })
        .collect()
}
