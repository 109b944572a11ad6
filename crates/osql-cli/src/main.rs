//! osql CLI
//!
//! Parses OpenSearch SQL and prints the result as canonical SQL, a debug AST
//! or JSON.

mod error;
mod input;
mod render;

use std::path::PathBuf;

use clap::Parser as ClapParser;
use osql_core::parser::DEFAULT_MAX_DEPTH;
use osql_core::{Parser, ParserConfig};
use tracing::{Level, debug, error, info};
use tracing_subscriber::FmtSubscriber;

use crate::error::{CliError, Result};
use crate::input::{Source, Unit, units};
use crate::render::{Format, render, snippet};

/// Parse OpenSearch SQL statements.
#[derive(ClapParser)]
#[command(name = "osql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL to parse.
    query: Option<String>,

    /// Read SQL from a file instead (`-` for stdin).
    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Sql)]
    format: Format,

    /// Maximum expression nesting depth.
    #[arg(long, env = "OSQL_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Treat every non-blank line as a separate statement.
    #[arg(long)]
    per_line: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ParserConfig::new().with_max_depth(cli.max_depth);
    let source = Source::from_args(cli.query, cli.file)?;
    let text = source.read()?;
    let units = units(&text, cli.per_line);
    debug!(units = units.len(), max_depth = config.max_depth, "parsing input");

    if !cli.per_line {
        for unit in &units {
            if let Some(output) = parse_unit(unit, config, cli.format)? {
                println!("{output}");
            }
        }
        return Ok(());
    }

    let mut failed = 0;
    for unit in &units {
        match parse_unit(unit, config, cli.format) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(e) => {
                error!("{e}");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(CliError::Failures {
            failed,
            total: units.len(),
        }
        .into());
    }
    info!("parsed {} statements", units.len());
    Ok(())
}

/// Parses one unit and renders it; empty statements render as nothing.
fn parse_unit(unit: &Unit<'_>, config: ParserConfig, format: Format) -> Result<Option<String>> {
    let mut parser = Parser::with_config(unit.text, config);
    match parser.parse_root() {
        Ok(Some(statement)) => render(&statement, format).map(Some),
        Ok(None) => {
            debug!(line = unit.line, "empty statement");
            Ok(None)
        }
        Err(source) => Err(CliError::Parse {
            line: unit.line + line_of(unit.text, source.span.start),
            snippet: snippet(unit.text, source.span),
            source,
        }),
    }
}

/// Number of line breaks before `offset`.
fn line_of(text: &str, offset: usize) -> usize {
    text.as_bytes()[..offset.min(text.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}
