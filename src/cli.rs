//! CLI support for jsq.
//!
//! Wires the json parser, the selector parser and the evaluator into
//! the run pipeline used by the binary, and renders errors with the
//! offending source line for terminals.

use std::fs;
use std::io::{self, Read};

use thiserror::Error;
use tracing::debug;

use crate::error::SyntaxError;
use crate::evaluator::ApplyError;
use crate::json::parse_json;
use crate::output::{to_json, to_json_pretty};
use crate::parser::{parse_selectors, ParseError};

/// Errors that can occur while running the tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// Could not read the input file or stdin
    #[error("error reading input: {0}")]
    Input(#[from] io::Error),

    /// The json input did not parse
    #[error("failed to parse json: {}", render_syntax(.0))]
    Json(SyntaxError),

    /// The selector program did not parse
    #[error("failed to parse selectors: {}", render_parse(.0))]
    Selectors(#[from] ParseError),

    /// The selectors could not be applied to the json
    #[error("failed to apply selectors, maybe they don't match the json structure?\n{0}")]
    Apply(#[from] ApplyError),
}

/// Renders a syntax error together with the offending line and a caret
/// pointing at the column.
fn render_syntax(error: &SyntaxError) -> String {
    format!(
        "{}\n  {}\n  {}^",
        error,
        error.line_text,
        " ".repeat(error.column)
    )
}

fn render_parse(error: &ParseError) -> String {
    match error {
        ParseError::Syntax(e) => render_syntax(e),
        ParseError::Failure(e) => e.to_string(),
    }
}

/// Options for one run of the tool.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The selector program to apply
    pub selectors: String,
    /// Json file to read; stdin is used when absent
    pub file: Option<String>,
    /// Stop after parsing the json and the selectors
    pub only_parse: bool,
    /// Pretty-print the output document
    pub pretty: bool,
}

/// Result of a run.
#[derive(Debug)]
pub enum RunResult {
    /// Both inputs parsed; evaluation was skipped on request
    Parsed,
    /// The serialized output document
    Output(String),
}

/// Reads the complete input file, or stdin when no file is given.
pub fn read_input(file: Option<&str>) -> Result<String, CliError> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            if atty::is(atty::Stream::Stdin) {
                eprintln!("reading json from stdin (pipe input or pass a file argument)");
            }
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Runs the full pipeline: read input, parse both sides, apply,
/// serialize.
pub fn run(options: &RunOptions) -> Result<RunResult, CliError> {
    let content = read_input(options.file.as_deref())?;

    let json = parse_json(&content).map_err(CliError::Json)?;
    let program = parse_selectors(&options.selectors)?;

    debug!("json content: {}", to_json(&json));
    debug!("selectors: {:?}", program);

    if options.only_parse {
        return Ok(RunResult::Parsed);
    }

    let output = program.apply(&json)?;
    let rendered = if options.pretty {
        to_json_pretty(&output)
    } else {
        to_json(&output)
    };
    Ok(RunResult::Output(rendered))
}
