use thiserror::Error;

/// A syntax error from the json parser or the selector lexer/parser.
///
/// Carries enough context to point at the offending character: the
/// zero-based line and column, the text of the line the error occurred
/// on, and a description of what the parser expected there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error (line {line}:{column}): expected {expected}")]
pub struct SyntaxError {
    /// Zero-based line of the error.
    pub line: usize,
    /// Zero-based column of the error.
    pub column: usize,
    /// The full text of the offending line, without the newline.
    pub line_text: String,
    /// What the parser expected at this position.
    pub expected: String,
}

impl SyntaxError {
    /// Build a syntax error pointing at `position` in `input`.
    pub(crate) fn at(input: &[char], position: usize, expected: impl Into<String>) -> SyntaxError {
        let position = position.min(input.len());

        let mut line = 0;
        let mut line_start = 0;
        for (i, &ch) in input.iter().enumerate().take(position) {
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        let line_end = input[line_start..]
            .iter()
            .position(|&ch| ch == '\n')
            .map(|offset| line_start + offset)
            .unwrap_or(input.len());

        SyntaxError {
            line,
            column: position - line_start,
            line_text: input[line_start..line_end].iter().collect(),
            expected: expected.into(),
        }
    }
}

/// The parser matched a prefix of the input but not all of it, or an
/// internal invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ParseFailure {
    /// Short human-readable reason.
    pub reason: String,
}
