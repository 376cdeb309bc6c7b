//! Tolerant line-to-value parsing.
//!
//! [`parse_lines`] walks text one physical line at a time, trims each line,
//! and hands the result to a per-item validation function. A line that is
//! blank or fails validation is recorded as a [`ParseError`] and parsing
//! continues with the next line; nothing in the content of a file can abort
//! a run.
//!
//! ```
//! use linereport::parser::parse_numbers;
//!
//! let parsed = parse_numbers("10\nbad\n\n20");
//! assert_eq!(parsed.values, vec![10.0, 20.0]);
//! assert_eq!(parsed.messages(), vec![
//!     "Line 2: invalid number 'bad' (skipped).".to_owned(),
//!     "Line 3: empty line (skipped).".to_owned(),
//! ]);
//! ```

use num::BigInt;
use std::borrow::Cow;
use std::fmt;

/// Why a single line contributed no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The line was blank after trimming.
    EmptyLine,
    /// The line held text that is not a valid literal of `kind`.
    InvalidLiteral { kind: &'static str, text: String },
}

impl Rejection {
    pub fn invalid(kind: &'static str, text: &str) -> Self {
        Self::InvalidLiteral {
            kind,
            text: text.to_owned(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty line (skipped)"),
            Self::InvalidLiteral { kind, text } => write!(f, "invalid {kind} '{text}' (skipped)"),
        }
    }
}

/// A rejected line and its 1-indexed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line_number: usize,
    pub reason: Rejection,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}.", self.line_number, self.reason)
    }
}

/// Accepted values in input order, plus one error per rejected line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLines<T> {
    pub values: Vec<T>,
    pub errors: Vec<ParseError>,
}

impl<T> ParsedLines<T> {
    /// Errors rendered as report messages, in line order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parse every line of `text` with `validate`, recording failures.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, and are numbered from 1. Errors are emitted in strictly increasing line order.
pub fn parse_lines<T, F>(text: &str, mut validate: F) -> ParsedLines<T>
where
    F: FnMut(&str) -> Result<T, Rejection>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for (index, raw_line) in physical_lines(text).enumerate() {
        let line_number = index + 1;
        let trimmed = raw_line.trim();

        let outcome = if trimmed.is_empty() {
            Err(Rejection::EmptyLine)
        } else {
            validate(trimmed)
        };

        match outcome {
            Ok(value) => values.push(value),
            Err(reason) => {
                log::debug!("Skipping line {line_number}: {reason}");
                errors.push(ParseError {
                    line_number,
                    reason,
                });
            }
        }
    }

    ParsedLines { values, errors }
}

/// Split on `\n`, `\r\n` and `\r`. A final terminator does not start an
/// extra empty line.
fn physical_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        let Some(end) = current.find(['\r', '\n']) else {
            rest = None;
            return Some(current);
        };
        let (line, terminator) = current.split_at(end);
        let tail = terminator
            .strip_prefix("\r\n")
            .or_else(|| terminator.get(1..))
            .unwrap_or_default();
        rest = Some(tail).filter(|t| !t.is_empty());
        Some(line)
    })
}

/// Remove `_` digit separators. Every underscore must sit between two ASCII
/// digits (`1_000`), otherwise the literal is malformed.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(index, byte)| {
        *byte != b'_'
            || (index
                .checked_sub(1)
                .and_then(|before| bytes.get(before))
                .is_some_and(u8::is_ascii_digit)
                && bytes.get(index + 1).is_some_and(u8::is_ascii_digit))
    });
    separated.then(|| Cow::Owned(text.replace('_', "")))
}

/// One floating-point literal per line.
pub fn parse_numbers(text: &str) -> ParsedLines<f64> {
    parse_lines(text, |line| {
        strip_digit_separators(line)
            .and_then(|digits| digits.parse::<f64>().ok())
            .ok_or_else(|| Rejection::invalid("number", line))
    })
}

/// One integer literal per line, of any size.
pub fn parse_integers(text: &str) -> ParsedLines<BigInt> {
    parse_lines(text, |line| {
        strip_digit_separators(line)
            .and_then(|digits| digits.parse::<BigInt>().ok())
            .ok_or_else(|| Rejection::invalid("integer", line))
    })
}
