//! Plain-text report assembly.
//!
//! Every report follows the same frame: a title and a dash rule, a metrics
//! block, an optional messages block, and a closing elapsed-time line.
//! [`ReportBuilder`] provides those pieces; the three `*_report` functions
//! fix the exact layout for each pipeline. The output is compared
//! byte-for-byte by downstream checks, so wording, rule widths, and blank
//! lines must not drift.

use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::radix::Conversion;
use crate::stats::{self, Summary};
use std::fmt;
use std::time::Duration;

pub const STATISTICS_TITLE: &str = "DESCRIPTIVE STATISTICS (POPULATION)";
pub const CONVERSION_TITLE: &str = "NUMBER CONVERSION RESULTS";
pub const WORD_COUNT_TITLE: &str = "WORD COUNT RESULTS";

const STATISTICS_RULE_WIDTH: usize = 33;
const CONVERSION_RULE_WIDTH: usize = 25;
const WORD_COUNT_RULE_WIDTH: usize = 18;

const ERRORS_HEADER: &str = "Errors found while reading the file (execution continued):";
const NO_DATA_ERRORS_HEADER: &str = "Errors found while reading the file:";
const MESSAGES_HEADER: &str = "Messages while reading the file (execution continued):";
const NO_NUMERIC_DATA: &str = "No valid numeric data found. Cannot compute statistics.";

/// A finished report. Lines are joined with `\n` and there is no trailing
/// newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Accumulates report lines; [`ReportBuilder::finish`] seals them.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title line followed by a rule of `rule_width` dashes.
    #[must_use]
    pub fn heading(mut self, title: &str, rule_width: usize) -> Self {
        self.lines.push(title.to_owned());
        self.lines.push("-".repeat(rule_width));
        self
    }

    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn blank(self) -> Self {
        self.line("")
    }

    /// `header`, every message, then a blank line, unconditionally.
    #[must_use]
    pub fn section(self, header: &str, messages: &[String]) -> Self {
        self.line(header).lines(messages.iter().cloned()).blank()
    }

    /// Like [`Self::section`] but omitted entirely when `messages` is empty.
    #[must_use]
    pub fn optional_section(self, header: &str, messages: &[String]) -> Self {
        if messages.is_empty() {
            self
        } else {
            self.section(header, messages)
        }
    }

    /// Append the elapsed-time footer and produce the report.
    pub fn finish(self, elapsed: Duration) -> Report {
        let mut lines = self.lines;
        lines.push(format!("Elapsed time (seconds): {}", format_elapsed(elapsed)));
        Report { lines }
    }
}

/// Seconds with exactly six decimal places.
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}", elapsed.as_secs_f64())
}

/// Shortest round-trip rendering of a float, in the conventional style:
/// at least one fractional digit (`20.0`), scientific notation below `1e-4`
/// and from `1e16` upward with a signed, two-digit exponent (`1e+16`,
/// `2.5e-07`), and `inf`/`-inf`/`nan` for non-finite values.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_owned();
    }

    // `Debug` already picks the shortest digits and the same notation cutoffs;
    // only the exponent spelling differs.
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Statistics report, or the no-data report when `values` is empty.
///
/// # Errors
///
/// Propagates a domain error from the standard deviation, which the
/// variance formula never triggers in practice.
pub fn statistics_report(values: &[f64], errors: &[String], elapsed: Duration) -> Result<Report> {
    if values.is_empty() {
        return Ok(no_numeric_data_report(errors, elapsed));
    }
    let summary = stats::describe(values)?;
    Ok(summary_report(&summary, errors, elapsed))
}

/// Metrics layout for an already computed [`Summary`].
pub fn summary_report(summary: &Summary, errors: &[String], elapsed: Duration) -> Report {
    let mode_line = match summary.mode {
        Some(mode) => format!("MODE: {}", format_float(mode)),
        None => "MODE: No mode.".to_owned(),
    };

    ReportBuilder::new()
        .heading(STATISTICS_TITLE, STATISTICS_RULE_WIDTH)
        .line(format!("COUNT: {}", summary.count))
        .line(format!("MEAN: {}", format_float(summary.mean)))
        .line(format!("MEDIAN: {}", format_float(summary.median)))
        .line(mode_line)
        .line(format!(
            "POPULATION STANDARD DEVIATION: {}",
            format_float(summary.std_dev)
        ))
        .line(format!(
            "POPULATION VARIANCE: {}",
            format_float(summary.variance)
        ))
        .blank()
        .optional_section(ERRORS_HEADER, errors)
        .finish(elapsed)
}

/// Short-circuit report for a numeric source without a single valid value.
/// The errors block is always present here, even when it lists nothing.
pub fn no_numeric_data_report(errors: &[String], elapsed: Duration) -> Report {
    ReportBuilder::new()
        .line(NO_NUMERIC_DATA)
        .blank()
        .section(NO_DATA_ERRORS_HEADER, errors)
        .finish(elapsed)
}

/// One `decimal -> binary | hex` line per conversion, in input order.
pub fn conversion_report(conversions: &[Conversion], errors: &[String], elapsed: Duration) -> Report {
    ReportBuilder::new()
        .heading(CONVERSION_TITLE, CONVERSION_RULE_WIDTH)
        .line("FORMAT: DECIMAL -> BINARY | HEX")
        .blank()
        .lines(
            conversions
                .iter()
                .map(|c| format!("{} -> {} | {}", c.value, c.binary, c.hex)),
        )
        .blank()
        .optional_section(ERRORS_HEADER, errors)
        .finish(elapsed)
}

/// Distinct-word total followed by `word: count` lines in ascending order.
pub fn word_count_report(
    freq: &FrequencyTable<String>,
    messages: &[String],
    elapsed: Duration,
) -> Report {
    ReportBuilder::new()
        .heading(WORD_COUNT_TITLE, WORD_COUNT_RULE_WIDTH)
        .line(format!("DISTINCT WORDS: {}", freq.len()))
        .blank()
        .lines(freq.iter().map(|(word, count)| format!("{word}: {count}")))
        .blank()
        .optional_section(MESSAGES_HEADER, messages)
        .finish(elapsed)
}
