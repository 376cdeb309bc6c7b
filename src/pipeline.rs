//! Source → parse → compute → report, once per pipeline kind.
//!
//! The clock starts before the source is read. It stops once the lines are
//! parsed for the statistics and conversion pipelines, and once the words
//! are counted for the word pipeline; report assembly is never timed.

use crate::config::ReportConfig;
use crate::error::Result;
use crate::parser::{parse_integers, parse_numbers};
use crate::radix::Conversion;
use crate::report::{self, Report};
use crate::source;
use crate::words::{self, WordNormalizer};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineKind {
    Statistics,
    Conversion,
    WordCount,
}

impl PipelineKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Statistics => "statistics",
            Self::Conversion => "conversion",
            Self::WordCount => "word count",
        }
    }

    /// Results filename configured for this kind.
    pub fn results_file(self, config: &ReportConfig) -> &str {
        match self {
            Self::Statistics => &config.statistics_file,
            Self::Conversion => &config.conversion_file,
            Self::WordCount => &config.word_count_file,
        }
    }
}

/// Read `path` and build the report for `kind`.
///
/// # Errors
///
/// Returns a source error when the file is missing or unreadable. The
/// statistics and conversion pipelines also fail on non-UTF-8 input; the
/// word pipeline reports that as a message instead.
pub fn run(kind: PipelineKind, path: &Path) -> Result<Report> {
    let start = Instant::now();
    log::info!("Running {} pipeline on {}", kind.name(), path.display());

    match kind {
        PipelineKind::Statistics => statistics(&source::read_text(path)?, start),
        PipelineKind::Conversion => Ok(conversion(&source::read_text(path)?, start)),
        PipelineKind::WordCount => Ok(word_count(
            &source::read_bytes(path)?,
            &WordNormalizer::default(),
            start,
        )),
    }
}

/// # Errors
///
/// Only a standard-deviation domain error, which valid input cannot cause.
pub fn statistics(text: &str, start: Instant) -> Result<Report> {
    let parsed = parse_numbers(text);
    let elapsed = start.elapsed();
    log::info!(
        "Parsed {} numbers, skipped {} lines",
        parsed.values.len(),
        parsed.errors.len()
    );
    report::statistics_report(&parsed.values, &parsed.messages(), elapsed)
}

pub fn conversion(text: &str, start: Instant) -> Report {
    let parsed = parse_integers(text);
    let elapsed = start.elapsed();
    log::info!(
        "Parsed {} integers, skipped {} lines",
        parsed.values.len(),
        parsed.errors.len()
    );

    let conversions: Vec<Conversion> = parsed.values.iter().cloned().map(Conversion::of).collect();
    report::conversion_report(&conversions, &parsed.messages(), elapsed)
}

pub fn word_count(bytes: &[u8], normalizer: &WordNormalizer, start: Instant) -> Report {
    let scan = words::scan_words(bytes, normalizer);
    let freq = words::count_frequencies(&scan.words);
    let elapsed = start.elapsed();
    log::info!(
        "Counted {} words, {} distinct",
        freq.total(),
        freq.len()
    );
    report::word_count_report(&freq, &scan.messages, elapsed)
}

/// Overwrite `dir/file_name` with the report text, creating `dir` first.
///
/// # Errors
///
/// Returns an I/O error if the directory or file cannot be written.
pub fn write_results(dir: &Path, file_name: &str, report: &Report) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let out_path = dir.join(file_name);
    std::fs::write(&out_path, report.text())?;
    log::debug!("Wrote {}", out_path.display());
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_file_per_kind() {
        let config = ReportConfig::default();
        assert_eq!(
            PipelineKind::Statistics.results_file(&config),
            "StatisticsResults.txt"
        );
        assert_eq!(
            PipelineKind::Conversion.results_file(&config),
            "ConvertionResults.txt"
        );
        assert_eq!(
            PipelineKind::WordCount.results_file(&config),
            "WordCountResults.txt"
        );
    }

    #[test]
    fn test_statistics_from_text() -> Result<()> {
        let report = statistics("10\nbad\n20\n\n30\n", Instant::now())?;
        let lines = report.lines();
        assert_eq!(lines.get(2).map(String::as_str), Some("COUNT: 3"));
        assert_eq!(lines.get(3).map(String::as_str), Some("MEAN: 20.0"));
        assert_eq!(lines.get(4).map(String::as_str), Some("MEDIAN: 20.0"));
        assert_eq!(lines.get(5).map(String::as_str), Some("MODE: No mode."));
        assert_eq!(
            lines.get(7).map(String::as_str),
            Some("POPULATION VARIANCE: 100.0")
        );
        assert!(lines.contains(&"Line 2: invalid number 'bad' (skipped).".to_owned()));
        assert!(lines.contains(&"Line 4: empty line (skipped).".to_owned()));
        Ok(())
    }

    #[test]
    fn test_conversion_keeps_input_order() {
        let report = conversion("16\n-1\n2\n", Instant::now());
        let body: Vec<&str> = report
            .lines()
            .iter()
            .map(String::as_str)
            .skip(4)
            .take(3)
            .collect();
        assert_eq!(body, vec!["16 -> 10000 | 10", "-1 -> -1 | -1", "2 -> 10 | 2"]);
    }

    fn line(report: &Report, index: usize) -> Option<&str> {
        report.lines().get(index).map(String::as_str)
    }

    #[test]
    fn test_statistics_nan_lines_have_no_mode() -> Result<()> {
        let report = statistics("nan\nnan\n1", Instant::now())?;
        assert_eq!(line(&report, 2), Some("COUNT: 3"));
        assert_eq!(line(&report, 5), Some("MODE: No mode."));
        Ok(())
    }

    #[test]
    fn test_digit_separators_in_both_numeric_pipelines() -> Result<()> {
        let report = statistics("1_000\n2", Instant::now())?;
        assert_eq!(line(&report, 2), Some("COUNT: 2"));
        assert_eq!(line(&report, 3), Some("MEAN: 501.0"));

        let report = conversion("1_000", Instant::now());
        assert_eq!(line(&report, 4), Some("1000 -> 1111101000 | 3E8"));
        Ok(())
    }

    #[test]
    fn test_carriage_return_separates_values() -> Result<()> {
        let report = statistics("1\r2", Instant::now())?;
        assert_eq!(line(&report, 2), Some("COUNT: 2"));
        assert!(!report.text().contains("invalid number"));
        Ok(())
    }

    #[test]
    fn test_conversion_beyond_native_widths() {
        let report = conversion("340282366920938463463374607431768211456", Instant::now());
        assert_eq!(
            line(&report, 4),
            Some(
                format!(
                    "340282366920938463463374607431768211456 -> 1{} | 1{}",
                    "0".repeat(128),
                    "0".repeat(32)
                )
                .as_str()
            )
        );
        assert!(!report.text().contains("invalid integer"));
    }

    #[test]
    fn test_word_count_decode_failure_still_reports() {
        let report = word_count(b"\xc3\x28", &WordNormalizer::default(), Instant::now());
        let text = report.text();
        assert!(text.contains("DISTINCT WORDS: 0"));
        assert!(text.contains("File encoding error: could not read as UTF-8."));
    }
}
