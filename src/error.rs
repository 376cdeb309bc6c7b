//! Centralized error handling for linereport.
//!
//! Only *source* problems become a [`ReportError`]: a file that cannot be
//! found, read, or decoded, or a configuration file that does not parse.
//! Malformed lines inside an otherwise readable file are recorded as
//! [`crate::parser::ParseError`] values and never abort a run.
//!
//! ## The `From` Trait for Error Conversion
//!
//! `std::io::Error` and `serde_json::Error` convert automatically, so the
//! `?` operator works across the crate:
//!
//! ```no_run
//! use linereport::error::Result;
//!
//! fn read_source(path: &str) -> Result<Vec<u8>> {
//!     let bytes = std::fs::read(path)?;
//!     Ok(bytes)
//! }
//! ```
//!
//! ## Context Extension Trait
//!
//! [`ResultExt`] adds `.context()` to any compatible `Result`:
//!
//! ```no_run
//! use linereport::error::ResultExt as _;
//!
//! fn load() -> linereport::error::Result<String> {
//!     std::fs::read_to_string("numbers.txt").context("Failed to load numbers")
//! }
//! ```

use std::fmt;

/// Main error type for linereport operations.
#[derive(Debug)]
pub enum ReportError {
    /// I/O errors while reading a source or writing results
    Io(std::io::Error),

    /// The input path does not exist
    SourceNotFound(String),

    /// The input could not be decoded as UTF-8
    Decode(String),

    /// Configuration errors
    Config(String),

    /// A radix outside the supported `2..=16` range
    InvalidRadix(u32),

    /// Metrics were requested for an empty value sequence
    EmptyInput,

    /// A numeric result fell outside its mathematical domain
    Domain(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::SourceNotFound(path) => write!(f, "file not found -> {path}"),
            Self::Decode(path) => write!(f, "could not read {path} as UTF-8"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::InvalidRadix(base) => write!(f, "unsupported radix {base} (expected 2..=16)"),
            Self::EmptyInput => write!(f, "no values to summarise"),
            Self::Domain(msg) => write!(f, "math domain error: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for linereport operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with `msg` as a prefix.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped with the closure's message as a prefix.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ReportError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: ReportError = e.into();
            ReportError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: ReportError = e.into();
            ReportError::Other(format!("{}: {}", f(), err))
        })
    }
}
