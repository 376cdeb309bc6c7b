//! # linereport - Tolerant Line-Oriented Batch Reports
//!
//! linereport reads a text file whose lines should hold numbers, integers,
//! or free-form prose, skips and records malformed lines without aborting,
//! and renders a fixed plain-text report for one of three pipelines:
//! descriptive statistics, base conversion, or word frequencies.
//!
//! ## Quick Start
//!
//! ```no_run
//! use linereport::pipeline::{self, PipelineKind};
//! use std::path::Path;
//!
//! # fn example() -> linereport::error::Result<()> {
//! let report = pipeline::run(PipelineKind::Statistics, Path::new("numbers.txt"))?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`parser`]: line-by-line parsing that records rejected lines
//! - [`stats`]: mean, median, mode, variance and standard deviation
//! - [`radix`]: binary and hexadecimal rendering by repeated division
//! - [`words`]: token normalization and word counting
//! - [`report`]: the exact report layouts
//! - [`pipeline`]: wiring a source file through one of the above
//! - [`error`]: error types and handling utilities
//!
//! ## Error Model
//!
//! Bad *content* never fails a run. Each rejected line becomes a
//! [`parser::ParseError`] that ends up in the report:
//!
//! ```
//! use linereport::pipeline;
//! use std::time::Instant;
//!
//! let report = pipeline::statistics("1\noops\n3", Instant::now()).map(|r| r.text());
//! assert!(report.is_ok_and(|text| text.contains("Line 2: invalid number 'oops' (skipped).")));
//! ```
//!
//! Only *source* problems (missing file, unreadable bytes) are returned as
//! [`error::ReportError`]. The word pipeline is the exception for decoding:
//! it reports a non-UTF-8 file as a message and counts nothing.

#![warn(clippy::all, rust_2018_idioms)]

pub mod config;
pub mod error;
pub mod frequency;
pub mod parser;
pub mod pipeline;
pub mod radix;
pub mod report;
pub mod source;
pub mod stats;
pub mod words;
