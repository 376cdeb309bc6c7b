//! # linereport command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialise env_logger (RUST_LOG, stderr)
//!   ├─> Parse CLI arguments (clap)
//!   └─> Run the selected pipeline, print the report, write the results file
//! ```
//!
//! Set `RUST_LOG=debug` to see every skipped line on stderr; stdout only
//! ever carries the report.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = cli::Cli::parse();
    cli::run(cli)
}
