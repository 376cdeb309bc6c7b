use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use linereport::config::ReportConfig;
use linereport::pipeline::{self, PipelineKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linereport",
    about = "Tolerant batch reports over line-oriented text files"
)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory for the results file. Defaults to the current directory.
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count, mean, median, mode, standard deviation and variance of one number per line
    Stats {
        /// Input file with one number per line
        file: PathBuf,
    },
    /// Binary and hexadecimal forms of one integer per line
    Convert {
        /// Input file with one integer per line
        file: PathBuf,
    },
    /// Distinct words and their frequencies
    Words {
        /// Input text file
        file: PathBuf,
    },
}

impl Commands {
    fn split(self) -> (PipelineKind, PathBuf) {
        match self {
            Self::Stats { file } => (PipelineKind::Statistics, file),
            Self::Convert { file } => (PipelineKind::Conversion, file),
            Self::Words { file } => (PipelineKind::WordCount, file),
        }
    }
}

#[expect(clippy::print_stdout, reason = "the report is the program's output")]
pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(dir) = cli.output_dir {
        config.output_dir = Some(dir);
    }

    let (kind, input) = cli.command.split();
    if !input.exists() {
        anyhow::bail!("file not found -> {}", input.display());
    }

    let report = pipeline::run(kind, &input)
        .with_context(|| format!("Failed to run {} on {}", kind.name(), input.display()))?;
    println!("{report}");

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let out_path = pipeline::write_results(
        &config.output_dir_or(&cwd),
        kind.results_file(&config),
        &report,
    )
    .context("Failed to write results file")?;
    println!("\nResults file created: {}", out_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_subcommand_maps_to_pipeline() {
        let cli = Cli::try_parse_from(["linereport", "--output-dir", "out", "convert", "ints.txt"]);
        let Ok(cli) = cli else {
            panic!("arguments should parse");
        };
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(
            cli.command.split(),
            (PipelineKind::Conversion, PathBuf::from("ints.txt"))
        );
    }

    #[test]
    fn test_missing_file_argument_is_usage_error() {
        assert!(Cli::try_parse_from(["linereport", "stats"]).is_err());
    }
}
