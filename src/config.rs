use crate::error::{ReportError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const STATISTICS_RESULTS_FILE: &str = "StatisticsResults.txt";
pub const CONVERSION_RESULTS_FILE: &str = "ConvertionResults.txt";
pub const WORD_COUNT_RESULTS_FILE: &str = "WordCountResults.txt";

/// Where reports are written and under which names.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory for results files; `None` means the current working directory.
    pub output_dir: Option<PathBuf>,
    pub statistics_file: String,
    pub conversion_file: String,
    pub word_count_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            statistics_file: STATISTICS_RESULTS_FILE.to_owned(),
            conversion_file: CONVERSION_RESULTS_FILE.to_owned(),
            word_count_file: WORD_COUNT_RESULTS_FILE.to_owned(),
        }
    }
}

impl ReportConfig {
    /// Read a JSON configuration file. Missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// names an empty results file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Config`] if any results filename is blank.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("statistics_file", &self.statistics_file),
            ("conversion_file", &self.conversion_file),
            ("word_count_file", &self.word_count_file),
        ];
        for (key, name) in names {
            if name.trim().is_empty() {
                return Err(ReportError::Config(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// Resolve the output directory, using `cwd` when none is configured.
    pub fn output_dir_or(&self, cwd: &Path) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}
