// src/config.rs
use std::path::PathBuf;

/// Directory scanned for compressed campaign tables.
pub const INPUT_DIR: &str = "files/input";
/// Directory receiving the three normalized tables.
pub const OUTPUT_DIR: &str = "files/output";
/// Glob matched against file names inside `INPUT_DIR`.
pub const INPUT_PATTERN: &str = "*.csv.zip";

pub const CLIENT_FILE: &str = "client.csv";
pub const CAMPAIGN_FILE: &str = "campaign.csv";
pub const ECONOMICS_FILE: &str = "economics.csv";

/// Where to read from and where to write to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(INPUT_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
            pattern: INPUT_PATTERN.to_string(),
        }
    }
}

impl Config {
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn client_path(&self) -> PathBuf {
        self.output_dir.join(CLIENT_FILE)
    }

    pub fn campaign_path(&self) -> PathBuf {
        self.output_dir.join(CAMPAIGN_FILE)
    }

    pub fn economics_path(&self) -> PathBuf {
        self.output_dir.join(ECONOMICS_FILE)
    }
}
