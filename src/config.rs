use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CleanerError, Result};
use crate::pipeline::processing::email::EmailMatchMode;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub io: IoConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

/// Where the input and output tables live. The pipeline itself never sees
/// any of this; only the I/O adapters are built from it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    pub base_path: PathBuf,
    pub input: String,
    pub output: String,
    /// Skip the first row of the input table
    pub has_headers: bool,
    pub log_dir: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("Files"),
            input: "missing_headers.xls".to_string(),
            output: "address_output.csv".to_string(),
            has_headers: false,
            log_dir: "logs".to_string(),
        }
    }
}

impl IoConfig {
    pub fn input_path(&self) -> PathBuf {
        self.base_path.join(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_path.join(&self.output)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Map rows across the rayon thread pool instead of a plain loop
    pub parallel: bool,
    pub email_match: EmailMatchMode,
}

/// Row selection applied by the caller after enrichment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Only write rows whose email and phone both validated
    pub only_valid_contacts: bool,
    /// Drop rows whose address text could not be tokenized
    pub skip_unparsed_addresses: bool,
}

impl Config {
    /// Load configuration from a TOML file. Returns `None` when the file does
    /// not exist so the caller can fall back to defaults and say so once
    /// logging is up.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content).map(Some)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.io.input.trim().is_empty() {
            return Err(CleanerError::Config("io.input must not be empty".to_string()));
        }
        if config.io.output.trim().is_empty() {
            return Err(CleanerError::Config("io.output must not be empty".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.io.base_path, PathBuf::from("Files"));
        assert!(!config.pipeline.parallel);
        assert_eq!(config.pipeline.email_match, EmailMatchMode::Prefix);
        assert!(!config.output.only_valid_contacts);
    }

    #[test]
    fn test_sections_override_defaults() {
        let config = Config::from_toml(
            r#"
            [io]
            base_path = "/data/contacts"
            input = "march.csv"
            output = "march_clean.csv"
            has_headers = true

            [pipeline]
            parallel = true
            email_match = "full"

            [output]
            only_valid_contacts = true
            "#,
        )
        .unwrap();

        assert_eq!(config.io.input_path(), PathBuf::from("/data/contacts/march.csv"));
        assert_eq!(config.io.output_path(), PathBuf::from("/data/contacts/march_clean.csv"));
        assert!(config.io.has_headers);
        assert!(config.pipeline.parallel);
        assert_eq!(config.pipeline.email_match, EmailMatchMode::Full);
        assert!(config.output.only_valid_contacts);
        assert!(!config.output.skip_unparsed_addresses);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let result = Config::from_toml("[io]\ninput = \"  \"\n");
        assert!(matches!(result, Err(CleanerError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_reported_as_none() {
        assert!(Config::load("does/not/exist/config.toml").unwrap().is_none());
    }

    #[test]
    fn test_existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[io]\nlog_dir = \"run_logs\"\n").unwrap();

        let config = Config::load(&path).unwrap().unwrap();
        assert_eq!(config.io.log_dir, "run_logs");
        assert_eq!(config.io.input, "missing_headers.xls");
    }
}
