//! # Configuration
//!
//! [`TrackerConfig`] gathers the knobs the trackers expose. Defaults match the
//! behavior of the classroom programs; a TOML file can override any subset of
//! them, and command-line flags override the file.
//!
//! ```toml
//! data_dir = "fundraiser-data"
//! orgs_file = "orgs.txt"
//! transaction_fee = 0.031
//! max_credential_prompts = 3
//! node_limit = 100
//! ```

use record_list::OrderedList;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or checking a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Directory receipts and the summary file are written to.
    pub data_dir: PathBuf,
    /// Summary file name, relative to `data_dir`.
    pub orgs_file: PathBuf,
    /// Credit card processing fee withheld from each donation (0.031 = 3.1%).
    pub transaction_fee: f64,
    /// Tries allowed per credential in the report mode; `0` means unlimited.
    pub max_credential_prompts: u32,
    /// Maximum number of records a list may hold; `None` means unbounded.
    pub node_limit: Option<usize>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            orgs_file: PathBuf::from("orgs.txt"),
            transaction_fee: 0.031,
            max_credential_prompts: 3,
            node_limit: None,
        }
    }
}

impl TrackerConfig {
    /// Reads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.transaction_fee) {
            return Err(ConfigError::Invalid(format!(
                "transaction_fee must be in [0, 1), got {}",
                self.transaction_fee
            )));
        }
        if self.node_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "node_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Where the end-of-program summaries are written.
    pub fn orgs_path(&self) -> PathBuf {
        self.data_dir.join(&self.orgs_file)
    }

    /// Resolves a per-organization file name against `data_dir`.
    pub fn data_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Creates an empty list honoring `node_limit`.
    pub fn new_list<P>(&self) -> OrderedList<P> {
        match self.node_limit {
            Some(limit) => OrderedList::with_node_limit(limit),
            None => OrderedList::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classroom_programs() {
        let config = TrackerConfig::default();
        assert_eq!(config.orgs_path(), PathBuf::from("./orgs.txt"));
        assert_eq!(config.transaction_fee, 0.031);
        assert_eq!(config.max_credential_prompts, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = TrackerConfig::from_toml_str("node_limit = 5\norgs_file = \"summary.txt\"").unwrap();
        assert_eq!(config.node_limit, Some(5));
        assert_eq!(config.orgs_file, PathBuf::from("summary.txt"));
        assert_eq!(config.transaction_fee, 0.031);
        assert_eq!(config.new_list::<()>().node_limit(), Some(5));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = TrackerConfig::from_toml_str("transaction_fee = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = TrackerConfig::from_toml_str("node_limit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = TrackerConfig::from_toml_str("node_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TrackerConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
