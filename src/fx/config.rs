//! Engine configuration

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Reject recovery ids other than 0/1 and high-s signatures
    pub strict_signatures: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            strict_signatures: true,
        }
    }
}

impl FxConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_fields_use_defaults() {
        assert_eq!(FxConfig::from_json_str("{}").unwrap(), FxConfig::default());
        assert!(FxConfig::default().strict_signatures);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strict_signatures": false }}"#).unwrap();

        let config = FxConfig::load(file.path()).unwrap();
        assert!(!config.strict_signatures);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            FxConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::IoError(_))
        ));
        assert!(matches!(
            FxConfig::from_json_str("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
