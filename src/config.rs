// src/config.rs
// Installation configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{InstallerError, InstallerResult};

/// Main installation configuration structure
///
/// The defaults are the fixed production values; nothing at runtime overrides
/// them. The struct exists so the console controller and the install action
/// receive their target explicitly and tests can point it at a sandbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// Directory the marker file is installed into
    pub install_dir: PathBuf,

    /// Name of the marker file written inside `install_dir`
    pub marker_file_name: String,

    /// Exact content of the marker file (ASCII, no trailing newline)
    pub marker_content: String,

    /// Zephyr version shown in the install prompt; display only, never
    /// parsed or compared
    pub product_version: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            // The path is taken verbatim; no per-platform resolution happens.
            install_dir: PathBuf::from(r"C:\Program Files\Zephyr"),
            marker_file_name: "test.txt".to_string(),
            marker_content: "THIS IS A TEST FOR THE ZEPHINST PROGRAM.".to_string(),
            product_version: "0.9.8".to_string(),
        }
    }
}

impl InstallerConfig {
    /// Create configuration with a custom install directory
    pub fn with_install_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the marker file
    pub fn marker_path(&self) -> PathBuf {
        self.install_dir.join(&self.marker_file_name)
    }

    /// Validate configuration
    pub fn validate(&self) -> InstallerResult<()> {
        if self.install_dir.as_os_str().is_empty() {
            return Err(InstallerError::InvalidConfiguration(
                "Install directory not set".to_string(),
            ));
        }

        if self.marker_file_name.is_empty() {
            return Err(InstallerError::InvalidConfiguration(
                "Marker file name not set".to_string(),
            ));
        }

        Ok(())
    }

    /// Generate JSON configuration
    pub fn to_json(&self) -> InstallerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstallerConfig::default();
        assert_eq!(config.install_dir, PathBuf::from(r"C:\Program Files\Zephyr"));
        assert_eq!(config.marker_file_name, "test.txt");
        assert_eq!(config.product_version, "0.9.8");
    }

    #[test]
    fn test_marker_content_is_fixed_ascii() {
        let config = InstallerConfig::default();
        assert_eq!(
            config.marker_content,
            "THIS IS A TEST FOR THE ZEPHINST PROGRAM."
        );
        assert!(config.marker_content.is_ascii());
        assert!(!config.marker_content.ends_with('\n'));
    }

    #[test]
    fn test_config_validation() {
        let config = InstallerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_install_dir() {
        let config = InstallerConfig::with_install_dir("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_marker_name() {
        let mut config = InstallerConfig::default();
        config.marker_file_name = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_marker_path() {
        let config = InstallerConfig::with_install_dir("/tmp/zephyr");
        assert_eq!(config.marker_path(), PathBuf::from("/tmp/zephyr/test.txt"));
    }

    #[test]
    fn test_config_with_install_dir() {
        let config = InstallerConfig::with_install_dir("/custom/path");
        assert_eq!(config.install_dir, PathBuf::from("/custom/path"));
        assert_eq!(config.marker_file_name, "test.txt");
    }

    #[test]
    fn test_json_round_trip() {
        let config = InstallerConfig::default();
        let json = config.to_json().unwrap();
        assert!(json.contains("test.txt"));

        let parsed: InstallerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.marker_content, config.marker_content);
        assert_eq!(parsed.install_dir, config.install_dir);
    }
}
