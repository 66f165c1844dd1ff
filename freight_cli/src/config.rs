//! Configuration management for the shell
//!
//! Config stored at: `<config_dir>/freight-class-pro/config.toml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use freight_core::errors::{FreightError, FreightResult};

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "freight-class-pro";

/// Application configuration. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the input draft is kept
    pub data_dir: Option<PathBuf>,

    /// Where generated PDFs are written
    pub output_dir: Option<PathBuf>,

    /// Default "Prepared By" value for reports
    pub prepared_by: Option<String>,

    /// `tracing` filter directives, e.g. "freight_core=debug"
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Platform config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. Without one, the platform config file is
    /// read when present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> FreightResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(AppConfig::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> FreightResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FreightError::config_error(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&content, path)
    }

    pub fn from_toml(content: &str, path: &Path) -> FreightResult<Self> {
        toml::from_str(content).map_err(|e| FreightError::config_error(path.display().to_string(), e.to_string()))
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, output_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml(
            r#"
data_dir = "/var/lib/freight"
output_dir = "reports"
prepared_by = "Dock 3"
log_filter = "freight_core=debug"
"#,
            Path::new("config.toml"),
        )
        .unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/var/lib/freight"));
        assert_eq!(config.output_dir(), PathBuf::from("reports"));
        assert_eq!(config.prepared_by.as_deref(), Some("Dock 3"));
        assert_eq!(config.log_filter.as_deref(), Some("freight_core=debug"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = AppConfig::from_toml("prepared_by = \"Ops\"", Path::new("config.toml")).unwrap();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.output_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("data_dir = [", Path::new("bad.toml")).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());

        let present = temp.path().join("config.toml");
        std::fs::write(&present, "output_dir = \"out\"").unwrap();
        let config = AppConfig::load(Some(&present)).unwrap();
        assert_eq!(config.output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("a")),
            output_dir: Some(PathBuf::from("b")),
            ..AppConfig::default()
        }
        .with_overrides(None, Some(PathBuf::from("c")));

        assert_eq!(config.data_dir(), PathBuf::from("a"));
        assert_eq!(config.output_dir(), PathBuf::from("c"));
    }
}
