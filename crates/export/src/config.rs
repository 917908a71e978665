//! Export configuration via `testguide.toml`
//!
//! Settings that do not belong to a single report: which schema to
//! validate against and how hard to compress the archive. A missing file
//! means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use testguide_core::{ReportError, ReportResult};

/// Config file name looked up next to the caller's working files.
pub const CONFIG_FILE_NAME: &str = "testguide.toml";

/// Default deflate level for report archives.
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 6;

/// Export configuration loaded from `testguide.toml`.
///
/// # Example
///
/// ```toml
/// # schema_path = "/opt/testguide/schema.json"
/// compression_level = 6
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Schema used to validate reports. `None` uses the bundled schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
    /// Deflate compression level (0-9).
    #[serde(default = "default_compression_level")]
    pub compression_level: i32,
}

fn default_compression_level() -> i32 {
    DEFAULT_COMPRESSION_LEVEL
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema_path: None,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
        }
    }
}

impl ExportConfig {
    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if `compression_level` is outside 0-9.
    pub fn validate(&self) -> ReportResult<()> {
        if !(0..=9).contains(&self.compression_level) {
            return Err(ReportError::config(format!(
                "Invalid compression_level {} in {}. Expected a value between 0 and 9.",
                self.compression_level, CONFIG_FILE_NAME
            )));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# test.guide report export configuration
#
# JSON schema used to validate reports before they are written.
# Leave unset to use the schema bundled with the library.
# schema_path = "/path/to/schema.json"

# Deflate compression level for the report archive (0-9, default 6)
compression_level = 6
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds an
    /// invalid value.
    pub fn from_file(path: &Path) -> ReportResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: ExportConfig = toml::from_str(&content).map_err(|e| {
            ReportError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> ReportResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                ReportError::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> ReportResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ReportError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            ReportError::config(format!(
                "Failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
