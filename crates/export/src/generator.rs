//! Report generator
//!
//! Turns a [`TestSuite`] into the two files test.guide imports: the JSON
//! report and the archive holding it together with every artifact.
//!
//! A suite moves through [`ExportState`]: `built` once projected,
//! `validated` once the schema accepts it, then `exported` or `rejected`.
//! A rejected suite writes nothing.

use crate::bundle::{archive_path_for, ExportInfo, ExportState, ReportArchiveWriter};
use crate::config::ExportConfig;
use crate::schema::SchemaValidator;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs;
use std::path::{Path, PathBuf};
use testguide_core::{AtxRepr, ReportError, ReportResult, TestSuite};
use tracing::{debug, info, warn};

/// Validates, writes and packs test reports
#[derive(Debug)]
pub struct ReportGenerator {
    validator: SchemaValidator,
    writer: ReportArchiveWriter,
}

impl ReportGenerator {
    /// Create a generator from a compiled schema and an archive writer
    pub fn new(validator: SchemaValidator, writer: ReportArchiveWriter) -> Self {
        Self { validator, writer }
    }

    /// Bundled schema, default compression
    pub fn with_defaults() -> ReportResult<Self> {
        Ok(Self::new(
            SchemaValidator::with_defaults()?,
            ReportArchiveWriter::with_defaults(),
        ))
    }

    /// Build a generator from `testguide.toml` settings
    pub fn from_config(config: &ExportConfig) -> ReportResult<Self> {
        config.validate()?;
        let validator = match &config.schema_path {
            Some(path) => SchemaValidator::from_file(path)?,
            None => SchemaValidator::with_defaults()?,
        };
        Ok(Self::new(
            validator,
            ReportArchiveWriter::new(config.compression_level),
        ))
    }

    /// Schema the generator validates against
    pub fn validator(&self) -> &SchemaValidator {
        &self.validator
    }

    /// Export `suite` to `json_path` and its archive.
    ///
    /// The archive lands next to the JSON file, named after it with a
    /// `.zip` extension (see [`archive_path_for`]).
    ///
    /// Returns `Ok(None)` if the report does not comply with the schema;
    /// the violations are logged and no file is written. On error neither
    /// file is left behind: the archive is written first and removed again
    /// if the JSON file cannot be written.
    pub fn export(
        &self,
        suite: &TestSuite,
        json_path: impl AsRef<Path>,
    ) -> ReportResult<Option<ExportInfo>> {
        let json_path = json_path.as_ref();
        let report_name = json_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ReportError::invalid_argument(format!(
                    "Report path has no file name: {}",
                    json_path.display()
                ))
            })?;

        let document = suite.to_report();
        debug!(suite = %suite.name(), state = %ExportState::Built, "Report projected");

        if !self.validator.validate_json(&document) {
            debug!(suite = %suite.name(), state = %ExportState::Rejected, "Report rejected");
            warn!(
                suite = %suite.name(),
                "Report does not comply with the schema, nothing written"
            );
            return Ok(None);
        }
        debug!(suite = %suite.name(), state = %ExportState::Validated, "Report validated");

        let report_data = to_pretty_json(&document)?;
        let archive_path = archive_path_for(json_path);
        let artifacts = suite.artifacts();
        let archive = self
            .writer
            .write(&report_name, &report_data, &artifacts, &archive_path)?;

        if let Err(e) = write_json(json_path, &report_data) {
            let _ = fs::remove_file(&archive.path);
            return Err(e);
        }

        debug!(suite = %suite.name(), state = %ExportState::Exported, "Report exported");
        info!(
            json = %json_path.display(),
            archive = %archive.path.display(),
            artifacts = archive.artifact_count,
            bytes = archive.size_bytes,
            "Exported test report"
        );

        Ok(Some(ExportInfo {
            json_path: json_path.to_path_buf(),
            archive_path: archive.path,
            artifact_count: archive.artifact_count,
            skipped_duplicates: archive.skipped_duplicates,
            archive_size_bytes: archive.size_bytes,
        }))
    }
}

/// Write the report through a temp file next to `json_path`
fn write_json(json_path: &Path, report_data: &[u8]) -> ReportResult<()> {
    if let Some(parent) = json_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut temp_name = json_path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let written = fs::write(&temp_path, report_data).and_then(|()| fs::rename(&temp_path, json_path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

/// Pretty JSON with a 4-space indent
fn to_pretty_json(document: &Value) -> ReportResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut serializer)?;
    Ok(buf)
}
