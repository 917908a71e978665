//! Types shared by the report archive writer, reader and generator

use std::fmt;
use std::path::{Path, PathBuf};
use testguide_core::ReportError;
use zip::result::ZipError;

/// Extension appended to the report name to form the archive name
pub const REPORT_ARCHIVE_EXTENSION: &str = ".zip";

/// Archive path for a report written at `json_path`
///
/// A trailing `.json` is replaced; any other name gets the archive
/// extension appended.
pub fn archive_path_for(json_path: &Path) -> PathBuf {
    let base = if json_path.extension().is_some_and(|ext| ext == "json") {
        json_path.with_extension("")
    } else {
        json_path.to_path_buf()
    };
    let mut name = base.into_os_string();
    name.push(REPORT_ARCHIVE_EXTENSION);
    PathBuf::from(name)
}

/// Map a zip failure on `context` to a report error
///
/// I/O failures keep their kind so callers can still test `is_not_found`.
pub(crate) fn zip_error(context: &str, err: ZipError) -> ReportError {
    match err {
        ZipError::Io(e) => ReportError::Io(e),
        other => ReportError::archive(format!("{}: {}", context, other)),
    }
}

// =============================================================================
// Export lifecycle
// =============================================================================

/// Stage of a single export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportState {
    /// Suite projected to a JSON document
    Built,
    /// Document complies with the schema
    Validated,
    /// JSON file and archive written
    Exported,
    /// Document failed validation, nothing written
    Rejected,
}

impl ExportState {
    /// Lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportState::Built => "built",
            ExportState::Validated => "validated",
            ExportState::Exported => "exported",
            ExportState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Results
// =============================================================================

/// Information returned after writing a report archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveInfo {
    /// Final archive path
    pub path: PathBuf,
    /// Number of distinct artifacts stored
    pub artifact_count: usize,
    /// Artifacts skipped because their content address was already stored
    pub skipped_duplicates: usize,
    /// Size of the archive on disk
    pub size_bytes: u64,
}

/// Information returned after a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportInfo {
    /// Where the JSON report was written
    pub json_path: PathBuf,
    /// Where the archive was written
    pub archive_path: PathBuf,
    /// Number of distinct artifacts in the archive
    pub artifact_count: usize,
    /// Artifact references that pointed at an already stored address
    pub skipped_duplicates: usize,
    /// Size of the archive on disk
    pub archive_size_bytes: u64,
}
