//! Files attached to test cases and test steps

use crate::content::{compute_address, extended_path};
use crate::error::{ReportError, ReportResult};
use crate::model::{AtxRepr, TestStepArtifactType};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// A file attached to a test case
///
/// The content address is computed once, at construction, from the file as
/// it exists at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    file_path: PathBuf,
    path_in_archive: String,
}

impl Artifact {
    /// Reference an existing file
    ///
    /// # Errors
    ///
    /// `ReportError::ArtifactNotFound` if `file_path` is not a regular file.
    pub fn new(file_path: impl AsRef<Path>) -> ReportResult<Self> {
        let file_path = file_path.as_ref();
        if !extended_path(file_path).is_file() {
            return Err(ReportError::ArtifactNotFound {
                path: file_path.to_path_buf(),
            });
        }
        let path_in_archive = compute_address(file_path)?;
        Ok(Self {
            file_path: file_path.to_path_buf(),
            path_in_archive,
        })
    }

    /// Source file on disk
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// `{hash}/{base name}` path inside the report archive
    pub fn path_in_archive(&self) -> &str {
        &self.path_in_archive
    }
}

impl AtxRepr for Artifact {
    fn to_report(&self) -> Value {
        Value::String(self.path_in_archive.clone())
    }
}

/// A file attached to a test step, tagged with its kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStepArtifact {
    artifact: Artifact,
    artifact_type: TestStepArtifactType,
}

impl TestStepArtifact {
    /// Reference an existing file as a step artifact
    pub fn new(file_path: impl AsRef<Path>, artifact_type: TestStepArtifactType) -> ReportResult<Self> {
        Ok(Self {
            artifact: Artifact::new(file_path)?,
            artifact_type,
        })
    }

    /// The underlying artifact
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    /// Kind of the artifact
    pub fn artifact_type(&self) -> TestStepArtifactType {
        self.artifact_type
    }

    /// `{hash}/{base name}` path inside the report archive
    pub fn path_in_archive(&self) -> &str {
        self.artifact.path_in_archive()
    }
}

impl AtxRepr for TestStepArtifact {
    fn to_report(&self) -> Value {
        json!({
            "path": self.artifact.path_in_archive(),
            "artifactType": self.artifact_type.as_str(),
        })
    }
}
