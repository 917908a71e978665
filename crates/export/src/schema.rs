//! Report schema validation
//!
//! A report is checked against a draft-07 JSON schema before anything is
//! written. [`SchemaValidator::validate_json`] logs the violations and only
//! tells the caller whether the document complies;
//! [`SchemaValidator::violations`] returns them.

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;
use std::fs;
use std::path::Path;
use testguide_core::{ReportError, ReportResult};
use tracing::warn;

/// On-disk location of the bundled report schema.
pub const DEFAULT_SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/schema/schema.json");

const BUNDLED_SCHEMA: &str = include_str!("../schema/schema.json");

/// One schema violation
///
/// A failed `oneOf` carries the failures of each of its branches as
/// `causes`, so a bad field deep inside a test case is still named.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SchemaViolation {
    /// JSON pointer into the document
    pub instance_path: String,
    /// JSON pointer into the schema
    pub schema_path: String,
    /// Human readable description
    pub message: String,
    /// Branch failures of a failed `oneOf`, sorted like the top level
    pub causes: Vec<SchemaViolation>,
}

impl SchemaViolation {
    fn from_error(err: &ValidationError<'_>) -> Self {
        let mut causes: Vec<SchemaViolation> = match &err.kind {
            ValidationErrorKind::OneOfNotValid { context } => {
                context.iter().flatten().map(Self::from_error).collect()
            }
            _ => Vec::new(),
        };
        causes.sort();
        Self {
            instance_path: err.instance_path.to_string(),
            schema_path: err.schema_path.to_string(),
            message: err.to_string(),
            causes,
        }
    }

    fn log(&self, depth: usize) {
        if depth == 0 {
            warn!(
                instance_path = %self.instance_path,
                schema_path = %self.schema_path,
                "Report violates schema: {}",
                self.message
            );
        } else {
            warn!(
                instance_path = %self.instance_path,
                schema_path = %self.schema_path,
                depth,
                "Caused by: {}",
                self.message
            );
        }
        for cause in &self.causes {
            cause.log(depth + 1);
        }
    }
}

/// Compiled report schema
///
/// Compile once and reuse for every export.
#[derive(Debug)]
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile the schema bundled with this crate
    pub fn with_defaults() -> ReportResult<Self> {
        let schema: Value = serde_json::from_str(BUNDLED_SCHEMA)
            .map_err(|e| ReportError::schema(format!("Failed to parse bundled schema: {}", e)))?;
        Self::from_value(&schema)
    }

    /// Read and compile a schema file
    pub fn from_file(path: &Path) -> ReportResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ReportError::schema(format!(
                "Failed to read schema file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let schema: Value = serde_json::from_str(&content).map_err(|e| {
            ReportError::schema(format!(
                "Failed to parse schema file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_value(&schema)
    }

    /// Compile an in-memory schema
    pub fn from_value(schema: &Value) -> ReportResult<Self> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(schema)
            .map_err(|e| ReportError::schema(format!("Failed to compile schema: {}", e)))?;
        Ok(Self { validator })
    }

    /// Check a document against the schema.
    ///
    /// Every violation is logged at warn level, ordered by instance path
    /// and then schema path. Branch failures of a failed `oneOf` follow
    /// their parent.
    pub fn validate_json(&self, document: &Value) -> bool {
        let violations = self.violations(document);
        for violation in &violations {
            violation.log(0);
        }
        violations.is_empty()
    }

    /// All violations of `document`, ordered by instance path and then
    /// schema path
    pub fn violations(&self, document: &Value) -> Vec<SchemaViolation> {
        let mut violations: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|err| SchemaViolation::from_error(&err))
            .collect();
        violations.sort();
        violations
    }

    /// Read a JSON file and check it against the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not JSON. A
    /// non-compliant document is `Ok(false)`.
    pub fn validate_file(&self, path: &Path) -> ReportResult<bool> {
        let content = fs::read(path)?;
        let document: Value = serde_json::from_slice(&content)?;
        Ok(self.validate_json(&document))
    }
}
