//! Core types for test.guide reports
//!
//! This crate defines the report object model and the rules it enforces:
//! - Error: `ReportError` hierarchy
//! - Checks: string length and key pattern validators, folder containment rules
//! - Content: content addressing (`{md5}/{base name}`) of artifact files
//! - Model: TestSuite, TestCaseFolder, TestCase, TestStepFolder, TestStep,
//!   Parameter, Constant, Attribute, Review, Artifact, TestStepArtifact
//!
//! Every entity projects itself to JSON through [`AtxRepr`]. Writing the
//! report and packing artifacts lives in `testguide-export`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checks;
pub mod content;
pub mod error;
pub mod model;

pub use checks::{
    check_pattern, check_string_length, validate_attachable, TreeNode, ATTRIBUTE_KEY_PATTERN,
    CONSTANT_KEY_PATTERN,
};
pub use content::{compute_address, extend_windows_path, extended_path, md5_hex, md5_hex_from_file};
pub use error::{ReportError, ReportResult};
pub use model::{
    Artifact, AtxRepr, Attribute, Constant, Direction, Parameter, ParameterValue, Review,
    TestCase, TestCaseFolder, TestCaseNode, TestStep, TestStepArtifact, TestStepArtifactType,
    TestStepFolder, TestStepNode, TestSuite, Verdict,
};
