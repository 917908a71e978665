//! Export of test.guide reports
//!
//! This crate takes a finished [`testguide_core::TestSuite`] and produces
//! the files test.guide imports:
//! - Schema: draft-07 validation of the report document
//! - Bundle: `.zip` archive writer and reader
//! - Generator: validate, write the JSON report, pack it with its artifacts
//! - Config: `testguide.toml` export settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod config;
pub mod generator;
pub mod schema;

pub use bundle::{
    archive_path_for, ArchiveInfo, ExportInfo, ExportState, ReportArchiveReader,
    ReportArchiveWriter, REPORT_ARCHIVE_EXTENSION,
};
pub use config::{ExportConfig, CONFIG_FILE_NAME, DEFAULT_COMPRESSION_LEVEL};
pub use generator::ReportGenerator;
pub use schema::{SchemaValidator, SchemaViolation, DEFAULT_SCHEMA_PATH};
