//! testguide-report - build and package test.guide test reports
//!
//! A report is a tree: a [`TestSuite`] holds test cases and test case
//! folders, a [`TestCase`] holds setup, execution and teardown step trees,
//! parameters, constants, attributes, artifacts and an optional review.
//! Constraints on names and keys are enforced when values are set.
//!
//! # Quick Start
//!
//! ```no_run
//! use testguide_report::{ReportGenerator, TestCase, TestSuite, Verdict};
//!
//! # fn main() -> testguide_report::ReportResult<()> {
//! let mut suite = TestSuite::new("MyTestSuite", 1666698047000)?;
//! suite.add_testcase(TestCase::new("TestCase_1", 1666698047001, Verdict::Passed)?)?;
//!
//! let generator = ReportGenerator::with_defaults()?;
//! if let Some(info) = generator.export(&suite, "out/report.json")? {
//!     println!("upload {}", info.archive_path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The object model and its checks live in `testguide-core`. Schema
//! validation, the archive format and configuration live in
//! `testguide-export`. Both are re-exported here.

pub use testguide_core::*;
pub use testguide_export::*;
