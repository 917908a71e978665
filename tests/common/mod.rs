//! Shared test utilities for the integration test suites.
//!
//! Import via `#[path = "../common/mod.rs"] mod common;` from a suite's main.rs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
pub use testguide_report::{
    Direction, Parameter, ReportArchiveReader, ReportGenerator, Review, TestCase, TestCaseFolder,
    TestStep, TestStepArtifactType, TestStepFolder, TestSuite, Verdict,
};
use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Write `data` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, data).unwrap();
    path
}

/// Scratch directory plus a generator using the bundled schema.
pub struct ExportEnv {
    pub dir: TempDir,
    pub generator: ReportGenerator,
}

impl ExportEnv {
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: TempDir::new().unwrap(),
            generator: ReportGenerator::with_defaults().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_file(&self, name: &str, data: &[u8]) -> PathBuf {
        write_file(self.dir.path(), name, data)
    }
}

/// The "MyTestSuite" report.
///
/// `artifact` is attached to `TestCase_1`; it is the only file in the
/// report.
pub fn my_test_suite(artifact: &Path) -> TestSuite {
    let mut testcase = TestCase::new("TestCase_1", 1666698047001, Verdict::Passed).unwrap();
    testcase
        .add_parameter_set(
            "MyParameterSet",
            vec![
                Parameter::new("Input", 7, Direction::In),
                Parameter::new("Output", 42, Direction::Out),
            ],
        )
        .unwrap();
    testcase.add_constant_pair("SOP", "2042").unwrap();
    testcase.add_attribute_pair("ReqId", "007").unwrap();
    testcase.add_attribute_pair("Designer", "Philipp").unwrap();

    testcase
        .add_execution_teststep(
            TestStep::new("Check Picture1", Verdict::Passed, "Shows traffic light").unwrap(),
        )
        .unwrap();
    let mut action = TestStepFolder::new("Action").unwrap();
    action
        .add_teststep(TestStep::new("Check car speed", Verdict::Passed, "ego >= 120").unwrap())
        .unwrap();
    testcase.add_execution_teststep(action).unwrap();
    testcase
        .add_execution_teststep(
            TestStep::new("Check Picture2", Verdict::Passed, "Shows Ego Vehicle").unwrap(),
        )
        .unwrap();

    testcase.add_artifact(artifact, false).unwrap();
    testcase.set_review(Review::new("Review-Comment", "Reviewer", 1423576765001).unwrap());

    let mut folder = TestCaseFolder::new("SubFolder").unwrap();
    folder
        .add_testcase(TestCase::new("TestCase_FAILED", 1423536765000, Verdict::Failed).unwrap())
        .unwrap();

    let mut suite = TestSuite::new("MyTestSuite", 1666698047000).unwrap();
    suite.add_testcase(testcase).unwrap();
    suite.add_testcase(folder).unwrap();
    suite
}

/// A suite with a single passing test case.
pub fn single_case_suite(name: &str) -> TestSuite {
    let mut suite = TestSuite::new(name, 0).unwrap();
    suite
        .add_testcase(TestCase::new("only", 0, Verdict::Passed).unwrap())
        .unwrap();
    suite
}
