//! Test suite, the root of a report

use crate::checks::{check_string_length, validate_attachable};
use crate::error::ReportResult;
use crate::model::artifact::Artifact;
use crate::model::case::TestCase;
use crate::model::folder::TestCaseNode;
use crate::model::{report_list, AtxRepr};
use serde_json::{json, Value};

/// Root of a test report
///
/// An empty suite can be built, but the report schema requires at least one
/// test case or folder, so exporting it is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSuite {
    name: String,
    timestamp: i64,
    testcases: Vec<TestCaseNode>,
}

impl TestSuite {
    /// Create a suite (`name` 1-120 characters, `timestamp` in milliseconds)
    pub fn new(name: impl Into<String>, timestamp: i64) -> ReportResult<Self> {
        let name = name.into();
        check_string_length(&name, 1, 120, "TestSuite", "name")?;
        Ok(Self {
            name,
            timestamp,
            testcases: Vec::new(),
        })
    }

    /// Append a test case or a non-empty folder
    pub fn add_testcase(&mut self, testcase: impl Into<TestCaseNode>) -> ReportResult<&mut Self> {
        let testcase = testcase.into();
        validate_attachable(&testcase)?;
        self.testcases.push(testcase);
        Ok(self)
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Suite timestamp
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Root children in insertion order
    pub fn testcases(&self) -> &[TestCaseNode] {
        &self.testcases
    }

    /// Every test case in the suite, depth-first in child order
    pub fn all_testcases(&self) -> Vec<&TestCase> {
        let mut result = Vec::new();
        for node in &self.testcases {
            node.for_each_testcase(&mut |tc| result.push(tc));
        }
        result
    }

    /// Every artifact reachable from the suite, in export order
    ///
    /// May contain the same content address more than once.
    pub fn artifacts(&self) -> Vec<&Artifact> {
        self.all_testcases()
            .into_iter()
            .flat_map(TestCase::artifacts)
            .collect()
    }
}

impl AtxRepr for TestSuite {
    fn to_report(&self) -> Value {
        json!({
            "name": self.name,
            "timestamp": self.timestamp,
            "testcases": report_list(&self.testcases),
        })
    }
}
