//! Test case folders

use crate::checks::{check_string_length, validate_attachable, TreeNode};
use crate::error::ReportResult;
use crate::model::case::TestCase;
use crate::model::{report_list, AtxRepr};
use serde_json::{json, Value};

/// A named group of test cases
///
/// A folder must hold at least one child by the time it is attached to a
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseFolder {
    name: String,
    testcases: Vec<TestCaseNode>,
}

impl TestCaseFolder {
    /// Create an empty folder (`name` 1-120 characters)
    pub fn new(name: impl Into<String>) -> ReportResult<Self> {
        let name = name.into();
        check_string_length(&name, 1, 120, "TestCaseFolder", "name")?;
        Ok(Self {
            name,
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

    /// Folder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order
    pub fn testcases(&self) -> &[TestCaseNode] {
        &self.testcases
    }
}

impl AtxRepr for TestCaseFolder {
    fn to_report(&self) -> Value {
        json!({
            "@type": "testcasefolder",
            "name": self.name,
            "testcases": report_list(&self.testcases),
        })
    }
}

/// Node of a test case tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestCaseNode {
    /// A single test case
    Case(TestCase),
    /// A folder of test cases
    Folder(TestCaseFolder),
}

impl TestCaseNode {
    /// Visit every test case below this node, depth-first in child order.
    pub fn for_each_testcase<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a TestCase),
    {
        match self {
            TestCaseNode::Case(case) => f(case),
            TestCaseNode::Folder(folder) => {
                for child in &folder.testcases {
                    child.for_each_testcase(f);
                }
            }
        }
    }
}

impl From<TestCase> for TestCaseNode {
    fn from(case: TestCase) -> Self {
        TestCaseNode::Case(case)
    }
}

impl From<TestCaseFolder> for TestCaseNode {
    fn from(folder: TestCaseFolder) -> Self {
        TestCaseNode::Folder(folder)
    }
}

impl TreeNode for TestCaseNode {
    const FOLDER_KIND: &'static str = "TestCaseFolder";

    fn is_folder(&self) -> bool {
        matches!(self, TestCaseNode::Folder(_))
    }

    fn child_count(&self) -> usize {
        match self {
            TestCaseNode::Case(_) => 0,
            TestCaseNode::Folder(folder) => folder.testcases.len(),
        }
    }
}

impl AtxRepr for TestCaseNode {
    fn to_report(&self) -> Value {
        match self {
            TestCaseNode::Case(case) => case.to_report(),
            TestCaseNode::Folder(folder) => folder.to_report(),
        }
    }
}
