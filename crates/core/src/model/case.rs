//! Test case

use crate::checks::{check_string_length, validate_attachable};
use crate::error::ReportResult;
use crate::model::artifact::Artifact;
use crate::model::review::Review;
use crate::model::step::TestStepNode;
use crate::model::values::{Attribute, Constant, Parameter};
use crate::model::{opt_str, report_list, AtxRepr, Verdict};
use serde_json::{json, Value};
use std::path::Path;
use tracing::warn;

/// A single test case
///
/// Holds three independent step trees (setup, execution, teardown), its own
/// artifacts and an optional review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    name: String,
    timestamp: i64,
    verdict: Verdict,
    description: Option<String>,
    execution_time: u64,
    param_set: Option<String>,
    parameters: Vec<Parameter>,
    constants: Vec<Constant>,
    attributes: Vec<Attribute>,
    setup_teststeps: Vec<TestStepNode>,
    execution_teststeps: Vec<TestStepNode>,
    teardown_teststeps: Vec<TestStepNode>,
    artifacts: Vec<Artifact>,
    review: Option<Review>,
}

impl TestCase {
    /// Create a test case (`name` 1-120 characters)
    pub fn new(name: impl Into<String>, timestamp: i64, verdict: Verdict) -> ReportResult<Self> {
        let name = name.into();
        check_string_length(&name, 1, 120, "TestCase", "name")?;
        Ok(Self {
            name,
            timestamp,
            verdict,
            description: None,
            execution_time: 0,
            param_set: None,
            parameters: Vec::new(),
            constants: Vec::new(),
            attributes: Vec::new(),
            setup_teststeps: Vec::new(),
            execution_teststeps: Vec::new(),
            teardown_teststeps: Vec::new(),
            artifacts: Vec::new(),
            review: None,
        })
    }

    /// Set the test case description
    pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
        self.description = Some(desc.into());
        self
    }

    /// Set the execution time in seconds
    pub fn set_execution_time_in_sec(&mut self, exec_time: u64) -> &mut Self {
        self.execution_time = exec_time;
        self
    }

    /// Set the parameter set name and its parameters
    ///
    /// Replaces any previously set parameter set. The name is at most 1024
    /// characters.
    pub fn add_parameter_set(
        &mut self,
        param_set: impl Into<String>,
        params: Vec<Parameter>,
    ) -> ReportResult<&mut Self> {
        let param_set = param_set.into();
        check_string_length(&param_set, 0, 1024, "TestCase", "paramSet")?;
        self.param_set = Some(param_set);
        self.parameters = params;
        Ok(self)
    }

    /// Append constants
    pub fn add_constants(&mut self, constants: impl IntoIterator<Item = Constant>) -> &mut Self {
        self.constants.extend(constants);
        self
    }

    /// Append a constant
    pub fn add_constant(&mut self, constant: Constant) -> &mut Self {
        self.constants.push(constant);
        self
    }

    /// Build and append a constant
    pub fn add_constant_pair(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ReportResult<&mut Self> {
        let constant = Constant::new(key, value)?;
        Ok(self.add_constant(constant))
    }

    /// Build and append an attribute
    pub fn add_attribute_pair(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ReportResult<&mut Self> {
        self.attributes.push(Attribute::new(key, value)?);
        Ok(self)
    }

    /// Append a step or non-empty folder to the setup steps
    pub fn add_setup_teststep(&mut self, teststep: impl Into<TestStepNode>) -> ReportResult<&mut Self> {
        let teststep = teststep.into();
        validate_attachable(&teststep)?;
        self.setup_teststeps.push(teststep);
        Ok(self)
    }

    /// Append a step or non-empty folder to the execution steps
    pub fn add_execution_teststep(
        &mut self,
        teststep: impl Into<TestStepNode>,
    ) -> ReportResult<&mut Self> {
        let teststep = teststep.into();
        validate_attachable(&teststep)?;
        self.execution_teststeps.push(teststep);
        Ok(self)
    }

    /// Append a step or non-empty folder to the teardown steps
    pub fn add_teardown_teststep(
        &mut self,
        teststep: impl Into<TestStepNode>,
    ) -> ReportResult<&mut Self> {
        let teststep = teststep.into();
        validate_attachable(&teststep)?;
        self.teardown_teststeps.push(teststep);
        Ok(self)
    }

    /// Attach a file to the test case
    ///
    /// With `ignore_on_error`, a missing file is logged and skipped instead
    /// of failing the call.
    pub fn add_artifact(
        &mut self,
        file_path: impl AsRef<Path>,
        ignore_on_error: bool,
    ) -> ReportResult<&mut Self> {
        let file_path = file_path.as_ref();
        match Artifact::new(file_path) {
            Ok(artifact) => self.artifacts.push(artifact),
            Err(e) if ignore_on_error && e.is_not_found() => {
                warn!(
                    path = %file_path.display(),
                    testcase = %self.name,
                    "Artifact path for testcase is invalid, will be ignored"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(self)
    }

    /// Set the review
    pub fn set_review(&mut self, review: Review) -> &mut Self {
        self.review = Some(review);
        self
    }

    /// All files attached to the test case and its steps.
    ///
    /// Case-level artifacts come first, then the setup, execution and
    /// teardown trees, each walked depth-first in child order.
    pub fn artifacts(&self) -> Vec<&Artifact> {
        let mut result: Vec<&Artifact> = self.artifacts.iter().collect();
        for tree in [
            &self.setup_teststeps,
            &self.execution_teststeps,
            &self.teardown_teststeps,
        ] {
            for node in tree {
                node.collect_artifacts(&mut result);
            }
        }
        result
    }

    /// Test case name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test case verdict
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Review, if set
    pub fn review(&self) -> Option<&Review> {
        self.review.as_ref()
    }

    /// Setup steps
    pub fn setup_teststeps(&self) -> &[TestStepNode] {
        &self.setup_teststeps
    }

    /// Execution steps
    pub fn execution_teststeps(&self) -> &[TestStepNode] {
        &self.execution_teststeps
    }

    /// Teardown steps
    pub fn teardown_teststeps(&self) -> &[TestStepNode] {
        &self.teardown_teststeps
    }
}

impl AtxRepr for TestCase {
    fn to_report(&self) -> Value {
        let mut result = json!({
            "@type": "testcase",
            "name": self.name,
            "verdict": self.verdict.as_str(),
            "description": opt_str(&self.description),
            "timestamp": self.timestamp,
            "executionTime": self.execution_time,
            "parameters": report_list(&self.parameters),
            "paramSet": opt_str(&self.param_set),
            "setupTestSteps": report_list(&self.setup_teststeps),
            "executionTestSteps": report_list(&self.execution_teststeps),
            "teardownTestSteps": report_list(&self.teardown_teststeps),
            "attributes": report_list(&self.attributes),
            "constants": report_list(&self.constants),
            "environments": [],
            "artifacts": report_list(&self.artifacts),
        });
        if let (Some(review), Some(obj)) = (&self.review, result.as_object_mut()) {
            obj.insert("review".to_string(), review.to_report());
        }
        result
    }
}
