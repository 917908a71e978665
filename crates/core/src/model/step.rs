//! Test steps and test step folders

use crate::checks::{check_string_length, validate_attachable, TreeNode};
use crate::error::ReportResult;
use crate::model::artifact::{Artifact, TestStepArtifact};
use crate::model::{opt_str, report_list, AtxRepr, TestStepArtifactType, Verdict};
use serde_json::{json, Value};
use std::path::Path;
use tracing::warn;

/// A single test step (leaf of a step tree)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStep {
    name: String,
    description: Option<String>,
    verdict: Verdict,
    expected_result: String,
    artifacts: Vec<TestStepArtifact>,
}

impl TestStep {
    /// Create a test step
    ///
    /// `name` must be 1-255 characters, `expected_result` at most 1024
    /// (pass `""` when there is none).
    pub fn new(
        name: impl Into<String>,
        verdict: Verdict,
        expected_result: impl Into<String>,
    ) -> ReportResult<Self> {
        let name = name.into();
        let expected_result = expected_result.into();
        check_string_length(&name, 1, 255, "TestStep", "name")?;
        check_string_length(&expected_result, 0, 1024, "TestStep", "expected_result")?;
        Ok(Self {
            name,
            description: None,
            verdict,
            expected_result,
            artifacts: Vec::new(),
        })
    }

    /// Set the step description
    pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
        self.description = Some(desc.into());
        self
    }

    /// Attach a file to the step
    ///
    /// With `ignore_on_error`, a missing file is logged and skipped instead
    /// of failing the call.
    pub fn add_artifact(
        &mut self,
        file_path: impl AsRef<Path>,
        artifact_type: TestStepArtifactType,
        ignore_on_error: bool,
    ) -> ReportResult<&mut Self> {
        let file_path = file_path.as_ref();
        match TestStepArtifact::new(file_path, artifact_type) {
            Ok(artifact) => self.artifacts.push(artifact),
            Err(e) if ignore_on_error && e.is_not_found() => {
                warn!(
                    path = %file_path.display(),
                    teststep = %self.name,
                    "Artifact path for teststep is invalid, will be ignored"
                );
            }
            Err(e) => return Err(e),
        }
        Ok(self)
    }

    /// Step name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Step verdict
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Attached files in insertion order
    pub fn artifacts(&self) -> &[TestStepArtifact] {
        &self.artifacts
    }
}

impl AtxRepr for TestStep {
    fn to_report(&self) -> Value {
        json!({
            "@type": "teststep",
            "name": self.name,
            "description": opt_str(&self.description),
            "verdict": self.verdict.as_str(),
            "expected_result": self.expected_result,
            "testStepArtifacts": report_list(&self.artifacts),
        })
    }
}

/// A named group of test steps
///
/// A folder must hold at least one child by the time it is attached to a
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestStepFolder {
    name: String,
    description: Option<String>,
    teststeps: Vec<TestStepNode>,
}

impl TestStepFolder {
    /// Create an empty folder (`name` 1-255 characters)
    pub fn new(name: impl Into<String>) -> ReportResult<Self> {
        let name = name.into();
        check_string_length(&name, 1, 255, "TestStepFolder", "name")?;
        Ok(Self {
            name,
            description: None,
            teststeps: Vec::new(),
        })
    }

    /// Set the folder description
    pub fn set_description(&mut self, desc: impl Into<String>) -> &mut Self {
        self.description = Some(desc.into());
        self
    }

    /// Append a step or a non-empty folder
    pub fn add_teststep(&mut self, teststep: impl Into<TestStepNode>) -> ReportResult<&mut Self> {
        let teststep = teststep.into();
        validate_attachable(&teststep)?;
        self.teststeps.push(teststep);
        Ok(self)
    }

    /// Folder name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Children in insertion order
    pub fn teststeps(&self) -> &[TestStepNode] {
        &self.teststeps
    }
}

impl AtxRepr for TestStepFolder {
    fn to_report(&self) -> Value {
        json!({
            "@type": "teststepfolder",
            "name": self.name,
            "description": opt_str(&self.description),
            "teststeps": report_list(&self.teststeps),
        })
    }
}

/// Node of a step tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStepNode {
    /// A single step
    Step(TestStep),
    /// A folder of steps
    Folder(TestStepFolder),
}

impl TestStepNode {
    /// Append every step artifact below this node to `out`, depth-first.
    pub(crate) fn collect_artifacts<'a>(&'a self, out: &mut Vec<&'a Artifact>) {
        match self {
            TestStepNode::Step(step) => {
                out.extend(step.artifacts.iter().map(TestStepArtifact::artifact));
            }
            TestStepNode::Folder(folder) => {
                for child in &folder.teststeps {
                    child.collect_artifacts(out);
                }
            }
        }
    }
}

impl From<TestStep> for TestStepNode {
    fn from(step: TestStep) -> Self {
        TestStepNode::Step(step)
    }
}

impl From<TestStepFolder> for TestStepNode {
    fn from(folder: TestStepFolder) -> Self {
        TestStepNode::Folder(folder)
    }
}

impl TreeNode for TestStepNode {
    const FOLDER_KIND: &'static str = "TestStepFolder";

    fn is_folder(&self) -> bool {
        matches!(self, TestStepNode::Folder(_))
    }

    fn child_count(&self) -> usize {
        match self {
            TestStepNode::Step(_) => 0,
            TestStepNode::Folder(folder) => folder.teststeps.len(),
        }
    }
}

impl AtxRepr for TestStepNode {
    fn to_report(&self) -> Value {
        match self {
            TestStepNode::Step(step) => step.to_report(),
            TestStepNode::Folder(folder) => folder.to_report(),
        }
    }
}
