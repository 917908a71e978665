//! Report object model
//!
//! The entities that make up a test report, from the `TestSuite` root down to
//! single parameters. Every entity validates its required fields in its
//! constructor and exposes its JSON projection through [`AtxRepr`].
//!
//! ## Module Structure
//!
//! - `values`: Parameter, Constant, Attribute
//! - `artifact`: Artifact, TestStepArtifact
//! - `review`: Review
//! - `step`: TestStep, TestStepFolder, TestStepNode
//! - `case`: TestCase
//! - `folder`: TestCaseFolder, TestCaseNode
//! - `suite`: TestSuite
//!
//! ## Usage
//!
//! ```
//! use testguide_core::model::{AtxRepr, TestCase, TestSuite, Verdict};
//!
//! let mut suite = TestSuite::new("MyTestSuite", 1666698047000)?;
//! suite.add_testcase(TestCase::new("TestCase_1", 1666698047001, Verdict::Passed)?)?;
//!
//! let report = suite.to_report();
//! assert_eq!(report["testcases"][0]["verdict"], "PASSED");
//! # Ok::<(), testguide_core::ReportError>(())
//! ```

pub mod artifact;
pub mod case;
pub mod folder;
pub mod review;
pub mod step;
pub mod suite;
pub mod values;

pub use artifact::{Artifact, TestStepArtifact};
pub use case::TestCase;
pub use folder::{TestCaseFolder, TestCaseNode};
pub use review::Review;
pub use step::{TestStep, TestStepFolder, TestStepNode};
pub use suite::TestSuite;
pub use values::{Attribute, Constant, Parameter, ParameterValue};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Projection of a report entity into its ATX JSON representation.
///
/// Objects keep their keys in insertion order; sequences keep the order in
/// which children were added.
pub trait AtxRepr {
    /// The JSON representation of this entity
    fn to_report(&self) -> Value;
}

/// Outcome of a test case or test step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// No verdict
    None,
    /// Passed
    Passed,
    /// Neither passed nor failed
    Inconclusive,
    /// Failed
    Failed,
    /// Execution error
    Error,
}

impl Verdict {
    /// Symbolic name used in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::None => "NONE",
            Verdict::Passed => "PASSED",
            Verdict::Inconclusive => "INCONCLUSIVE",
            Verdict::Failed => "FAILED",
            Verdict::Error => "ERROR",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a test case parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Input parameter
    In,
    /// Output parameter
    Out,
    /// Input and output
    InOut,
}

impl Direction {
    /// Symbolic name used in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "IN",
            Direction::Out => "OUT",
            Direction::InOut => "INOUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of file attached to a test step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStepArtifactType {
    /// Image (screenshot, plot, ...)
    Image,
}

impl TestStepArtifactType {
    /// Symbolic name used in the report
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStepArtifactType::Image => "IMAGE",
        }
    }
}

/// Project an optional string as `null` when unset.
pub(crate) fn opt_str(value: &Option<String>) -> Value {
    match value {
        Some(s) => Value::String(s.clone()),
        None => Value::Null,
    }
}

/// Project a slice of entities as an array.
pub(crate) fn report_list<T: AtxRepr>(items: &[T]) -> Value {
    Value::Array(items.iter().map(AtxRepr::to_report).collect())
}
