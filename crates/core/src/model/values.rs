//! Parameters, constants and attributes of a test case

use crate::checks::{check_pattern, check_string_length, ATTRIBUTE_KEY_RE, CONSTANT_KEY_RE};
use crate::error::ReportResult;
use crate::model::{AtxRepr, Direction};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Value of a parameter: text or integer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Integer value
    Int(i64),
    /// Text value
    Text(String),
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        ParameterValue::Int(v)
    }
}

impl From<i32> for ParameterValue {
    fn from(v: i32) -> Self {
        ParameterValue::Int(v.into())
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        ParameterValue::Text(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        ParameterValue::Text(v.to_string())
    }
}

impl ParameterValue {
    fn to_json(&self) -> Value {
        match self {
            ParameterValue::Int(i) => json!(i),
            ParameterValue::Text(s) => json!(s),
        }
    }
}

/// A named test case parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    value: ParameterValue,
    direction: Direction,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            direction,
        }
    }

    /// Parameter name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter value
    pub fn value(&self) -> &ParameterValue {
        &self.value
    }

    /// Parameter direction
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl AtxRepr for Parameter {
    fn to_report(&self) -> Value {
        json!({
            "name": self.name,
            "value": self.value.to_json(),
            "direction": self.direction.as_str(),
        })
    }
}

/// A key/value constant of a test case
///
/// Keys are 1-128 characters and must match
/// [`CONSTANT_KEY_PATTERN`](crate::checks::CONSTANT_KEY_PATTERN).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    key: String,
    value: String,
}

impl Constant {
    /// Create a constant, validating the key
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> ReportResult<Self> {
        let key = key.into();
        check_pattern(&key, &CONSTANT_KEY_RE, "Constant")?;
        check_string_length(&key, 1, 128, "Constant", "key")?;
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    /// Constant key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Constant value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl AtxRepr for Constant {
    fn to_report(&self) -> Value {
        json!({ "key": self.key, "value": self.value })
    }
}

/// A key/value attribute of a test case
///
/// Keys are 1-255 characters and must match
/// [`ATTRIBUTE_KEY_PATTERN`](crate::checks::ATTRIBUTE_KEY_PATTERN).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    /// Create an attribute, validating the key
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> ReportResult<Self> {
        let key = key.into();
        check_pattern(&key, &ATTRIBUTE_KEY_RE, "Attribute")?;
        check_string_length(&key, 1, 255, "Attribute", "key")?;
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    /// Attribute key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Attribute value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl AtxRepr for Attribute {
    fn to_report(&self) -> Value {
        json!({ "key": self.key, "value": self.value })
    }
}
