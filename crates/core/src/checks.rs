//! Field constraints for report entities
//!
//! This module holds the validators every entity runs at construction and in
//! its mutators. Violations surface as `ReportError::InvalidLength`,
//! `ReportError::InvalidPattern` or `ReportError::InvalidArgument`.
//!
//! ## Contract
//!
//! Validators are pure. A failing check leaves the entity untouched, so an
//! entity is either fully valid or was never changed.

use crate::error::{ReportError, ReportResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for `Constant` keys
pub const CONSTANT_KEY_PATTERN: &str = "^[a-zA-Z]([a-zA-Z0-9]|_[a-zA-Z0-9])*_?$";

/// Pattern for `Attribute` keys (XML NCName-like character class)
pub const ATTRIBUTE_KEY_PATTERN: &str = "^[-.0-9:A-Z_a-z\u{b7}\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{37d}\u{37f}-\u{1fff}\u{200c}-\u{200d}\u{203f}\u{2040}\u{2070}-\u{218f}\u{2c00}-\u{2fef}\u{3001}-\u{d7ff}\u{f900}-\u{fdcf}\u{fdf0}-\u{fffd}]+$";

pub(crate) static CONSTANT_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(CONSTANT_KEY_PATTERN).expect("constant key pattern is a valid regex")
});

pub(crate) static ATTRIBUTE_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(ATTRIBUTE_KEY_PATTERN).expect("attribute key pattern is a valid regex")
});

/// Check that `value` is between `min` and `max` characters long (inclusive).
///
/// Length is counted in Unicode scalar values, not bytes.
/// Returns the value unchanged on success.
pub fn check_string_length<'a>(
    value: &'a str,
    min: usize,
    max: usize,
    owner: &str,
    field: &str,
) -> ReportResult<&'a str> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ReportError::InvalidLength {
            owner: owner.to_string(),
            field: field.to_string(),
            min,
            max,
            actual: len,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Check that `value` matches `pattern`.
pub fn check_pattern<'a>(value: &'a str, pattern: &Regex, owner: &str) -> ReportResult<&'a str> {
    if !pattern.is_match(value) {
        return Err(ReportError::InvalidPattern {
            owner: owner.to_string(),
            pattern: pattern.as_str().to_string(),
        });
    }
    Ok(value)
}

/// A node of a two-variant report tree (leaf or folder).
///
/// Implemented by `TestStepNode` and `TestCaseNode`. The type system already
/// rules out foreign node kinds; what is left to check at runtime is that a
/// folder is not empty.
pub trait TreeNode {
    /// Type name of the folder variant, used in error messages
    const FOLDER_KIND: &'static str;

    /// True if this node is the folder variant
    fn is_folder(&self) -> bool;

    /// Number of direct children (0 for leaves)
    fn child_count(&self) -> usize;
}

/// Check whether `node` may be attached to a parent.
///
/// Only the node itself is inspected. Folders nested deeper were checked when
/// they were attached to their own parent.
pub fn validate_attachable<N: TreeNode>(node: &N) -> ReportResult<()> {
    if node.is_folder() && node.child_count() == 0 {
        return Err(ReportError::invalid_argument(format!(
            "{} may not be empty.",
            N::FOLDER_KIND
        )));
    }
    Ok(())
}
