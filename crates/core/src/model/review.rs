//! Review of a test case

use crate::checks::check_string_length;
use crate::error::ReportResult;
use crate::model::{opt_str, AtxRepr, Verdict};
use serde_json::{json, Value};

/// Manual review attached to a test case
///
/// Only `comment`, `author` and `timestamp` are required. Unset optional
/// fields project as `null`; an unset verdict projects as `PASSED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    comment: String,
    author: String,
    timestamp: i64,
    verdict: Option<Verdict>,
    summary: Option<String>,
    defect: Option<String>,
    defect_priority: Option<String>,
    tickets: Vec<String>,
    invalid_run: bool,
    custom_evaluation: Option<String>,
    tags: Vec<String>,
    contacts: Vec<String>,
}

impl Review {
    /// Create a review
    ///
    /// `comment` must be 1-10000 characters, `author` at most 512.
    pub fn new(comment: impl Into<String>, author: impl Into<String>, timestamp: i64) -> ReportResult<Self> {
        let comment = comment.into();
        let author = author.into();
        check_string_length(&comment, 1, 10000, "Review", "comment")?;
        check_string_length(&author, 0, 512, "Review", "author")?;
        Ok(Self {
            comment,
            author,
            timestamp,
            verdict: None,
            summary: None,
            defect: None,
            defect_priority: None,
            tickets: Vec::new(),
            invalid_run: false,
            custom_evaluation: None,
            tags: Vec::new(),
            contacts: Vec::new(),
        })
    }

    /// Set the review verdict
    pub fn set_verdict(&mut self, verdict: Verdict) -> &mut Self {
        self.verdict = Some(verdict);
        self
    }

    /// Set the summary (at most 512 characters)
    pub fn set_summary(&mut self, summary: impl Into<String>) -> ReportResult<&mut Self> {
        let summary = summary.into();
        check_string_length(&summary, 0, 512, "Review", "summary")?;
        self.summary = Some(summary);
        Ok(self)
    }

    /// Set the defect (at most 64 characters)
    pub fn set_defect(&mut self, defect: impl Into<String>) -> ReportResult<&mut Self> {
        let defect = defect.into();
        check_string_length(&defect, 0, 64, "Review", "defect")?;
        self.defect = Some(defect);
        Ok(self)
    }

    /// Set the defect priority (at most 64 characters)
    pub fn set_defect_priority(&mut self, priority: impl Into<String>) -> ReportResult<&mut Self> {
        let priority = priority.into();
        check_string_length(&priority, 0, 64, "Review", "defectPriority")?;
        self.defect_priority = Some(priority);
        Ok(self)
    }

    /// Append tickets (each at most 512 characters)
    ///
    /// Nothing is appended if any ticket is invalid.
    pub fn add_tickets<I, S>(&mut self, tickets: I) -> ReportResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tickets = checked_list(tickets, 512, "ticket")?;
        self.tickets.extend(tickets);
        Ok(self)
    }

    /// Mark the reviewed run as invalid
    pub fn set_invalid_run(&mut self, invalid: bool) -> &mut Self {
        self.invalid_run = invalid;
        self
    }

    /// Set a custom evaluation (at most 64 characters)
    pub fn set_custom_evaluation(&mut self, evaluation: impl Into<String>) -> ReportResult<&mut Self> {
        let evaluation = evaluation.into();
        check_string_length(&evaluation, 0, 64, "Review", "customEvaluation")?;
        self.custom_evaluation = Some(evaluation);
        Ok(self)
    }

    /// Append tags
    pub fn add_tags<I, S>(&mut self, tags: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Append contacts (each at most 255 characters)
    ///
    /// Nothing is appended if any contact is invalid.
    pub fn add_contacts<I, S>(&mut self, contacts: I) -> ReportResult<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contacts = checked_list(contacts, 255, "contact")?;
        self.contacts.extend(contacts);
        Ok(self)
    }

    /// Review comment
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Review author
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Explicitly set verdict, if any
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Tickets in insertion order
    pub fn tickets(&self) -> &[String] {
        &self.tickets
    }

    /// Tags in insertion order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Contacts in insertion order
    pub fn contacts(&self) -> &[String] {
        &self.contacts
    }
}

fn checked_list<I, S>(items: I, max: usize, field: &str) -> ReportResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let items: Vec<String> = items.into_iter().map(Into::into).collect();
    for item in &items {
        check_string_length(item, 0, max, "Review", field)?;
    }
    Ok(items)
}

impl AtxRepr for Review {
    fn to_report(&self) -> Value {
        json!({
            "comment": self.comment,
            "timestamp": self.timestamp,
            "verdict": self.verdict.unwrap_or(Verdict::Passed).as_str(),
            "author": self.author,
            "summary": opt_str(&self.summary),
            "defect": opt_str(&self.defect),
            "defectPriority": opt_str(&self.defect_priority),
            "tickets": self.tickets,
            "invalidRun": self.invalid_run,
            "customEvaluation": opt_str(&self.custom_evaluation),
            "tags": self.tags,
            "contacts": self.contacts,
        })
    }
}
