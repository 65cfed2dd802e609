//! Per-row outcomes and the batch-level issue report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Row-local failure categories. None is fatal to the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// No target span found for a selected source span; that one
    /// substitution is skipped.
    AlignmentMiss,
    /// Missing or empty required text; the row passes through unmodified.
    MalformedRow,
    /// Overlapping or out-of-range spans; the row is emitted unmodified.
    SpanConflict,
}

impl IssueCode {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueCode::AlignmentMiss => "alignment_miss",
            IssueCode::MalformedRow => "malformed_row",
            IssueCode::SpanConflict => "span_conflict",
        }
    }
}

/// An issue recorded against a single input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowIssue {
    /// Zero-based input row index.
    pub row: usize,
    /// Deterministic row identifier, when known.
    pub row_id: Option<String>,
    pub code: IssueCode,
    pub severity: IssueSeverity,
    pub message: String,
}

/// Why a row was passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassReason {
    EmptySource,
    EmptyTarget,
}

/// What happened to one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowOutcome {
    /// The row was transformed; `replaced` spans were substituted.
    Switched { replaced: usize },
    /// The row was copied through unchanged and flagged.
    PassedThrough { reason: PassReason },
    /// Substitution failed; the row was emitted unmodified with a warning.
    Skipped,
}

impl RowOutcome {
    pub fn replaced(&self) -> usize {
        match self {
            RowOutcome::Switched { replaced } => *replaced,
            _ => 0,
        }
    }
}

/// Issue report for one switching run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchReport {
    /// The output column this run produced.
    pub column: String,
    pub issues: Vec<RowIssue>,
}

impl BatchReport {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            issues: Vec::new(),
        }
    }

    pub fn push(&mut self, issue: RowIssue) {
        self.issues.push(issue);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
