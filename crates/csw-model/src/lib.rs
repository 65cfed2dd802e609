pub mod error;
pub mod language;
pub mod method;
pub mod options;
pub mod report;
pub mod span;

pub use error::{Result, SwitchError};
pub use language::{LanguagePair, LanguageTag};
pub use method::{SwitchMethod, switch_column_name};
pub use options::{AlignPolicy, SwitchOptions};
pub use report::{BatchReport, IssueCode, IssueSeverity, PassReason, RowIssue, RowOutcome};
pub use span::{Replacement, SpanSelection, TokenSpan};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_report_counts() {
        let mut report = BatchReport::new("en2ar_noun_token");
        report.push(RowIssue {
            row: 3,
            row_id: Some("a1b2".to_string()),
            code: IssueCode::SpanConflict,
            severity: IssueSeverity::Warning,
            message: "overlapping spans".to_string(),
        });
        report.push(RowIssue {
            row: 7,
            row_id: None,
            code: IssueCode::MalformedRow,
            severity: IssueSeverity::Warning,
            message: "empty target text".to_string(),
        });
        assert_eq!(report.warning_count(), 2);
        assert_eq!(report.error_count(), 0);
        assert!(!report.has_errors());
    }

    #[test]
    fn report_serializes() {
        let mut report = BatchReport::new("en2ar_ratio_token");
        report.push(RowIssue {
            row: 0,
            row_id: None,
            code: IssueCode::AlignmentMiss,
            severity: IssueSeverity::Warning,
            message: "no target span for noun".to_string(),
        });
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: BatchReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.column, "en2ar_ratio_token");
        assert_eq!(round.issues.len(), 1);
        assert_eq!(round.issues[0].code, IssueCode::AlignmentMiss);
    }
}
