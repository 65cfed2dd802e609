//! Per-row switching.
//!
//! Each row is processed independently and statelessly: select source
//! spans, align each to a target span, splice. Failures are row-local; the
//! worst case emits the source text unchanged with a recorded issue.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use csw_model::{
    IssueCode, IssueSeverity, PassReason, Replacement, RowIssue, RowOutcome, SpanSelection,
    SwitchMethod, SwitchOptions, TokenSpan,
};

use crate::aligner::WordAligner;
use crate::select::ratio_spans;
use crate::substitute::substitute;
use crate::tagger::NounTagger;
use crate::tokenize::{containing_token, tokenize};

/// One row's inputs: the source sentence and its parallel target sentences.
#[derive(Debug, Clone, Copy)]
pub struct RowInput<'a> {
    pub source: &'a str,
    pub targets: &'a [&'a str],
    pub row_index: usize,
}

/// One row's result.
#[derive(Debug, Clone)]
pub struct SwitchedRow {
    pub text: String,
    pub outcome: RowOutcome,
    pub issues: Vec<RowIssue>,
}

/// Row-level switching engine for one run.
pub struct RowSwitcher<'a> {
    method: SwitchMethod,
    options: &'a SwitchOptions,
    tagger: &'a dyn NounTagger,
    aligner: &'a dyn WordAligner,
}

impl<'a> RowSwitcher<'a> {
    pub fn new(
        method: SwitchMethod,
        options: &'a SwitchOptions,
        tagger: &'a dyn NounTagger,
        aligner: &'a dyn WordAligner,
    ) -> Self {
        Self {
            method,
            options,
            tagger,
            aligner,
        }
    }

    /// Transform one row. Never fails the batch: malformed rows pass
    /// through flagged, conflicting selections skip the row with a warning.
    pub fn switch_row(&self, input: RowInput<'_>) -> SwitchedRow {
        let mut issues = Vec::new();

        if tokenize(input.source).len() < self.options.min_tokens.max(1) {
            issues.push(row_issue(
                input.row_index,
                IssueCode::MalformedRow,
                "source text is empty or below the token minimum",
            ));
            return passed_through(input.source, PassReason::EmptySource, issues);
        }

        let targets: Vec<&str> = input
            .targets
            .iter()
            .copied()
            .filter(|target| !target.trim().is_empty())
            .collect();
        if targets.is_empty() {
            issues.push(row_issue(
                input.row_index,
                IssueCode::MalformedRow,
                "no non-empty target text for row",
            ));
            return passed_through(input.source, PassReason::EmptyTarget, issues);
        }

        let spans = match self.method {
            SwitchMethod::NounToken => match self.tagger.tag(input.source) {
                Ok(spans) => spans,
                Err(error) => {
                    issues.push(row_issue(
                        input.row_index,
                        IssueCode::MalformedRow,
                        format!("tagger failed: {error}"),
                    ));
                    return passed_through(input.source, PassReason::EmptySource, issues);
                }
            },
            SwitchMethod::RatioToken => ratio_spans(
                input.source,
                self.options.ratio,
                self.options.seed,
                input.row_index,
            ),
        };

        // Replacements rotate round-robin across target languages in
        // selection order; a consumed target token is never reused, the
        // leftmost unconsumed token to its right stands in on a collision.
        let mut consumed: Vec<BTreeSet<TokenSpan>> = vec![BTreeSet::new(); targets.len()];
        let mut replacements = Vec::with_capacity(spans.len());
        for (selection_index, span) in spans.iter().enumerate() {
            let target_index = selection_index % targets.len();
            let target = targets[target_index];
            let aligned = match self.aligner.align(input.source, target, *span) {
                Ok(aligned) => aligned,
                Err(error) => {
                    warn!(row = input.row_index, %error, "aligner failed for span");
                    issues.push(row_issue(
                        input.row_index,
                        IssueCode::AlignmentMiss,
                        format!("aligner failed: {error}"),
                    ));
                    continue;
                }
            };
            let Some(aligned) =
                aligned.and_then(|span| claim_span(target, span, &mut consumed[target_index]))
            else {
                debug!(
                    row = input.row_index,
                    start = span.start,
                    end = span.end,
                    "no target span for source span"
                );
                issues.push(row_issue(
                    input.row_index,
                    IssueCode::AlignmentMiss,
                    format!("no target span aligned to {}..{}", span.start, span.end),
                ));
                continue;
            };
            let Some(text) = aligned.slice(target) else {
                issues.push(row_issue(
                    input.row_index,
                    IssueCode::AlignmentMiss,
                    format!("target span {}..{} is unreadable", aligned.start, aligned.end),
                ));
                continue;
            };
            replacements.push(Replacement {
                span: *span,
                text: text.to_string(),
            });
        }

        let replaced = replacements.len();
        let selection = match SpanSelection::new(replacements, input.source.len()) {
            Ok(selection) => selection,
            Err(error) => {
                warn!(row = input.row_index, %error, "span conflict, row skipped");
                issues.push(row_issue(
                    input.row_index,
                    IssueCode::SpanConflict,
                    error.to_string(),
                ));
                return SwitchedRow {
                    text: input.source.to_string(),
                    outcome: RowOutcome::Skipped,
                    issues,
                };
            }
        };

        match substitute(input.source, &selection) {
            Ok(text) => SwitchedRow {
                text,
                outcome: RowOutcome::Switched { replaced },
                issues,
            },
            Err(error) => {
                warn!(row = input.row_index, %error, "substitution failed, row skipped");
                issues.push(row_issue(
                    input.row_index,
                    IssueCode::SpanConflict,
                    error.to_string(),
                ));
                SwitchedRow {
                    text: input.source.to_string(),
                    outcome: RowOutcome::Skipped,
                    issues,
                }
            }
        }
    }
}

/// Claim `span`, or the leftmost unconsumed target token to its right.
fn claim_span(
    target: &str,
    span: TokenSpan,
    consumed: &mut BTreeSet<TokenSpan>,
) -> Option<TokenSpan> {
    if consumed.insert(span) {
        return Some(span);
    }
    let tokens = tokenize(target);
    let start = containing_token(&tokens, span)?;
    for token in tokens.iter().skip(start + 1) {
        if consumed.insert(token.span) {
            return Some(token.span);
        }
    }
    None
}

fn row_issue(row: usize, code: IssueCode, message: impl Into<String>) -> RowIssue {
    RowIssue {
        row,
        row_id: None,
        code,
        severity: IssueSeverity::Warning,
        message: message.into(),
    }
}

fn passed_through(source: &str, reason: PassReason, issues: Vec<RowIssue>) -> SwitchedRow {
    SwitchedRow {
        text: source.to_string(),
        outcome: RowOutcome::PassedThrough { reason },
        issues,
    }
}
