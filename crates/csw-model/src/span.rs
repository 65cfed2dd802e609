//! Token spans and validated span selections.
//!
//! Spans are byte offsets into a sentence, end-exclusive, always on `char`
//! boundaries. A [`SpanSelection`] is the per-row replacement plan handed to
//! the substituter; its constructor enforces ordering, non-overlap, and
//! bounds so the substituter can splice without re-checking.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwitchError};

/// A contiguous byte range within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True when `other` starts before this span ends and vice versa.
    pub fn overlaps(&self, other: &TokenSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The text this span covers, if in bounds and on char boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end)
    }
}

/// One planned substitution: a source span and its replacement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub span: TokenSpan,
    pub text: String,
}

/// Ordered, non-overlapping replacements for a single row.
///
/// Produced fresh per row and never persisted independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSelection {
    replacements: Vec<Replacement>,
}

impl SpanSelection {
    /// Validate and build a selection against a source of `source_len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`SwitchError::SpanConflict`] when any span is empty, out of
    /// bounds, or overlaps its predecessor after sorting by start offset.
    pub fn new(mut replacements: Vec<Replacement>, source_len: usize) -> Result<Self> {
        replacements.sort_by_key(|r| (r.span.start, r.span.end));
        let mut previous_end = 0usize;
        for replacement in &replacements {
            let span = replacement.span;
            if span.is_empty() || span.end > source_len || span.start < previous_end {
                return Err(SwitchError::SpanConflict {
                    start: span.start,
                    end: span.end,
                    source_len,
                });
            }
            previous_end = span.end;
        }
        Ok(Self { replacements })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Replacement> {
        self.replacements.iter()
    }

    pub fn spans(&self) -> impl Iterator<Item = TokenSpan> + '_ {
        self.replacements.iter().map(|r| r.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl(start: usize, end: usize) -> Replacement {
        Replacement {
            span: TokenSpan::new(start, end),
            text: "x".to_string(),
        }
    }

    #[test]
    fn selection_sorts_by_start() {
        let selection = SpanSelection::new(vec![repl(8, 11), repl(0, 3)], 11).unwrap();
        let starts: Vec<usize> = selection.spans().map(|s| s.start).collect();
        assert_eq!(starts, vec![0, 8]);
    }

    #[test]
    fn selection_rejects_overlap() {
        let error = SpanSelection::new(vec![repl(0, 5), repl(4, 8)], 10).unwrap_err();
        assert!(matches!(error, SwitchError::SpanConflict { start: 4, .. }));
    }

    #[test]
    fn selection_rejects_out_of_bounds() {
        assert!(SpanSelection::new(vec![repl(0, 12)], 10).is_err());
    }

    #[test]
    fn selection_rejects_empty_span() {
        assert!(SpanSelection::new(vec![repl(3, 3)], 10).is_err());
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = TokenSpan::new(0, 4);
        let b = TokenSpan::new(3, 6);
        let c = TokenSpan::new(4, 6);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }
}
