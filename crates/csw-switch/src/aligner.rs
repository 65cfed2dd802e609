//! Word alignment capability.
//!
//! A semantic word-alignment model is an external capability behind
//! [`WordAligner`]. The in-repo default is positional: the target token at
//! the same relative index as the source token, which is also the ratio
//! method's documented alignment. Alignment always lands on a target token
//! boundary.

use csw_model::{Result, TokenSpan};

use crate::tokenize::{containing_token, tokenize};

/// Maps one source span to its counterpart span in the parallel target.
pub trait WordAligner {
    /// The aligned target span, or `None` when no alignment exists.
    fn align(&self, source: &str, target: &str, span: TokenSpan) -> Result<Option<TokenSpan>>;
}

/// Naive positional alignment: source token `i` of `n` maps to target token
/// `floor(i * m / n)` of `m`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalAligner;

impl PositionalAligner {
    pub fn new() -> Self {
        Self
    }
}

impl WordAligner for PositionalAligner {
    fn align(&self, source: &str, target: &str, span: TokenSpan) -> Result<Option<TokenSpan>> {
        let source_tokens = tokenize(source);
        let Some(index) = containing_token(&source_tokens, span) else {
            return Ok(None);
        };
        let target_tokens = tokenize(target);
        if target_tokens.is_empty() {
            return Ok(None);
        }
        let mapped = index * target_tokens.len() / source_tokens.len();
        Ok(Some(target_tokens[mapped].span))
    }
}
