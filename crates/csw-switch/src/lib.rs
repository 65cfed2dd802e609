//! Code-switching transform core.
//!
//! This crate holds the per-row transform: tokenization, span selection
//! (noun-token and ratio-token), target alignment, and substitution.
//!
//! - **tokenize**: whitespace tokenizer with byte spans
//! - **tagger**: noun tagging capability and deterministic implementations
//! - **aligner**: word alignment capability and the positional default
//! - **select**: seeded ratio-token span selection
//! - **substitute**: span splicing
//! - **row**: the per-row switching routine

pub mod aligner;
pub mod row;
pub mod select;
pub mod substitute;
pub mod tagger;
pub mod tokenize;

pub use aligner::{PositionalAligner, WordAligner};
pub use row::{RowInput, RowSwitcher, SwitchedRow};
pub use select::{ratio_count, ratio_spans};
pub use substitute::substitute;
pub use tagger::{HeuristicTagger, NounTagger, WordListTagger};
pub use tokenize::{Token, tokenize};
