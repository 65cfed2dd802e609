//! Per-call switching options.
//!
//! Options travel as an explicit value through the transform so row
//! processing stays pure and safe to partition; nothing is read from
//! ambient state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwitchError};

/// Tie-break policy when a target span is already consumed by an earlier
/// alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignPolicy {
    /// Take the leftmost target token not yet consumed.
    #[default]
    Leftmost,
}

/// Options for one switching run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchOptions {
    /// Fraction of tokens to replace (ratio-token method only).
    pub ratio: f64,
    /// Base seed for the ratio method's per-row selection streams.
    pub seed: u64,
    /// Rows with fewer source tokens are passed through unmodified.
    pub min_tokens: usize,
    /// Target-span tie-break policy.
    pub align: AlignPolicy,
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            seed: 0,
            min_tokens: 1,
            align: AlignPolicy::default(),
        }
    }
}

impl SwitchOptions {
    /// Validate the ratio bound, keeping the builder chain fallible only
    /// where the input can actually be invalid.
    pub fn with_ratio(mut self, ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&ratio) || ratio.is_nan() {
            return Err(SwitchError::InvalidRatio(ratio));
        }
        self.ratio = ratio;
        Ok(self)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_bounded() {
        assert!(SwitchOptions::default().with_ratio(0.0).is_ok());
        assert!(SwitchOptions::default().with_ratio(1.0).is_ok());
        assert!(SwitchOptions::default().with_ratio(1.5).is_err());
        assert!(SwitchOptions::default().with_ratio(-0.1).is_err());
        assert!(SwitchOptions::default().with_ratio(f64::NAN).is_err());
    }
}
