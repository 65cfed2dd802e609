//! Language tags and pairs.
//!
//! Tags are short lowercase identifiers (`en`, `ar`, `fra`) used to derive
//! output column names. A [`LanguagePair`] selects which two columns of a
//! row participate in substitution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwitchError};

/// A validated language tag: 2-8 ASCII alphanumeric characters, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        let raw = tag.as_ref().trim();
        if raw.len() < 2 || raw.len() > 8 || !raw.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            return Err(SwitchError::InvalidLanguageTag(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// The (source, targets) tags of one switching run.
///
/// A single target is the common case; multiple targets distribute
/// replacements round-robin across languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: LanguageTag,
    pub targets: Vec<LanguageTag>,
}

impl LanguagePair {
    pub fn new(source: LanguageTag, targets: Vec<LanguageTag>) -> Result<Self> {
        if targets.is_empty() {
            return Err(SwitchError::Message(
                "at least one target language is required".to_string(),
            ));
        }
        Ok(Self { source, targets })
    }

    /// Joined target tags for column naming: `ar` or `ar+fr`.
    pub fn target_label(&self) -> String {
        let tags: Vec<&str> = self.targets.iter().map(LanguageTag::as_str).collect();
        tags.join("+")
    }
}
