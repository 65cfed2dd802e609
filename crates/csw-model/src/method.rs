//! Switching methods and deterministic output-column naming.

use serde::{Deserialize, Serialize};

use crate::language::LanguagePair;

/// How source spans are chosen for replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchMethod {
    /// Linguistically motivated: noun tokens only.
    NounToken,
    /// Non-linguistic: a fixed fraction of tokens, seeded random selection.
    RatioToken,
}

impl SwitchMethod {
    pub fn slug(self) -> &'static str {
        match self {
            SwitchMethod::NounToken => "noun_token",
            SwitchMethod::RatioToken => "ratio_token",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SwitchMethod::NounToken => {
                "Replace noun tokens with their aligned target-language spans"
            }
            SwitchMethod::RatioToken => {
                "Replace a fixed fraction of tokens via seeded random selection"
            }
        }
    }
}

/// Derive the output column name from the language pair and method.
///
/// Independent runs over the same (source, target, method) triple always
/// produce the same column, e.g. `en2ar_noun_token` or `en2ar+fr_ratio_token`.
pub fn switch_column_name(pair: &LanguagePair, method: SwitchMethod) -> String {
    format!(
        "{}2{}_{}",
        pair.source.as_str(),
        pair.target_label(),
        method.slug()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTag;

    fn pair(source: &str, targets: &[&str]) -> LanguagePair {
        LanguagePair::new(
            LanguageTag::new(source).unwrap(),
            targets
                .iter()
                .map(|t| LanguageTag::new(t).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn column_name_is_deterministic() {
        let p = pair("en", &["ar"]);
        assert_eq!(switch_column_name(&p, SwitchMethod::NounToken), "en2ar_noun_token");
        assert_eq!(
            switch_column_name(&p, SwitchMethod::RatioToken),
            "en2ar_ratio_token"
        );
    }

    #[test]
    fn column_name_joins_multiple_targets() {
        let p = pair("en", &["ar", "fr"]);
        assert_eq!(
            switch_column_name(&p, SwitchMethod::NounToken),
            "en2ar+fr_noun_token"
        );
    }
}
