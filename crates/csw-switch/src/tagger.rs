//! Noun tagging capability.
//!
//! The production part-of-speech model is an external capability; anything
//! that can mark noun spans in a sentence plugs in through [`NounTagger`].
//! Two deterministic implementations live in-repo: a rule-based heuristic
//! for offline runs and a word-list tagger for fixtures and curated noun
//! inventories.

use csw_model::{Result, TokenSpan};

use crate::tokenize::{Token, tokenize};

/// Marks the noun spans of a sentence.
pub trait NounTagger {
    /// Byte spans of noun tokens in `text`, sorted by start offset.
    fn tag(&self, text: &str) -> Result<Vec<TokenSpan>>;
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "no", "each", "every", "another",
];

const FUNCTION_WORDS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "my", "your", "his", "her", "its", "our",
    "their", "some", "any", "no", "each", "every", "another", "of", "in", "on", "at", "by", "for",
    "with", "to", "from", "as", "into", "onto", "over", "under", "about", "after", "before",
    "between", "through", "during", "and", "or", "but", "nor", "so", "yet", "if", "than", "then",
    "when", "while", "because", "is", "am", "are", "was", "were", "be", "been", "being", "do",
    "does", "did", "have", "has", "had", "will", "would", "can", "could", "shall", "should",
    "may", "might", "must", "not", "it", "he", "she", "they", "we", "you", "i", "him", "them",
    "us", "me", "who", "whom", "whose", "which", "what", "there", "here", "very", "too", "also",
    "just", "only", "more", "most", "such",
];

const COMMON_VERBS: &[&str] = &[
    "sat", "ran", "went", "said", "made", "took", "came", "saw", "got", "put", "gave", "found",
    "told", "became", "left", "felt", "knew", "thought", "looked", "seemed", "asked", "stood",
    "walked", "ate", "wrote", "began", "kept", "held", "brought", "meant",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "hood", "dom", "ism", "ology",
    "graphy",
];

/// Rule-based noun tagger: determiner-phrase heads plus suffix cues.
///
/// A determiner opens a phrase of up to three content tokens; the last
/// content token before a function word, verb, or clause boundary is tagged
/// as the phrase head. Tokens carrying a nominal suffix are tagged wherever
/// they appear. Nothing here consults frequency data or context beyond the
/// sentence, so identical input always yields identical spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }
}

/// The alphanumeric core of a token: byte span minus surrounding punctuation.
fn core_span(token: &Token<'_>) -> Option<(TokenSpan, String)> {
    let text = token.text;
    let leading = text
        .char_indices()
        .find(|(_, ch)| ch.is_alphanumeric())
        .map(|(idx, _)| idx)?;
    let trailing = text
        .char_indices()
        .rev()
        .find(|(_, ch)| ch.is_alphanumeric())
        .map(|(idx, ch)| idx + ch.len_utf8())?;
    if trailing <= leading {
        return None;
    }
    let core = &text[leading..trailing];
    if !core.chars().any(char::is_alphabetic) {
        return None;
    }
    Some((
        TokenSpan::new(token.span.start + leading, token.span.start + trailing),
        core.to_lowercase(),
    ))
}

fn is_listed(word: &str, list: &[&str]) -> bool {
    list.contains(&word)
}

fn has_noun_suffix(word: &str) -> bool {
    NOUN_SUFFIXES
        .iter()
        .any(|suffix| word.len() > suffix.len() + 2 && word.ends_with(suffix))
}

/// True when the token closes a clause (its raw text ends with terminal
/// punctuation), so a determiner phrase cannot continue past it.
fn closes_clause(token: &Token<'_>) -> bool {
    token
        .text
        .chars()
        .last()
        .is_some_and(|ch| matches!(ch, '.' | ',' | ';' | ':' | '!' | '?'))
}

impl NounTagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Result<Vec<TokenSpan>> {
        let tokens = tokenize(text);
        let cores: Vec<Option<(TokenSpan, String)>> = tokens.iter().map(core_span).collect();
        let mut spans: Vec<TokenSpan> = Vec::new();

        let mut idx = 0;
        while idx < tokens.len() {
            let Some((own_span, word)) = &cores[idx] else {
                idx += 1;
                continue;
            };
            if is_listed(word, DETERMINERS) {
                // Phrase head: last content token within reach of the determiner.
                let mut head: Option<TokenSpan> = None;
                let mut cursor = idx + 1;
                while cursor < tokens.len() && cursor <= idx + 3 {
                    let Some((span, candidate)) = &cores[cursor] else {
                        break;
                    };
                    if is_listed(candidate, FUNCTION_WORDS) || is_listed(candidate, COMMON_VERBS) {
                        break;
                    }
                    head = Some(*span);
                    if closes_clause(&tokens[cursor]) {
                        cursor += 1;
                        break;
                    }
                    cursor += 1;
                }
                if let Some(span) = head {
                    spans.push(span);
                    idx = cursor;
                    continue;
                }
            } else if !is_listed(word, FUNCTION_WORDS)
                && !is_listed(word, COMMON_VERBS)
                && has_noun_suffix(word)
            {
                spans.push(*own_span);
            }
            idx += 1;
        }

        spans.sort_by_key(|span| span.start);
        spans.dedup();
        Ok(spans)
    }
}

/// Tags tokens whose core matches a fixed word list.
///
/// Deterministic by construction; used as the test fixture tagger and for
/// curated noun inventories.
#[derive(Debug, Clone, Default)]
pub struct WordListTagger {
    words: Vec<String>,
}

impl WordListTagger {
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect(),
        }
    }
}

impl NounTagger for WordListTagger {
    fn tag(&self, text: &str) -> Result<Vec<TokenSpan>> {
        let mut spans = Vec::new();
        for token in tokenize(text) {
            if let Some((span, word)) = core_span(&token)
                && self.words.iter().any(|listed| listed == &word)
            {
                spans.push(span);
            }
        }
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged_words(text: &str) -> Vec<String> {
        HeuristicTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|span| span.slice(text).unwrap().to_string())
            .collect()
    }

    #[test]
    fn tags_determiner_phrase_heads() {
        assert_eq!(tagged_words("The cat sat on the mat"), vec!["cat", "mat"]);
    }

    #[test]
    fn tags_head_after_adjectives() {
        assert_eq!(tagged_words("A small black dog barked"), vec!["dog"]);
    }

    #[test]
    fn span_excludes_trailing_punctuation() {
        let text = "He found the answer.";
        let spans = HeuristicTagger::new().tag(text).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), Some("answer"));
    }

    #[test]
    fn tags_suffix_nouns_without_determiners() {
        assert_eq!(tagged_words("Education matters"), vec!["Education"]);
    }

    #[test]
    fn function_words_and_verbs_are_never_tagged() {
        assert!(tagged_words("He sat and thought").is_empty());
    }

    #[test]
    fn phrase_does_not_cross_clause_boundary() {
        // "garden," ends the phrase; "full" is outside it.
        assert_eq!(tagged_words("The garden, full of weeds"), vec!["garden"]);
    }

    #[test]
    fn word_list_tagger_matches_cores() {
        let tagger = WordListTagger::new(["cat", "mat"]);
        let text = "The cat sat on the mat.";
        let spans = tagger.tag(text).unwrap();
        let words: Vec<&str> = spans.iter().map(|s| s.slice(text).unwrap()).collect();
        assert_eq!(words, vec!["cat", "mat"]);
    }
}
