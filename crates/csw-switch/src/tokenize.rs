//! Whitespace tokenization with byte spans.
//!
//! Spans index into the original string so the substituter can copy the
//! untouched regions verbatim. Offsets are byte positions and always fall
//! on `char` boundaries.

use csw_model::TokenSpan;

/// A token and its byte span within the source sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: TokenSpan,
}

/// Split on Unicode whitespace, left to right, no empty tokens.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: &text[token_start..idx],
                    span: TokenSpan::new(token_start, idx),
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(token_start) = start {
        tokens.push(Token {
            text: &text[token_start..],
            span: TokenSpan::new(token_start, text.len()),
        });
    }
    tokens
}

/// Index of the token whose span contains `span`, if any.
pub fn containing_token(tokens: &[Token<'_>], span: TokenSpan) -> Option<usize> {
    tokens
        .iter()
        .position(|token| span.start >= token.span.start && span.end <= token.span.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_with_spans() {
        let tokens = tokenize("The cat  sat");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["The", "cat", "sat"]);
        assert_eq!(tokens[1].span, csw_model::TokenSpan::new(4, 7));
        // double space before "sat"
        assert_eq!(tokens[2].span.start, 9);
    }

    #[test]
    fn handles_leading_and_trailing_whitespace() {
        let tokens = tokenize("  hi  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "hi");
        assert_eq!(tokens[0].span, csw_model::TokenSpan::new(2, 4));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn multibyte_text_spans_are_char_aligned() {
        let text = "جلس القط";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 2);
        for token in &tokens {
            assert_eq!(token.span.slice(text), Some(token.text));
        }
    }

    #[test]
    fn finds_containing_token() {
        let tokens = tokenize("The cat sat");
        let span = csw_model::TokenSpan::new(4, 7);
        assert_eq!(containing_token(&tokens, span), Some(1));
        let outside = csw_model::TokenSpan::new(3, 7);
        assert_eq!(containing_token(&tokens, outside), None);
    }
}
