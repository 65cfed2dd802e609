//! Span substitution.

use csw_model::{Result, SpanSelection, SwitchError};

/// Splice replacement text into the source at each selected span.
///
/// Copies source bytes between spans verbatim and emits each replacement in
/// order, left to right. The selection is already validated for ordering,
/// overlap, and bounds; a span that still fails to slice (a non-boundary
/// offset from a foreign tagger) is a conflict.
pub fn substitute(source: &str, selection: &SpanSelection) -> Result<String> {
    let mut output = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for replacement in selection.iter() {
        let span = replacement.span;
        let gap = source
            .get(cursor..span.start)
            .ok_or(SwitchError::SpanConflict {
                start: span.start,
                end: span.end,
                source_len: source.len(),
            })?;
        output.push_str(gap);
        output.push_str(&replacement.text);
        cursor = span.end;
    }
    let tail = source.get(cursor..).ok_or(SwitchError::SpanConflict {
        start: cursor,
        end: source.len(),
        source_len: source.len(),
    })?;
    output.push_str(tail);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use csw_model::{Replacement, TokenSpan};

    fn selection(source: &str, repls: Vec<(usize, usize, &str)>) -> SpanSelection {
        SpanSelection::new(
            repls
                .into_iter()
                .map(|(start, end, text)| Replacement {
                    span: TokenSpan::new(start, end),
                    text: text.to_string(),
                })
                .collect(),
            source.len(),
        )
        .unwrap()
    }

    #[test]
    fn splices_left_to_right() {
        let source = "The cat sat on the mat";
        let sel = selection(source, vec![(4, 7, "القط"), (19, 22, "السجادة")]);
        let output = substitute(source, &sel).unwrap();
        assert_eq!(output, "The القط sat on the السجادة");
    }

    #[test]
    fn empty_selection_is_identity() {
        let source = "unchanged text";
        assert_eq!(substitute(source, &SpanSelection::empty()).unwrap(), source);
    }

    #[test]
    fn text_outside_spans_is_byte_identical() {
        let source = "alpha beta gamma";
        let sel = selection(source, vec![(6, 10, "XYZ")]);
        let output = substitute(source, &sel).unwrap();
        assert!(output.starts_with("alpha "));
        assert!(output.ends_with(" gamma"));
    }

    #[test]
    fn non_char_boundary_span_is_a_conflict() {
        // Byte 1 is inside the first multibyte char.
        let source = "جلس القط";
        let sel = SpanSelection::new(
            vec![Replacement {
                span: TokenSpan::new(1, 3),
                text: "x".to_string(),
            }],
            source.len(),
        )
        .unwrap();
        assert!(substitute(source, &sel).is_err());
    }
}
