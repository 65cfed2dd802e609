//! Property tests for the switching core.

use proptest::prelude::*;

use csw_model::{Replacement, SpanSelection, SwitchMethod, SwitchOptions, TokenSpan};
use csw_switch::aligner::PositionalAligner;
use csw_switch::row::{RowInput, RowSwitcher};
use csw_switch::select::{ratio_count, ratio_spans};
use csw_switch::substitute::substitute;
use csw_switch::tagger::WordListTagger;
use csw_switch::tokenize::tokenize;

fn sentence_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z]{1,8}", 1..12).prop_map(|words| words.join(" "))
}

proptest! {
    /// Bytes outside the selected spans are byte-identical to the source.
    #[test]
    fn span_locality(source in sentence_strategy(), ratio in 0.0f64..=1.0, seed in any::<u64>()) {
        let spans = ratio_spans(&source, ratio, seed, 0);
        let marker = "\u{2731}";
        let replacements: Vec<Replacement> = spans
            .iter()
            .map(|span| Replacement { span: *span, text: marker.to_string() })
            .collect();
        let selection = SpanSelection::new(replacements, source.len()).unwrap();
        let output = substitute(&source, &selection).unwrap();

        // Walk the gaps between spans; each must appear verbatim, in order.
        let mut expected_gaps = Vec::new();
        let mut cursor = 0usize;
        for span in &spans {
            expected_gaps.push(&source[cursor..span.start]);
            cursor = span.end;
        }
        expected_gaps.push(&source[cursor..]);
        let actual_gaps: Vec<&str> = output.split(marker).collect();
        prop_assert_eq!(actual_gaps, expected_gaps);
    }

    /// Same row, ratio, and seed: byte-identical output.
    #[test]
    fn determinism(source in sentence_strategy(), target in sentence_strategy(), ratio in 0.0f64..=1.0, seed in any::<u64>(), row in 0usize..1000) {
        let options = SwitchOptions::default().with_ratio(ratio).unwrap().with_seed(seed);
        let tagger = WordListTagger::default();
        let aligner = PositionalAligner::new();
        let switcher = RowSwitcher::new(SwitchMethod::RatioToken, &options, &tagger, &aligner);
        let input = RowInput { source: &source, targets: &[target.as_str()], row_index: row };
        let first = switcher.switch_row(input);
        let second = switcher.switch_row(input);
        prop_assert_eq!(first.text, second.text);
        prop_assert_eq!(first.outcome, second.outcome);
    }

    /// The ratio method selects exactly ceil(r * n) tokens.
    #[test]
    fn ratio_bound(source in sentence_strategy(), ratio in 0.0f64..=1.0, seed in any::<u64>()) {
        let n = tokenize(&source).len();
        let spans = ratio_spans(&source, ratio, seed, 0);
        prop_assert_eq!(spans.len(), ratio_count(ratio, n));
        prop_assert!(spans.len() <= n);
    }

    /// Selected spans never overlap and stay within source bounds.
    #[test]
    fn no_overlap(source in sentence_strategy(), ratio in 0.0f64..=1.0, seed in any::<u64>(), row in 0usize..1000) {
        let spans = ratio_spans(&source, ratio, seed, row);
        for span in &spans {
            prop_assert!(span.end <= source.len());
            prop_assert!(span.start < span.end);
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start);
        }
    }

    /// A selection built from arbitrary overlapping spans is rejected, never
    /// spliced incorrectly.
    #[test]
    fn overlap_is_rejected(start in 0usize..20, len_a in 1usize..10, len_b in 1usize..10) {
        let source = "abcdefghijklmnopqrstuvwxyzabcdef".to_string();
        let a = TokenSpan::new(start, start + len_a);
        let b = TokenSpan::new(start + len_a - 1, start + len_a - 1 + len_b);
        let replacements = vec![
            Replacement { span: a, text: "x".to_string() },
            Replacement { span: b, text: "y".to_string() },
        ];
        prop_assert!(SpanSelection::new(replacements, source.len()).is_err());
    }
}
