use std::sync::Arc;

use comma_protocol::{Span, SpanLabelView};
use comma_tree::parse_bracketed;
use proptest::prelude::*;

use crate::{AnnotationBundle, Comma, CommaConfig, CommaContext, Constituent, TextAnnotation};

fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
}

fn comma_over(text: String, position: usize, annotation: TextAnnotation) -> Comma {
    let bundle = Arc::new(AnnotationBundle::new(annotation).unwrap());
    Comma::new(position, None, &text, bundle).unwrap()
}

/// Contiguous chunks of the given lengths, plus a comma position inside them.
fn chunked_sentence() -> impl Strategy<Value = (Vec<usize>, usize)> {
    prop::collection::vec(1usize..4, 1..8).prop_flat_map(|lengths| {
        let total: usize = lengths.iter().sum();
        (Just(lengths), 0..total)
    })
}

/// Flat tree `(S (X w0) ... (, ,) ... (X wn))` with the comma at `position`.
fn flat_tree(n: usize, position: usize) -> String {
    let leaves: Vec<String> = (0..n)
        .map(|i| if i == position { "(, ,)".to_string() } else { format!("(X w{})", i) })
        .collect();
    format!("(S {})", leaves.join(" "))
}

/// `(S <before> (PRN <inner_left> (, ,) <inner_right>) <after>)`, leaves numbered left to right.
fn nested_tree(before: usize, inner_left: usize, inner_right: usize, after: usize) -> String {
    let leaves = |from: usize, count: usize| {
        (from..from + count).map(|i| format!("(X w{})", i)).collect::<Vec<_>>().join(" ")
    };
    let position = before + inner_left;
    let close = position + 1 + inner_right;
    format!(
        "(S {} (PRN {} (, ,) {}) {})",
        leaves(0, before),
        leaves(before, inner_left),
        leaves(position + 1, inner_right),
        leaves(close, after),
    )
}

proptest! {
    #[test]
    fn test_word_lookup_boundaries(
        (n, position) in (1usize..12).prop_flat_map(|n| (Just(n), 0..n)),
        distance in 0usize..20,
    ) {
        let text = words(n);
        let comma = comma_over(text.clone(), position, TextAnnotation::new(text));
        let ctx = CommaContext::new(&comma, CommaConfig::default());

        let right = ctx.word_to_right(distance);
        if position + distance >= n {
            prop_assert_eq!(right, "###");
        } else {
            prop_assert_eq!(right, format!("w{}", position + distance));
        }

        let left = ctx.word_to_left(distance);
        if distance > position {
            prop_assert_eq!(left, "$$$");
        } else {
            prop_assert_eq!(left, format!("w{}", position - distance));
        }
    }

    #[test]
    fn test_chunks_ordered_and_bounded((lengths, position) in chunked_sentence()) {
        let mut chunks = Vec::new();
        let mut start = 0;
        for len in &lengths {
            chunks.push(Constituent::new("NP", Span::new(start, start + len)));
            start += len;
        }
        let n = start;
        let right_count = chunks.iter().filter(|c| c.span.start > position).count();
        let left_count = chunks.len() - right_count;

        let text = words(n);
        let mut annotation = TextAnnotation::new(text.clone());
        annotation.shallow_parse = Some(SpanLabelView::new(chunks));
        let comma = comma_over(text, position, annotation);
        let ctx = CommaContext::new(&comma, CommaConfig::default());

        let mut previous = position;
        for d in 0..=right_count + 1 {
            let chunk = ctx.chunk_to_right(d).unwrap();
            prop_assert_eq!(chunk.is_none(), d == 0 || d > right_count);
            if let Some(chunk) = chunk {
                prop_assert!(chunk.span.start > previous);
                previous = chunk.span.start;
            }
        }

        let mut previous = usize::MAX;
        for d in 0..=left_count + 1 {
            let chunk = ctx.chunk_to_left(d).unwrap();
            prop_assert_eq!(chunk.is_none(), d == 0 || d > left_count);
            if let Some(chunk) = chunk {
                prop_assert!(chunk.span.start <= position);
                prop_assert!(chunk.span.start < previous);
                previous = chunk.span.start;
            }
        }
    }

    #[test]
    fn test_sibling_walk_is_monotonic(
        (n, position) in (1usize..10).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let bracketed = parse_bracketed(&flat_tree(n, position)).unwrap();
        let text = bracketed.sentence();
        let mut annotation = TextAnnotation::new(text.clone());
        annotation.parse = Some(bracketed.tree);
        let comma = comma_over(text, position, annotation);
        let ctx = CommaContext::new(&comma, CommaConfig::default());

        let mut left_gone = false;
        let mut right_gone = false;
        for d in 0..=n {
            let left = ctx.phrase_to_left_of_comma(d).unwrap();
            let right = ctx.phrase_to_right_of_comma(d).unwrap();
            prop_assert!(!(left_gone && left.is_some()));
            prop_assert!(!(right_gone && right.is_some()));
            prop_assert_eq!(left.is_some(), d <= position);
            prop_assert_eq!(right.is_some(), position + d < n);
            if let Some(node) = left {
                prop_assert_eq!(node.span, Span::token(position - d));
            }
            left_gone |= left.is_none();
            right_gone |= right.is_none();
        }
    }

    #[test]
    fn test_parent_walk_is_monotonic(
        before in 0usize..5,
        inner_left in 0usize..3,
        inner_right in 0usize..3,
        after in 0usize..5,
    ) {
        let bracketed = parse_bracketed(&nested_tree(before, inner_left, inner_right, after)).unwrap();
        let text = bracketed.sentence();
        let mut annotation = TextAnnotation::new(text.clone());
        annotation.parse = Some(bracketed.tree);
        let position = before + inner_left;
        let parent = Span::new(before, position + inner_right + 1);
        let comma = comma_over(text, position, annotation);
        let ctx = CommaContext::new(&comma, CommaConfig::default());

        let mut left_gone = false;
        let mut right_gone = false;
        for d in 0..=before + after + 1 {
            let left = ctx.phrase_to_left_of_parent(d).unwrap();
            let right = ctx.phrase_to_right_of_parent(d).unwrap();
            prop_assert!(!(left_gone && left.is_some()));
            prop_assert!(!(right_gone && right.is_some()));
            prop_assert_eq!(left.is_some(), d <= before);
            prop_assert_eq!(right.is_some(), d <= after);

            match (d, left, right) {
                (0, Some(l), Some(r)) => {
                    prop_assert_eq!(l.label.as_str(), "PRN");
                    prop_assert_eq!(l.span, parent);
                    prop_assert_eq!(r.span, parent);
                }
                (_, l, r) => {
                    if let Some(node) = l {
                        prop_assert_eq!(node.span, Span::token(before - d));
                    }
                    if let Some(node) = r {
                        prop_assert_eq!(node.span, Span::token(parent.end + d - 1));
                    }
                }
            }
            left_gone |= left.is_none();
            right_gone |= right.is_none();
        }
    }
}
