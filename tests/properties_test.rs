//! Property tests for the overlay pipeline.

use std::collections::BTreeSet;
use std::ops::Range;

use proptest::prelude::*;

use spanweave::overlay::reassemble;
use spanweave::source::{AdjectiveMention, Citation, EntityMention, ScoredSentence};
use spanweave::{AnnotationSources, Overlay, OverlayOptions, RenderNode, SourceKind};

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => Just('a'),
            2 => Just(' '),
            2 => Just('\n'),
            1 => Just('é'),
            1 => Just('😀'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// A text plus raw `(kind, start, end)` triples in code points. Some triples
/// run past the end or are empty; the collector drops those.
fn article_strategy() -> impl Strategy<Value = (String, Vec<(u8, i64, i64)>)> {
    text_strategy().prop_flat_map(|text| {
        let len = text.chars().count() as i64;
        let span = (0u8..4, 0..=len + 2, 0..=len + 2)
            .prop_map(|(kind, a, b)| (kind, a.min(b), a.max(b)));
        (Just(text), prop::collection::vec(span, 0..10))
    })
}

fn sources(raw: &[(u8, i64, i64)]) -> AnnotationSources {
    let mut sources = AnnotationSources::new();
    for &(kind, start, end) in raw {
        match kind {
            0 => sources.entities.push(EntityMention {
                text: String::new(),
                entity_type: "MISC".to_string(),
                start_char: start,
                end_char: end,
            }),
            1 => sources.adjectives.push(AdjectiveMention {
                text: None,
                start_char: start,
                end_char: end,
                features: Default::default(),
            }),
            2 => sources.citations.push(Citation {
                text: None,
                start_char: start,
                end_char: end,
                components: None,
            }),
            _ => {
                let slot = if sources.sentiment.positive.is_none() {
                    &mut sources.sentiment.positive
                } else {
                    &mut sources.sentiment.negative
                };
                *slot = Some(ScoredSentence {
                    score: 0.5,
                    start_char: start,
                    end_char: end,
                    sentence: None,
                });
            }
        }
    }
    sources
}

/// Every annotated node as `(path, id, range)`, where `path` holds child
/// indices from the top level.
fn flatten(nodes: &[RenderNode<'_>], path: &mut Vec<usize>, out: &mut Vec<(Vec<usize>, String, Range<usize>)>) {
    for (i, node) in nodes.iter().enumerate() {
        if let RenderNode::Annotated(annotated) = node {
            path.push(i);
            out.push((path.clone(), annotated.id().to_string(), annotated.range.clone()));
            flatten(&annotated.children, path, out);
            path.pop();
        }
    }
}

fn assert_covers(nodes: &[RenderNode<'_>], range: Range<usize>) -> Result<(), TestCaseError> {
    prop_assert!(!nodes.is_empty());
    let mut cursor = range.start;
    for node in nodes {
        prop_assert_eq!(node.range().start, cursor);
        prop_assert!(node.range().end > node.range().start || range.is_empty());
        cursor = node.range().end;
        if let RenderNode::Annotated(annotated) = node {
            assert_covers(&annotated.children, annotated.range.clone())?;
        }
    }
    prop_assert_eq!(cursor, range.end);
    Ok(())
}

fn tree_ids(overlay: &Overlay<'_>) -> Vec<String> {
    overlay
        .paragraphs()
        .iter()
        .flat_map(|p| p.annotations().map(|a| a.id().to_string()).collect::<Vec<_>>())
        .collect()
}

proptest! {
    #[test]
    fn prop_paragraphs_reassemble_to_text((text, raw) in article_strategy()) {
        let sources = sources(&raw);
        let overlay = Overlay::build(&text, &sources, &OverlayOptions::default());
        let paragraphs = overlay.try_paragraphs().unwrap();
        prop_assert_eq!(reassemble(&paragraphs, overlay.text().len()), text);
    }

    #[test]
    fn prop_siblings_cover_parent((text, raw) in article_strategy()) {
        let sources = sources(&raw);
        let overlay = Overlay::build(&text, &sources, &OverlayOptions::default());
        let nodes = overlay.compose().unwrap();
        assert_covers(&nodes, 0..overlay.text().len())?;
    }

    #[test]
    fn prop_every_span_renders_once((text, raw) in article_strategy()) {
        let sources = sources(&raw);
        let overlay = Overlay::build(&text, &sources, &OverlayOptions::default());
        let mut rendered = tree_ids(&overlay);
        let mut collected: Vec<String> = overlay.spans().iter().map(|s| s.id.clone()).collect();
        rendered.sort();
        collected.sort();
        prop_assert_eq!(rendered, collected);
    }

    #[test]
    fn prop_containment_means_ancestry((text, raw) in article_strategy()) {
        let sources = sources(&raw);
        let overlay = Overlay::build(&text, &sources, &OverlayOptions::default());
        let nodes = overlay.compose().unwrap();
        let mut flat = Vec::new();
        flatten(&nodes, &mut Vec::new(), &mut flat);

        for (path_a, id_a, a) in &flat {
            for (path_b, id_b, b) in &flat {
                if path_a == path_b {
                    continue;
                }
                if path_b.starts_with(path_a) {
                    prop_assert!(
                        a.start <= b.start && b.end <= a.end,
                        "{} {:?} does not contain descendant {} {:?}", id_a, a, id_b, b
                    );
                } else if !path_a.starts_with(path_b) {
                    prop_assert!(
                        a.end <= b.start || b.end <= a.start,
                        "unrelated {} {:?} and {} {:?} overlap", id_a, a, id_b, b
                    );
                }
            }
        }
    }

    #[test]
    fn prop_composition_is_deterministic((text, raw) in article_strategy()) {
        let sources = sources(&raw);
        let first = Overlay::build(&text, &sources, &OverlayOptions::default());
        let second = Overlay::build(&text, &sources, &OverlayOptions::default());
        prop_assert_eq!(first.paragraphs(), second.paragraphs());
    }

    #[test]
    fn prop_toggling_a_kind(
        (text, raw) in article_strategy(),
        kind in prop::sample::select(SourceKind::ALL.to_vec()),
    ) {
        let sources = sources(&raw);
        let everything = Overlay::build(&text, &sources, &OverlayOptions::default());

        let without = OverlayOptions::default().disable(kind);
        let reduced = Overlay::build(&text, &sources, &without);
        let expected: BTreeSet<String> = everything
            .spans()
            .iter()
            .filter(|s| s.kind != kind)
            .map(|s| s.id.clone())
            .collect();
        let rendered: BTreeSet<String> = tree_ids(&reduced).into_iter().collect();
        prop_assert_eq!(rendered, expected);

        let restored = Overlay::build(&text, &sources, &without.enable(kind));
        prop_assert_eq!(restored.paragraphs(), everything.paragraphs());
    }
}
