//! Paragraph splitting of the composited top-level sequence.
//!
//! Only top-level text nodes are searched for newlines. An annotated node is
//! atomic: it stays whole inside the paragraph it starts in, even when its
//! own text contains line breaks.

use memchr::memchr_iter;

use crate::model::{BaseText, OffsetUnit, ParagraphBlock, RenderNode};

/// Regroup top-level nodes into paragraphs, splitting at newlines in text
/// nodes. Empty paragraphs are dropped; if nothing is left, one empty
/// paragraph is returned.
pub fn split_paragraphs<'a>(nodes: Vec<RenderNode<'a>>, unit: OffsetUnit) -> Vec<ParagraphBlock<'a>> {
    let mut blocks = Vec::new();
    let mut current: Vec<RenderNode<'a>> = Vec::new();

    for node in nodes {
        let RenderNode::Text(text) = node else {
            current.push(node);
            continue;
        };

        let literal = text.text;
        let mut byte_start = 0;
        let mut unit_start = text.range.start;

        for newline in memchr_iter(b'\n', literal.as_bytes()) {
            let part = &literal[byte_start..newline];
            if !part.is_empty() {
                let unit_end = unit_start + unit.measure(part);
                current.push(RenderNode::text_node(unit_start..unit_end, part));
                unit_start = unit_end;
            }
            close_paragraph(&mut current, &mut blocks);
            byte_start = newline + 1;
            // A newline is one unit wide in every offset unit.
            unit_start += 1;
        }

        let tail = &literal[byte_start..];
        if !tail.is_empty() {
            current.push(RenderNode::text_node(unit_start..text.range.end, tail));
        }
    }
    close_paragraph(&mut current, &mut blocks);

    if blocks.is_empty() {
        blocks.push(ParagraphBlock::default());
    }
    blocks
}

fn close_paragraph<'a>(current: &mut Vec<RenderNode<'a>>, blocks: &mut Vec<ParagraphBlock<'a>>) {
    let (Some(first), Some(last)) = (current.first(), current.last()) else {
        return;
    };
    let range = first.range().start..last.range().end;
    blocks.push(ParagraphBlock {
        range,
        nodes: std::mem::take(current),
    });
}

/// Paragraphs of the raw text with no annotations.
pub fn plain_paragraphs<'a>(text: &BaseText<'a>) -> Vec<ParagraphBlock<'a>> {
    let whole = RenderNode::text_node(0..text.len(), text.as_str());
    split_paragraphs(vec![whole], text.unit())
}

/// Rebuild the base text from paragraph blocks.
///
/// Every offset not covered by a block was a newline removed by the
/// splitter, so gaps are refilled with newlines up to `len`.
pub fn reassemble(blocks: &[ParagraphBlock<'_>], len: usize) -> String {
    let mut out = String::new();
    let mut cursor = 0;

    for block in blocks {
        push_newlines(&mut out, block.range.start.saturating_sub(cursor));
        out.push_str(&block.text());
        cursor = cursor.max(block.range.end);
    }
    push_newlines(&mut out, len.saturating_sub(cursor));
    out
}

fn push_newlines(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\n', count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnnotationSpan, SourceKind};
    use crate::overlay::compose::compose;

    fn paragraphs<'a>(text: &BaseText<'a>, spans: &'a [AnnotationSpan]) -> Vec<ParagraphBlock<'a>> {
        split_paragraphs(compose(text, spans).unwrap(), text.unit())
    }

    fn texts(blocks: &[ParagraphBlock<'_>]) -> Vec<String> {
        blocks.iter().map(ParagraphBlock::text).collect()
    }

    #[test]
    fn no_newline_is_one_paragraph() {
        let text = BaseText::new("Hello world");
        let blocks = paragraphs(&text, &[]);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].nodes, vec![RenderNode::text_node(0..11, "Hello world")]);
        assert_eq!(blocks[0].range, 0..11);
    }

    #[test]
    fn splits_on_newlines_and_drops_empty_paragraphs() {
        let source = "First.\n\nSecond.\nThird.\n";
        let text = BaseText::new(source);
        let blocks = paragraphs(&text, &[]);
        assert_eq!(texts(&blocks), ["First.", "Second.", "Third."]);
        assert_eq!(blocks[1].range, 8..15);
        assert_eq!(reassemble(&blocks, text.len()), source);
    }

    #[test]
    fn newline_inside_annotation_does_not_split() {
        let source = "A [quote\nwith break] B";
        let text = BaseText::new(source);
        let spans = [AnnotationSpan::new("src-0", SourceKind::Citation, 3..19, "q")];
        let blocks = paragraphs(&text, &spans);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].nodes.len(), 3);
        let citation = blocks[0].nodes[1].as_annotated().unwrap();
        assert_eq!(citation.text, "quote\nwith break");
        assert_eq!(reassemble(&blocks, text.len()), source);
    }

    #[test]
    fn annotation_between_paragraphs_stays_whole() {
        let source = "Intro.\nDijo \"no\".\nFin.";
        let text = BaseText::new(source);
        let spans = [AnnotationSpan::new("src-0", SourceKind::Citation, 7..17, "q")];
        let blocks = paragraphs(&text, &spans);
        assert_eq!(texts(&blocks), ["Intro.", "Dijo \"no\".", "Fin."]);
        assert_eq!(blocks[1].nodes.len(), 1);
        assert_eq!(blocks[1].range, 7..17);
    }

    #[test]
    fn empty_text_gives_one_empty_paragraph() {
        let text = BaseText::new("");
        let blocks = paragraphs(&text, &[]);
        assert_eq!(blocks, vec![ParagraphBlock::default()]);
    }

    #[test]
    fn only_newlines_gives_one_empty_paragraph() {
        let text = BaseText::new("\n\n\n");
        let blocks = plain_paragraphs(&text);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].is_empty());
        assert_eq!(reassemble(&blocks, text.len()), "\n\n\n");
    }

    #[test]
    fn whitespace_only_paragraph_is_kept() {
        let text = BaseText::new("a\n \nb");
        let blocks = plain_paragraphs(&text);
        assert_eq!(texts(&blocks), ["a", " ", "b"]);
    }

    #[test]
    fn ranges_use_the_text_unit() {
        let source = "😀 uno\ndós";
        let text = BaseText::with_unit(source, OffsetUnit::Utf16);
        let blocks = plain_paragraphs(&text);
        assert_eq!(blocks[0].range, 0..6);
        assert_eq!(blocks[1].range, 7..10);
        assert_eq!(reassemble(&blocks, text.len()), source);
    }

    #[test]
    fn leading_newlines_round_trip() {
        let source = "\n\nTitle\n";
        let text = BaseText::new(source);
        let blocks = plain_paragraphs(&text);
        assert_eq!(blocks[0].range, 2..7);
        assert_eq!(reassemble(&blocks, text.len()), source);
    }
}
