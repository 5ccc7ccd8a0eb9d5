//! Interval composition: flat, overlapping spans to one nested render tree.
//!
//! Spans are sorted container-first (ascending start, then descending end,
//! input order for identical ranges). The sorted list is then partitioned
//! recursively: the first span of a working slice becomes a node, every
//! following span that starts before that node's end becomes its child, and
//! the next span after that run becomes its next sibling.
//!
//! A span that starts inside a container but ends past it is clamped to the
//! container's end. The part past the container is not rendered as part of
//! that span; the offsets fall back to the enclosing level as plain text or
//! other spans. Every collected span yields exactly one node.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::model::{AnnotatedNode, AnnotationSpan, BaseText, RenderNode};

/// Composite `spans` over `text` into a sequence covering the whole text.
///
/// Spans must be non-empty, within the text, and on unit boundaries (the
/// collector guarantees this). Violations are reported as errors; in debug
/// builds they also trip an assertion.
pub fn compose<'a>(text: &BaseText<'a>, spans: &'a [AnnotationSpan]) -> Result<Vec<RenderNode<'a>>> {
    let len = text.len();

    if spans.is_empty() {
        return Ok(vec![RenderNode::text_node(0..len, text.as_str())]);
    }

    for span in spans {
        let valid = span.start < span.end
            && span.end <= len
            && text.is_boundary(span.start)
            && text.is_boundary(span.end);
        ensure(valid, || Error::SpanOutOfBounds {
            id: span.id.clone(),
            start: span.start,
            end: span.end,
            len,
        })?;
    }

    let mut sorted: Vec<&'a AnnotationSpan> = spans.iter().collect();
    sorted.sort_by(|a, b| a.container_order(b));

    let nodes = partition(text, &sorted, 0..len)?;
    log::trace!("composed {} spans into {} top-level nodes", spans.len(), nodes.len());
    Ok(nodes)
}

/// Partition `range` among `spans`, which are sorted and all start inside it.
fn partition<'a>(
    text: &BaseText<'a>,
    spans: &[&'a AnnotationSpan],
    range: Range<usize>,
) -> Result<Vec<RenderNode<'a>>> {
    ensure(range.start <= range.end, || Error::InvertedRange {
        start: range.start,
        end: range.end,
    })?;

    let mut nodes = Vec::new();
    let mut cursor = range.start;
    let mut i = 0;

    while i < spans.len() {
        let span = spans[i];
        ensure(span.start >= cursor && span.start < range.end, || {
            Error::SpanOutsideRange {
                id: span.id.clone(),
                start: span.start,
                range_start: cursor,
                range_end: range.end,
            }
        })?;

        if span.start > cursor {
            nodes.push(text_node(text, cursor..span.start)?);
        }

        let end = span.end.min(range.end);
        if end < span.end {
            log::debug!(
                "span {} ({}..{}) clamped to container end {end}",
                span.id,
                span.start,
                span.end
            );
        }

        // Sorted by start, so the spans starting before `end` are a prefix.
        let rest = &spans[i + 1..];
        let inner = rest.partition_point(|s| s.start < end);
        let children = partition(text, &rest[..inner], span.start..end)?;

        nodes.push(RenderNode::Annotated(AnnotatedNode {
            span,
            range: span.start..end,
            text: slice(text, span.start..end)?,
            children,
        }));

        cursor = end;
        i += 1 + inner;
    }

    if cursor < range.end {
        nodes.push(text_node(text, cursor..range.end)?);
    }

    Ok(nodes)
}

fn text_node<'a>(text: &BaseText<'a>, range: Range<usize>) -> Result<RenderNode<'a>> {
    let literal = slice(text, range.clone())?;
    Ok(RenderNode::text_node(range, literal))
}

fn slice<'a>(text: &BaseText<'a>, range: Range<usize>) -> Result<&'a str> {
    text.slice(range.clone()).ok_or(Error::InvertedRange {
        start: range.start,
        end: range.end,
    })
}

/// Check an internal invariant: assert in debug builds, error in release.
fn ensure(condition: bool, error: impl FnOnce() -> Error) -> Result<()> {
    if condition {
        return Ok(());
    }
    let error = error();
    if cfg!(debug_assertions) {
        panic!("compositor invariant violated: {error}");
    }
    Err(error)
}
