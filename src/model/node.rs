//! Render tree produced by the compositor and regrouped by the splitter.
//!
//! Nodes borrow both the base text and the collected spans, so a tree lives
//! exactly as long as the [`Overlay`](crate::overlay::Overlay) it came from.

use std::ops::Range;

use super::span::{AnnotationSpan, SourceKind};

/// One node of the render tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum RenderNode<'a> {
    /// Literal text with no annotation.
    Text(TextNode<'a>),
    /// An annotation and the nodes covering its effective range.
    Annotated(AnnotatedNode<'a>),
}

/// Unannotated literal text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextNode<'a> {
    pub range: Range<usize>,
    pub text: &'a str,
}

/// A span rendered over `range`, which is the span's range clamped to its
/// container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnotatedNode<'a> {
    pub span: &'a AnnotationSpan,
    pub range: Range<usize>,
    /// The base text covered by `range`.
    pub text: &'a str,
    /// Contiguous cover of `range`.
    pub children: Vec<RenderNode<'a>>,
}

impl<'a> RenderNode<'a> {
    pub fn text_node(range: Range<usize>, text: &'a str) -> Self {
        RenderNode::Text(TextNode { range, text })
    }

    /// Offsets covered by this node.
    pub fn range(&self) -> Range<usize> {
        match self {
            RenderNode::Text(node) => node.range.clone(),
            RenderNode::Annotated(node) => node.range.clone(),
        }
    }

    /// Literal text covered by this node.
    pub fn text(&self) -> &'a str {
        match self {
            RenderNode::Text(node) => node.text,
            RenderNode::Annotated(node) => node.text,
        }
    }

    pub fn as_annotated(&self) -> Option<&AnnotatedNode<'a>> {
        match self {
            RenderNode::Annotated(node) => Some(node),
            RenderNode::Text(_) => None,
        }
    }

    /// Append the text of every leaf below this node, depth-first.
    pub fn push_leaf_text(&self, out: &mut String) {
        match self {
            RenderNode::Text(node) => out.push_str(node.text),
            RenderNode::Annotated(node) => {
                for child in &node.children {
                    child.push_leaf_text(out);
                }
            }
        }
    }

    /// Depth-first iterator over this node and every annotated descendant.
    pub fn annotations(&self) -> Annotations<'_, 'a> {
        Annotations { stack: vec![self] }
    }
}

impl<'a> AnnotatedNode<'a> {
    pub fn id(&self) -> &'a str {
        &self.span.id
    }

    pub fn kind(&self) -> SourceKind {
        self.span.kind
    }

    /// Whether the span was truncated at its container's end.
    pub fn is_clamped(&self) -> bool {
        self.range.end < self.span.end
    }
}

/// Iterator returned by [`RenderNode::annotations`].
pub struct Annotations<'n, 'a> {
    stack: Vec<&'n RenderNode<'a>>,
}

impl<'n, 'a> Iterator for Annotations<'n, 'a> {
    type Item = &'n AnnotatedNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let RenderNode::Annotated(annotated) = node {
                self.stack.extend(annotated.children.iter().rev());
                return Some(annotated);
            }
        }
        None
    }
}

/// A top-level group of nodes delimited by newlines outside any annotation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParagraphBlock<'a> {
    /// Offsets of the base text this paragraph covers.
    pub range: Range<usize>,
    pub nodes: Vec<RenderNode<'a>>,
}

impl<'a> ParagraphBlock<'a> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The paragraph's literal text.
    pub fn text(&self) -> String {
        self.nodes.iter().map(RenderNode::text).collect()
    }

    /// Every annotated node in the paragraph, depth-first.
    pub fn annotations(&self) -> impl Iterator<Item = &AnnotatedNode<'a>> {
        self.nodes.iter().flat_map(RenderNode::annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotations_are_depth_first() {
        let outer = AnnotationSpan::new("sen-POS", SourceKind::Sentiment, 0..9, "s");
        let inner = AnnotationSpan::new("adj-0", SourceKind::Adjective, 4..9, "a");
        let tree = RenderNode::Annotated(AnnotatedNode {
            span: &outer,
            range: 0..9,
            text: "The quick",
            children: vec![
                RenderNode::text_node(0..4, "The "),
                RenderNode::Annotated(AnnotatedNode {
                    span: &inner,
                    range: 4..9,
                    text: "quick",
                    children: vec![RenderNode::text_node(4..9, "quick")],
                }),
            ],
        });

        let ids: Vec<_> = tree.annotations().map(AnnotatedNode::id).collect();
        assert_eq!(ids, ["sen-POS", "adj-0"]);

        let mut leaves = String::new();
        tree.push_leaf_text(&mut leaves);
        assert_eq!(leaves, tree.text());
    }

    #[test]
    fn clamped_when_range_ends_before_span() {
        let span = AnnotationSpan::new("ent-0", SourceKind::Entity, 5..20, "e");
        let node = AnnotatedNode {
            span: &span,
            range: 5..10,
            text: "fghij",
            children: vec![RenderNode::text_node(5..10, "fghij")],
        };
        assert!(node.is_clamped());
    }
}
