//! HTML rendering of paragraph blocks.

use super::escape::{escape_attribute, escape_html};
use crate::model::{AnnotatedNode, ParagraphBlock, RenderNode};

/// Render paragraphs as `<p>` elements with nested `<mark>` annotations.
///
/// Line breaks inside annotations are emitted verbatim; style the container
/// with `white-space: pre-wrap` to show them.
pub fn render_html(blocks: &[ParagraphBlock<'_>]) -> String {
    let mut out = String::new();
    for block in blocks {
        out.push_str("<p>");
        for node in &block.nodes {
            render_node(node, &mut out);
        }
        out.push_str("</p>\n");
    }
    out
}

fn render_node(node: &RenderNode<'_>, out: &mut String) {
    match node {
        RenderNode::Text(text) => out.push_str(&escape_html(text.text)),
        RenderNode::Annotated(annotated) => render_mark(annotated, out),
    }
}

fn render_mark(node: &AnnotatedNode<'_>, out: &mut String) {
    let span = node.span;
    let title = span
        .label
        .as_ref()
        .and_then(|label| label.tooltip())
        .unwrap_or_else(|| span.kind.as_str().to_string());

    out.push_str("<mark class=\"");
    out.push_str(&escape_attribute(&span.display_class));
    out.push_str("\" data-span=\"");
    out.push_str(&escape_attribute(&span.id));
    out.push_str("\" title=\"");
    out.push_str(&escape_attribute(&title));
    out.push_str("\">");
    for child in &node.children {
        render_node(child, out);
    }
    out.push_str("</mark>");
}
