//! The annotation overlay pipeline.
//!
//! Three stages, each a pure function of its inputs:
//!
//! - [`collect`]: gather spans from the enabled sources, dropping malformed
//!   ones and minting stable ids
//! - [`compose`]: resolve nesting and overlap into one render tree covering
//!   the text exactly once
//! - [`paragraph`]: regroup the top level into paragraphs at newlines that
//!   lie outside every annotation
//!
//! [`Overlay`] ties them together for one (article, enabled sources) pair and
//! owns the collected spans the render tree borrows from.
//!
//! ## Known limitation
//!
//! A span that starts inside a container and ends past it is truncated at
//! the container's end. The remainder is not re-emitted as a sibling span.
//! [`AnnotatedNode::is_clamped`](crate::model::AnnotatedNode::is_clamped)
//! reports when this happened.

pub mod collect;
pub mod compose;
pub mod paragraph;

pub use collect::{Rejection, collect_spans};
pub use compose::compose;
pub use paragraph::{plain_paragraphs, reassemble, split_paragraphs};

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{AnnotationSpan, BaseText, OffsetUnit, ParagraphBlock, RenderNode, SourceKind};
use crate::palette::Palette;
use crate::source::{AnnotationSource, AnnotationSources};

/// Runtime choices for one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Source kinds whose spans are collected.
    pub enabled: BTreeSet<SourceKind>,
    /// Unit the annotators counted offsets in.
    pub unit: OffsetUnit,
    pub palette: Palette,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            enabled: SourceKind::ALL.into_iter().collect(),
            unit: OffsetUnit::default(),
            palette: Palette::default(),
        }
    }
}

impl OverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enabled set.
    pub fn with_enabled(mut self, kinds: impl IntoIterator<Item = SourceKind>) -> Self {
        self.enabled = kinds.into_iter().collect();
        self
    }

    pub fn enable(mut self, kind: SourceKind) -> Self {
        self.enabled.insert(kind);
        self
    }

    pub fn disable(mut self, kind: SourceKind) -> Self {
        self.enabled.remove(&kind);
        self
    }

    pub fn with_unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

/// A base text with the spans collected for it.
#[derive(Debug, Clone)]
pub struct Overlay<'a> {
    text: BaseText<'a>,
    spans: Vec<AnnotationSpan>,
}

impl<'a> Overlay<'a> {
    /// Collect spans for `text` from the built-in sources.
    pub fn build(text: &'a str, sources: &AnnotationSources, options: &OverlayOptions) -> Self {
        Self::collect(text, sources.iter(), options)
    }

    /// Collect spans for `text` from arbitrary sources.
    pub fn collect<'s>(
        text: &'a str,
        sources: impl IntoIterator<Item = &'s dyn AnnotationSource>,
        options: &OverlayOptions,
    ) -> Self {
        let text = BaseText::with_unit(text, options.unit);
        let spans = collect_spans(&text, sources, &options.enabled, &options.palette);
        Self { text, spans }
    }

    /// Use an already validated span list.
    pub fn from_spans(text: BaseText<'a>, spans: Vec<AnnotationSpan>) -> Self {
        Self { text, spans }
    }

    pub fn text(&self) -> &BaseText<'a> {
        &self.text
    }

    pub fn spans(&self) -> &[AnnotationSpan] {
        &self.spans
    }

    /// The composited top-level sequence.
    pub fn compose(&self) -> Result<Vec<RenderNode<'_>>> {
        compose(&self.text, &self.spans)
    }

    /// Composite and split into paragraphs, surfacing internal errors.
    pub fn try_paragraphs(&self) -> Result<Vec<ParagraphBlock<'_>>> {
        let nodes = self.compose()?;
        Ok(split_paragraphs(nodes, self.text.unit()))
    }

    /// Composite and split into paragraphs.
    ///
    /// If composition hits an internal invariant violation, the error is
    /// logged and the raw text is returned as unannotated paragraphs.
    pub fn paragraphs(&self) -> Vec<ParagraphBlock<'_>> {
        match self.try_paragraphs() {
            Ok(blocks) => blocks,
            Err(err) => {
                log::error!("annotation overlay failed, rendering plain text: {err}");
                plain_paragraphs(&self.text)
            }
        }
    }
}
