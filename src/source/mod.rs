//! Annotation sources consumed by the span collector.
//!
//! Each annotator's output is a list of records with its own shape. The
//! [`AnnotationSource`] trait flattens a list into [`RawSpan`]s tagged with a
//! source-local id; the collector validates them and mints the final ids.
//! Supporting a new annotator means adding a [`SourceKind`] variant and an
//! implementation of this trait. The compositor never changes.

#[cfg(feature = "serde")]
pub mod article;
mod records;

pub use records::{
    AdjectiveMention, Citation, CitationComponent, CitationComponents, EntityMention,
    ScoredSentence, SentimentHighlights, UNNAMED_REFERENT,
};

use crate::model::{Label, SourceKind};
use crate::palette::Palette;

/// A span as reported by an annotator, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    /// Stable within the source: list index, or polarity code for sentiment.
    pub local_id: String,
    pub start: i64,
    pub end: i64,
    pub display_class: String,
    pub label: Option<Label>,
}

/// One annotator's output.
pub trait AnnotationSource {
    fn kind(&self) -> SourceKind;

    /// Every span the annotator reported, including malformed ones.
    fn raw_spans(&self, palette: &Palette) -> Vec<RawSpan>;
}

/// All annotator output for one article.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationSources {
    pub entities: Vec<EntityMention>,
    pub adjectives: Vec<AdjectiveMention>,
    pub sentiment: SentimentHighlights,
    pub citations: Vec<Citation>,
}

impl AnnotationSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources in collection order: entity, adjective, sentiment, citation.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AnnotationSource> {
        [
            &self.entities as &dyn AnnotationSource,
            &self.adjectives,
            &self.sentiment,
            &self.citations,
        ]
        .into_iter()
    }
}
