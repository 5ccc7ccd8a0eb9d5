//! Record shapes emitted by the upstream annotators.
//!
//! Offsets are signed so that negative values survive deserialization and
//! can be dropped by the collector instead of failing the whole article.

use std::collections::BTreeMap;

use super::{AnnotationSource, RawSpan};
use crate::model::{Label, Polarity, SourceKind};
use crate::palette::Palette;

/// Referent used when a citation names no source.
pub const UNNAMED_REFERENT: &str = "cited source";

/// A named entity found by the NER annotator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct EntityMention {
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub entity_type: String,
    pub start_char: i64,
    pub end_char: i64,
}

/// An adjective with its morphological features.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct AdjectiveMention {
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    pub start_char: i64,
    pub end_char: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: BTreeMap<String, String>,
}

/// The highest-scoring sentence for one polarity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ScoredSentence {
    pub score: f64,
    pub start_char: i64,
    pub end_char: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sentence: Option<String>,
}

/// At most one highlighted sentence per polarity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SentimentHighlights {
    #[cfg_attr(feature = "serde", serde(rename = "POS"))]
    pub positive: Option<ScoredSentence>,
    #[cfg_attr(feature = "serde", serde(rename = "NEU"))]
    pub neutral: Option<ScoredSentence>,
    #[cfg_attr(feature = "serde", serde(rename = "NEG"))]
    pub negative: Option<ScoredSentence>,
}

impl SentimentHighlights {
    pub fn get(&self, polarity: Polarity) -> Option<&ScoredSentence> {
        match polarity {
            Polarity::Positive => self.positive.as_ref(),
            Polarity::Neutral => self.neutral.as_ref(),
            Polarity::Negative => self.negative.as_ref(),
        }
    }
}

/// A quotation attributed to a source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Citation {
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: Option<String>,
    pub start_char: i64,
    pub end_char: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub components: Option<CitationComponents>,
}

impl Citation {
    /// Who is being cited, if the annotator found out.
    pub fn referent(&self) -> Option<&str> {
        self.components
            .as_ref()?
            .referent
            .as_ref()
            .map(|c| c.text.as_str())
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CitationComponents {
    #[cfg_attr(feature = "serde", serde(default, rename = "referenciado", alias = "referent"))]
    pub referent: Option<CitationComponent>,
    #[cfg_attr(feature = "serde", serde(default, rename = "conector", alias = "connector"))]
    pub connector: Option<CitationComponent>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct CitationComponent {
    pub text: String,
}

impl AnnotationSource for Vec<EntityMention> {
    fn kind(&self) -> SourceKind {
        SourceKind::Entity
    }

    fn raw_spans(&self, palette: &Palette) -> Vec<RawSpan> {
        self.iter()
            .enumerate()
            .map(|(idx, entity)| RawSpan {
                local_id: idx.to_string(),
                start: entity.start_char,
                end: entity.end_char,
                display_class: palette.class(SourceKind::Entity).to_string(),
                label: Some(Label::Entity {
                    entity_type: entity.entity_type.clone(),
                }),
            })
            .collect()
    }
}

impl AnnotationSource for Vec<AdjectiveMention> {
    fn kind(&self) -> SourceKind {
        SourceKind::Adjective
    }

    fn raw_spans(&self, palette: &Palette) -> Vec<RawSpan> {
        self.iter()
            .enumerate()
            .map(|(idx, adjective)| RawSpan {
                local_id: idx.to_string(),
                start: adjective.start_char,
                end: adjective.end_char,
                display_class: palette.class(SourceKind::Adjective).to_string(),
                label: Some(Label::Adjective {
                    features: adjective.features.clone(),
                }),
            })
            .collect()
    }
}

impl AnnotationSource for SentimentHighlights {
    fn kind(&self) -> SourceKind {
        SourceKind::Sentiment
    }

    fn raw_spans(&self, palette: &Palette) -> Vec<RawSpan> {
        Polarity::ALL
            .into_iter()
            .filter_map(|polarity| {
                let sentence = self.get(polarity)?;
                Some(RawSpan {
                    local_id: polarity.code().to_string(),
                    start: sentence.start_char,
                    end: sentence.end_char,
                    display_class: palette.sentiment_class(polarity).to_string(),
                    label: Some(Label::Sentiment {
                        polarity,
                        score: sentence.score,
                    }),
                })
            })
            .collect()
    }
}

impl AnnotationSource for Vec<Citation> {
    fn kind(&self) -> SourceKind {
        SourceKind::Citation
    }

    fn raw_spans(&self, palette: &Palette) -> Vec<RawSpan> {
        self.iter()
            .enumerate()
            .map(|(idx, citation)| RawSpan {
                local_id: idx.to_string(),
                start: citation.start_char,
                end: citation.end_char,
                display_class: palette.class(SourceKind::Citation).to_string(),
                label: Some(Label::Citation {
                    referent: citation.referent().unwrap_or(UNNAMED_REFERENT).to_string(),
                }),
            })
            .collect()
    }
}
