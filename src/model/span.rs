//! Annotation spans and their provenance.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The annotator a span came from.
///
/// The compositor never looks at the kind; only the collector and the
/// presentation layer do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceKind {
    /// Named-entity recognition.
    Entity,
    /// Adjective tagging.
    Adjective,
    /// Highest-scoring sentence per sentiment polarity.
    Sentiment,
    /// Source-citation detection.
    Citation,
}

impl SourceKind {
    /// Every kind, in collection order.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Entity,
        SourceKind::Adjective,
        SourceKind::Sentiment,
        SourceKind::Citation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Entity => "entity",
            SourceKind::Adjective => "adjective",
            SourceKind::Sentiment => "sentiment",
            SourceKind::Citation => "citation",
        }
    }

    /// Prefix used when minting span ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            SourceKind::Entity => "ent",
            SourceKind::Adjective => "adj",
            SourceKind::Sentiment => "sen",
            SourceKind::Citation => "src",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entity" | "entities" => Ok(SourceKind::Entity),
            "adjective" | "adjectives" => Ok(SourceKind::Adjective),
            "sentiment" | "sentiments" => Ok(SourceKind::Sentiment),
            "citation" | "citations" | "source" | "sources" => Ok(SourceKind::Citation),
            other => Err(format!("unknown source kind: {other}")),
        }
    }
}

/// Sentiment polarity of a highlighted sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    #[cfg_attr(feature = "serde", serde(rename = "POS"))]
    Positive,
    #[cfg_attr(feature = "serde", serde(rename = "NEU"))]
    Neutral,
    #[cfg_attr(feature = "serde", serde(rename = "NEG"))]
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 3] = [Polarity::Positive, Polarity::Neutral, Polarity::Negative];

    /// The annotator's three-letter code.
    pub fn code(self) -> &'static str {
        match self {
            Polarity::Positive => "POS",
            Polarity::Neutral => "NEU",
            Polarity::Negative => "NEG",
        }
    }
}

/// Metadata carried through composition untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Label {
    Entity {
        entity_type: String,
    },
    Adjective {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "BTreeMap::is_empty"))]
        features: BTreeMap<String, String>,
    },
    Sentiment {
        polarity: Polarity,
        score: f64,
    },
    Citation {
        referent: String,
    },
}

impl Label {
    /// Short text for tooltips. `None` when the label has nothing to say.
    pub fn tooltip(&self) -> Option<String> {
        match self {
            Label::Entity { entity_type } => Some(entity_type.clone()),
            Label::Adjective { features } if features.is_empty() => None,
            Label::Adjective { features } => Some(
                features
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            Label::Sentiment { polarity, .. } => Some(polarity.code().to_string()),
            Label::Citation { referent } => Some(referent.clone()),
        }
    }
}

/// A `[start, end)` annotation over the base text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnnotationSpan {
    /// Unique within one composition run (`"{prefix}-{local}"`).
    pub id: String,
    pub start: usize,
    pub end: usize,
    pub kind: SourceKind,
    /// Opaque style tag for the presentation layer.
    pub display_class: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub label: Option<Label>,
}

impl AnnotationSpan {
    pub fn new(
        id: impl Into<String>,
        kind: SourceKind,
        range: Range<usize>,
        display_class: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            start: range.start,
            end: range.end,
            kind,
            display_class: display_class.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.label = Some(label);
        self
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Container-first order: ascending start, then descending end.
    ///
    /// At equal start the longer span sorts first and becomes the parent.
    /// Identical ranges compare equal; a stable sort keeps input order, so
    /// the earlier span wraps the later one.
    pub fn container_order(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| other.end.cmp(&self.end))
    }
}
