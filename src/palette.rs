//! Display classes assigned to spans at collection time.
//!
//! The compositor passes classes through untouched; the palette is the only
//! place that decides them.

use crate::model::{Polarity, SourceKind};

/// Display class per source kind, with one class per sentiment polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub entity: String,
    pub adjective: String,
    pub sentiment_positive: String,
    pub sentiment_neutral: String,
    pub sentiment_negative: String,
    pub citation: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            entity: "hl-entity".to_string(),
            adjective: "hl-adjective".to_string(),
            sentiment_positive: "hl-sentiment-pos".to_string(),
            sentiment_neutral: "hl-sentiment-neu".to_string(),
            sentiment_negative: "hl-sentiment-neg".to_string(),
            citation: "hl-citation".to_string(),
        }
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the class of a kind. For sentiment this sets all polarities.
    pub fn with_class(mut self, kind: SourceKind, class: impl Into<String>) -> Self {
        let class = class.into();
        match kind {
            SourceKind::Entity => self.entity = class,
            SourceKind::Adjective => self.adjective = class,
            SourceKind::Sentiment => {
                self.sentiment_positive = class.clone();
                self.sentiment_neutral = class.clone();
                self.sentiment_negative = class;
            }
            SourceKind::Citation => self.citation = class,
        }
        self
    }

    pub fn with_sentiment_class(mut self, polarity: Polarity, class: impl Into<String>) -> Self {
        *self.sentiment_slot(polarity) = class.into();
        self
    }

    /// Class for a non-sentiment kind; sentiment resolves to the neutral class.
    pub fn class(&self, kind: SourceKind) -> &str {
        match kind {
            SourceKind::Entity => &self.entity,
            SourceKind::Adjective => &self.adjective,
            SourceKind::Sentiment => &self.sentiment_neutral,
            SourceKind::Citation => &self.citation,
        }
    }

    pub fn sentiment_class(&self, polarity: Polarity) -> &str {
        match polarity {
            Polarity::Positive => &self.sentiment_positive,
            Polarity::Neutral => &self.sentiment_neutral,
            Polarity::Negative => &self.sentiment_negative,
        }
    }

    fn sentiment_slot(&mut self, polarity: Polarity) -> &mut String {
        match polarity {
            Polarity::Positive => &mut self.sentiment_positive,
            Polarity::Neutral => &mut self.sentiment_neutral,
            Polarity::Negative => &mut self.sentiment_negative,
        }
    }

    /// Parse a palette from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides() {
        let palette = Palette::new()
            .with_class(SourceKind::Sentiment, "mood")
            .with_sentiment_class(Polarity::Negative, "mood-bad")
            .with_class(SourceKind::Entity, "who");
        assert_eq!(palette.class(SourceKind::Entity), "who");
        assert_eq!(palette.sentiment_class(Polarity::Positive), "mood");
        assert_eq!(palette.sentiment_class(Polarity::Negative), "mood-bad");
        assert_eq!(palette.class(SourceKind::Citation), "hl-citation");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let palette = Palette::from_json(r#"{"citation": "quote"}"#).unwrap();
        assert_eq!(palette.citation, "quote");
        assert_eq!(palette.entity, "hl-entity");
    }
}
