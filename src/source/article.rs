//! The article document as written by the analysis pipeline.
//!
//! Field names follow the pipeline's JSON (`titulo`, `cuerpo`, ...), with
//! English aliases accepted. Entity and adjective blocks show up either
//! directly or wrapped one level deeper, depending on which export produced
//! the file; both shapes deserialize to the same thing.

use serde::Deserialize;

use super::{AdjectiveMention, AnnotationSources, Citation, EntityMention, SentimentHighlights};

/// An article body with its annotator output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "titulo", alias = "title")]
    pub title: String,
    /// Missing bodies are valid and render as one empty paragraph.
    #[serde(default, rename = "cuerpo", alias = "body")]
    pub body: String,
    #[serde(default)]
    entities: Option<EntityBlock>,
    #[serde(default)]
    adjectives: Option<AdjectiveBlock>,
    #[serde(default)]
    sentiment: Option<SentimentBlock>,
    #[serde(default, rename = "sources", alias = "citations")]
    citations: Option<Vec<Citation>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum EntityBlock {
    Wrapped { entities: EntityList },
    Direct(EntityList),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EntityList {
    #[serde(default)]
    entities_list: Vec<EntityMention>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AdjectiveBlock {
    Wrapped { adjectives: AdjectiveList },
    Direct(AdjectiveList),
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AdjectiveList {
    #[serde(default)]
    adjectives_list: Vec<AdjectiveMention>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SentimentBlock {
    #[serde(default)]
    highest_scoring_sentence_per_label: SentimentHighlights,
}

impl Article {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Annotator output grouped by source.
    pub fn sources(&self) -> AnnotationSources {
        let entities = match &self.entities {
            Some(EntityBlock::Wrapped { entities }) | Some(EntityBlock::Direct(entities)) => {
                entities.entities_list.clone()
            }
            None => Vec::new(),
        };
        let adjectives = match &self.adjectives {
            Some(AdjectiveBlock::Wrapped { adjectives })
            | Some(AdjectiveBlock::Direct(adjectives)) => adjectives.adjectives_list.clone(),
            None => Vec::new(),
        };

        AnnotationSources {
            entities,
            adjectives,
            sentiment: self
                .sentiment
                .as_ref()
                .map(|s| s.highest_scoring_sentence_per_label.clone())
                .unwrap_or_default(),
            citations: self.citations.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_blocks() {
        let article = Article::from_json(
            r#"{
                "titulo": "Título",
                "cuerpo": "Ana vive en Roma.",
                "entities": {
                    "entities_freq": [["Ana", 1]],
                    "entities_list": [
                        {"text": "Ana", "type": "PER", "start_char": 0, "end_char": 3, "sentiment": 0.1}
                    ]
                },
                "adjectives": {"adjectives_list": []}
            }"#,
        )
        .unwrap();
        assert_eq!(article.title, "Título");
        let sources = article.sources();
        assert_eq!(sources.entities.len(), 1);
        assert_eq!(sources.entities[0].entity_type, "PER");
        assert!(sources.citations.is_empty());
    }

    #[test]
    fn wrapped_blocks() {
        let article = Article::from_json(
            r#"{
                "body": "Una casa blanca.",
                "adjectives": {"adjectives": {"adjectives_list": [
                    {"start_char": 9, "end_char": 15, "features": {"Gender": "Fem"}}
                ]}}
            }"#,
        )
        .unwrap();
        let sources = article.sources();
        assert_eq!(sources.adjectives.len(), 1);
        assert_eq!(sources.adjectives[0].features["Gender"], "Fem");
    }

    #[test]
    fn sentiment_and_citations() {
        let article = Article::from_json(
            r#"{
                "cuerpo": "Bien. Mal.",
                "sentiment": {
                    "global_sentiment": ["NEU", 0.5],
                    "highest_scoring_sentence_per_label": {
                        "POS": {"score": 0.9, "start_char": 0, "end_char": 5, "sentence": "Bien."},
                        "NEG": {"score": 0.8, "start_char": 6, "end_char": 10, "sentence": "Mal."}
                    }
                },
                "sources": [
                    {"start_char": 6, "end_char": 10, "components": {"referenciado": {"text": "Juan"}}}
                ]
            }"#,
        )
        .unwrap();
        let sources = article.sources();
        assert!(sources.sentiment.positive.is_some());
        assert!(sources.sentiment.neutral.is_none());
        assert_eq!(sources.citations[0].referent(), Some("Juan"));
    }

    #[test]
    fn missing_body_is_empty() {
        let article = Article::from_json("{}").unwrap();
        assert!(article.body.is_empty());
        assert_eq!(article.sources(), AnnotationSources::default());
    }
}
