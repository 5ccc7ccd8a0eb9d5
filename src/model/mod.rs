//! Core data model for annotation overlays.
//!
//! This module contains:
//! - The base text and the unit its offsets are counted in
//! - Annotation spans, their source kinds and pass-through labels
//! - The render tree and paragraph blocks handed to the presentation layer

mod node;
mod span;
mod text;

// Re-export text types
pub use text::{BaseText, OffsetUnit};

// Re-export span types
pub use span::{AnnotationSpan, Label, Polarity, SourceKind};

// Re-export render tree types
pub use node::{AnnotatedNode, Annotations, ParagraphBlock, RenderNode, TextNode};
