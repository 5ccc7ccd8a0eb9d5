//! # spanweave
//!
//! Composite independently produced, possibly overlapping annotation spans
//! onto one article body and get back a nested render tree split into
//! paragraphs.
//!
//! ## Features
//!
//! - Collect spans from named-entity, adjective, sentiment and citation
//!   annotators, dropping malformed ones
//! - Resolve nesting and overlap deterministically: the earliest, longest
//!   span is the container
//! - Split into paragraphs at newlines outside annotations; annotations are
//!   never cut
//! - Offsets in code points, UTF-16 code units, or bytes
//! - Lossless: the paragraphs reassemble to the original text
//!
//! ## Quick Start
//!
//! ```
//! use spanweave::{AnnotationSources, Overlay, OverlayOptions};
//! use spanweave::source::EntityMention;
//!
//! let mut sources = AnnotationSources::new();
//! sources.entities.push(EntityMention {
//!     text: "Lisboa".to_string(),
//!     entity_type: "LOC".to_string(),
//!     start_char: 8,
//!     end_char: 14,
//! });
//!
//! let overlay = Overlay::build("Llegó a Lisboa.\nFin.", &sources, &OverlayOptions::default());
//! let paragraphs = overlay.paragraphs();
//!
//! assert_eq!(paragraphs.len(), 2);
//! let entity = paragraphs[0].annotations().next().unwrap();
//! assert_eq!(entity.id(), "ent-0");
//! assert_eq!(entity.text, "Lisboa");
//! ```
//!
//! ## Rendering
//!
//! ```
//! use spanweave::{AnnotationSources, Overlay, OverlayOptions};
//! use spanweave::markup::render_html;
//!
//! let overlay = Overlay::build("a < b", &AnnotationSources::new(), &OverlayOptions::default());
//! assert_eq!(render_html(&overlay.paragraphs()), "<p>a &lt; b</p>\n");
//! ```

pub mod error;
pub mod markup;
pub mod model;
pub mod overlay;
pub mod palette;
pub mod source;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use model::{
    AnnotatedNode, AnnotationSpan, BaseText, Label, OffsetUnit, ParagraphBlock, Polarity,
    RenderNode, SourceKind, TextNode,
};
pub use overlay::{Overlay, OverlayOptions};
pub use palette::Palette;
pub use source::{AnnotationSource, AnnotationSources};
