//! Span collection: gather spans from enabled sources into one flat list.
//!
//! Malformed spans are dropped here and nowhere else. Everything the
//! compositor receives is a non-empty range on unit boundaries of the text.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

use crate::model::{AnnotationSpan, BaseText, SourceKind};
use crate::palette::Palette;
use crate::source::{AnnotationSource, RawSpan};

/// Why a raw span was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NegativeOffset,
    Empty,
    PastEnd,
    SplitsCharacter,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::NegativeOffset => "negative offset",
            Rejection::Empty => "empty or inverted range",
            Rejection::PastEnd => "ends past the text",
            Rejection::SplitsCharacter => "offset splits a character",
        })
    }
}

/// Check a raw span against the text and return its unit range.
pub fn validate(raw: &RawSpan, text: &BaseText<'_>) -> Result<Range<usize>, Rejection> {
    if raw.start < 0 || raw.end < 0 {
        return Err(Rejection::NegativeOffset);
    }
    if raw.start >= raw.end {
        return Err(Rejection::Empty);
    }
    let (Ok(start), Ok(end)) = (usize::try_from(raw.start), usize::try_from(raw.end)) else {
        return Err(Rejection::PastEnd);
    };
    if end > text.len() {
        return Err(Rejection::PastEnd);
    }
    if !text.is_boundary(start) || !text.is_boundary(end) {
        return Err(Rejection::SplitsCharacter);
    }
    Ok(start..end)
}

/// Collect spans from every enabled source.
///
/// Output order is source order, then each source's own order. Ids are
/// `"{prefix}-{local}"`, so they do not shift when a sibling is dropped.
pub fn collect_spans<'s>(
    text: &BaseText<'_>,
    sources: impl IntoIterator<Item = &'s dyn AnnotationSource>,
    enabled: &BTreeSet<SourceKind>,
    palette: &Palette,
) -> Vec<AnnotationSpan> {
    let mut spans = Vec::new();
    let mut dropped = 0usize;

    for source in sources {
        let kind = source.kind();
        if !enabled.contains(&kind) {
            continue;
        }

        for raw in source.raw_spans(palette) {
            let id = format!("{}-{}", kind.id_prefix(), raw.local_id);
            match validate(&raw, text) {
                Ok(range) => spans.push(AnnotationSpan {
                    id,
                    start: range.start,
                    end: range.end,
                    kind,
                    display_class: raw.display_class,
                    label: raw.label,
                }),
                Err(reason) => {
                    log::debug!(
                        "dropping span {id} ({}..{}): {reason}",
                        raw.start,
                        raw.end
                    );
                    dropped += 1;
                }
            }
        }
    }

    log::trace!("collected {} spans, dropped {dropped}", spans.len());
    spans
}
