//! Error types for overlay composition.
//!
//! Malformed annotator output never shows up here: the span collector drops
//! it. These variants describe broken contracts between the pipeline stages.

use thiserror::Error;

/// Errors that can occur while compositing spans onto a base text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("inverted working range {start}..{end}")]
    InvertedRange { start: usize, end: usize },

    #[error("span {id} ({start}..{end}) is not a valid range of a text of length {len}")]
    SpanOutOfBounds {
        id: String,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("span {id} starting at {start} lies outside working range {range_start}..{range_end}")]
    SpanOutsideRange {
        id: String,
        start: usize,
        range_start: usize,
        range_end: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
