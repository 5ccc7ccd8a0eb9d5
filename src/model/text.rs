//! Base text and offset units.
//!
//! Annotators report offsets in whatever unit their runtime counts string
//! length in. [`BaseText`] pins the unit down once per article and converts
//! unit offsets to byte offsets through a precomputed table, so slicing the
//! text during composition is O(1).

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// The unit span offsets are counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OffsetUnit {
    /// Unicode scalar values (Python `str` indices).
    #[default]
    Char,
    /// UTF-16 code units (JavaScript `String.length`).
    Utf16,
    /// UTF-8 bytes.
    Byte,
}

impl OffsetUnit {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            OffsetUnit::Char => "char",
            OffsetUnit::Utf16 => "utf16",
            OffsetUnit::Byte => "byte",
        }
    }

    /// Length of `s` counted in this unit.
    pub fn measure(self, s: &str) -> usize {
        match self {
            OffsetUnit::Char => s.chars().count(),
            OffsetUnit::Utf16 => s.encode_utf16().count(),
            OffsetUnit::Byte => s.len(),
        }
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "chars" | "codepoint" => Ok(OffsetUnit::Char),
            "utf16" | "utf-16" => Ok(OffsetUnit::Utf16),
            "byte" | "bytes" | "utf8" | "utf-8" => Ok(OffsetUnit::Byte),
            other => Err(format!("unknown offset unit: {other}")),
        }
    }
}

/// Table entry for unit positions that split a character.
const NOT_A_BOUNDARY: usize = usize::MAX;

#[derive(Debug, Clone)]
enum Boundaries {
    /// Unit offsets are byte offsets (byte unit, or ASCII text in any unit).
    Identity,
    /// `table[i]` is the byte offset of unit position `i`.
    Table(Vec<usize>),
}

/// An immutable article body with offsets counted in a fixed unit.
#[derive(Debug, Clone)]
pub struct BaseText<'a> {
    text: &'a str,
    unit: OffsetUnit,
    len: usize,
    boundaries: Boundaries,
}

impl<'a> BaseText<'a> {
    /// Wrap `text` with character (code point) offsets.
    pub fn new(text: &'a str) -> Self {
        Self::with_unit(text, OffsetUnit::Char)
    }

    /// Wrap `text` with offsets counted in `unit`.
    pub fn with_unit(text: &'a str, unit: OffsetUnit) -> Self {
        if unit == OffsetUnit::Byte || text.is_ascii() {
            return Self {
                text,
                unit,
                len: text.len(),
                boundaries: Boundaries::Identity,
            };
        }

        let mut table = Vec::with_capacity(text.len() + 1);
        for (byte_idx, c) in text.char_indices() {
            table.push(byte_idx);
            if unit == OffsetUnit::Utf16 && c.len_utf16() == 2 {
                table.push(NOT_A_BOUNDARY);
            }
        }
        table.push(text.len());

        Self {
            text,
            unit,
            len: table.len() - 1,
            boundaries: Boundaries::Table(table),
        }
    }

    /// The underlying string.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// The unit offsets are counted in.
    pub fn unit(&self) -> OffsetUnit {
        self.unit
    }

    /// Length in offset units.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Convert a unit offset to a byte offset.
    ///
    /// Returns `None` past the end of the text or when the offset falls
    /// inside a character.
    pub fn byte_offset(&self, offset: usize) -> Option<usize> {
        match &self.boundaries {
            Boundaries::Identity => {
                (offset <= self.text.len() && self.text.is_char_boundary(offset)).then_some(offset)
            }
            Boundaries::Table(table) => table
                .get(offset)
                .copied()
                .filter(|&byte| byte != NOT_A_BOUNDARY),
        }
    }

    /// Check that `offset` is a valid position in this text.
    pub fn is_boundary(&self, offset: usize) -> bool {
        self.byte_offset(offset).is_some()
    }

    /// Slice the text by a unit range.
    pub fn slice(&self, range: Range<usize>) -> Option<&'a str> {
        if range.start > range.end {
            return None;
        }
        let start = self.byte_offset(range.start)?;
        let end = self.byte_offset(range.end)?;
        Some(&self.text[start..end])
    }
}
