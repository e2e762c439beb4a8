//! Data model for Cistercian numeral glyphs.
//!
//! These structures capture the encoding-level description of a glyph:
//! the strokes that make it up and the decimal places they belong to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the encoding and rendering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The number cannot be drawn as a single Cistercian glyph.
    #[error("number {0} is outside the drawable range 0..=9999")]
    OutOfRange(i32),
    /// An anchor id outside the 12-point construction grid was requested.
    /// Unreachable as long as the segment table only names grid anchors.
    #[error("anchor id {0} is not on the construction grid")]
    InvalidAnchor(u8),
}

/// A straight stroke between two anchors of the construction grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Anchor id (0–11) the stroke starts at
    pub start: u8,
    /// Anchor id (0–11) the stroke ends at
    pub end: u8,
}

impl Segment {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }
}

/// One decimal place of a glyph. Each place owns a fixed quadrant of the
/// glyph: units top-right, tens top-left, hundreds bottom-right, thousands
/// bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Place {
    Units,
    Tens,
    Hundreds,
    Thousands,
}

impl Place {
    /// Places in glyph stroke order: the thousands group is drawn first,
    /// the units group last.
    pub const DRAW_ORDER: [Place; 4] =
        [Place::Thousands, Place::Hundreds, Place::Tens, Place::Units];

    /// Decimal multiplier of this place.
    pub fn multiplier(self) -> i32 {
        match self {
            Place::Units => 1,
            Place::Tens => 10,
            Place::Hundreds => 100,
            Place::Thousands => 1000,
        }
    }

    /// Extract this place's digit (0–9) from a number in 0..=9999.
    pub fn digit_of(self, number: i32) -> i32 {
        match self {
            Place::Units => number % 10,
            Place::Tens => (number % 100) / 10,
            Place::Hundreds => (number % 1000) / 100,
            Place::Thousands => number / 1000,
        }
    }
}
