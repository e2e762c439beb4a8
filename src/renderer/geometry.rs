//! Glyph geometry — stroke width, margin, and anchor projection.

use crate::model::GlyphError;

use super::constants::*;

/// Normalized coordinate of a construction-grid anchor, in [0,1]×[0,1].
pub fn anchor_position(id: u8) -> Result<(f64, f64), GlyphError> {
    ANCHOR_POSITIONS
        .get(id as usize)
        .copied()
        .ok_or(GlyphError::InvalidAnchor(id))
}

/// Per-render geometry of one glyph cell.
///
/// The stroke width grows with the cell's diagonal so heavy glyphs stay
/// proportionate at any size, and the margin keeps the round line caps
/// inside the surface.
#[derive(Debug, Clone, Copy)]
pub(super) struct GlyphMetrics {
    width: f64,
    height: f64,
    pub(super) line_width: f64,
    margin: f64,
}

impl GlyphMetrics {
    /// Compute metrics for one cell. `weight` is clamped to [0,1]: the
    /// sliders that drive it can overshoot, and overshoot is tolerated
    /// rather than rejected.
    pub(super) fn new(width: f64, height: f64, weight: f64) -> Self {
        let weight = weight.clamp(0.0, 1.0);
        let line_width = BASE_LINE_WIDTH + weight * (height * width).sqrt() / WEIGHT_DIVISOR;
        Self {
            width,
            height,
            line_width,
            margin: line_width,
        }
    }

    /// Project an anchor into the margin-inset pixel rectangle.
    pub(super) fn project(&self, id: u8) -> Result<(f64, f64), GlyphError> {
        let (nx, ny) = anchor_position(id)?;
        let half = self.margin / 2.0;
        Ok((
            half + (self.width - self.margin) * nx,
            half + (self.height - self.margin) * ny,
        ))
    }
}
