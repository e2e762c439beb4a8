//! Shared constants for the glyph renderer.

// ── Construction grid ───────────────────────────────────────────────
/// Normalized anchor coordinates of the 3×4 construction grid, indexed by
/// anchor id. Rows sit at 0, 1/3, 2/3 and 1 of the glyph height; columns at
/// 0, 1/2 and 1 of the width. These are the only valid stroke endpoints.
pub(super) const ANCHOR_POSITIONS: [(f64, f64); 12] = [
    (0.0, 0.0),
    (0.5, 0.0),
    (1.0, 0.0),
    (0.0, 1.0 / 3.0),
    (0.5, 1.0 / 3.0),
    (1.0, 1.0 / 3.0),
    (0.0, 2.0 / 3.0),
    (0.5, 2.0 / 3.0),
    (1.0, 2.0 / 3.0),
    (0.0, 1.0),
    (0.5, 1.0),
    (1.0, 1.0),
];

/// Anchors of the central stave, present in every glyph.
pub(super) const STAVE_TOP: u8 = 1;
pub(super) const STAVE_BOTTOM: u8 = 10;

// ── Stroke geometry ─────────────────────────────────────────────────
pub(super) const BASE_LINE_WIDTH: f64 = 2.0; // stroke width at weight 0
pub(super) const WEIGHT_DIVISOR: f64 = 6.0; // scales the weight term of the stroke width

// ── Row defaults ────────────────────────────────────────────────────
pub(super) const DEFAULT_ASPECT_RATIO: f64 = 1.0; // cell height / cell width
pub(super) const DEFAULT_SPACING_RATIO: f64 = 0.35; // gap as a fraction of cell width

// ── Colors ──────────────────────────────────────────────────────────
pub(crate) const DEFAULT_STROKE_COLOR: &str = "black";
