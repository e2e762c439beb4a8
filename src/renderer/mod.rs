//! Glyph renderer — converts encoded numerals into SVG output.
//!
//! The renderer projects the construction grid into the requested pixel
//! rectangle and produces a self-contained SVG string that can be displayed
//! in any SVG-capable view. Every call allocates a fresh surface; nothing is
//! shared between renders.

mod constants;
mod geometry;
mod layout;
mod svg_builder;

use serde::Serialize;

use crate::encoder::encode;
use crate::model::{GlyphError, Segment};
use constants::*;
use geometry::GlyphMetrics;
use layout::RowLayout;
use svg_builder::SvgBuilder;

pub use geometry::anchor_position;
pub(crate) use constants::DEFAULT_STROKE_COLOR;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render one number as a standalone glyph surface of exactly
/// `width` × `height` pixels.
///
/// `width` and `height` must be positive; callers validate their geometry
/// before invoking. `weight` is clamped to [0,1]. The only failure path is
/// `OutOfRange` for a number outside 0..=9999 — a failing call returns
/// before anything is drawn.
pub fn render_number_to_svg(
    number: i32,
    width: f64,
    height: f64,
    weight: f64,
    color: &str,
) -> Result<String, GlyphError> {
    let segments = encode(number)?;
    let metrics = GlyphMetrics::new(width, height, weight);
    let mut svg = SvgBuilder::new(width, height);
    draw_glyph(&mut svg, &segments, &metrics, 0.0, color)?;
    Ok(svg.build())
}

/// One glyph of a laid-out row: its own surface plus the x-offset at which
/// the caller composites it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedGlyph {
    pub value: i32,
    pub x: f64,
    pub width: f64,
    pub height: f64,
    pub svg: String,
}

/// Lay out a sequence of values in a single row and render each into its
/// own positioned surface.
///
/// `aspect_ratio` (cell height / width, default 1) and `spacing_ratio`
/// (gap as a fraction of one cell width, default 0.35) fall back to the
/// clock face's values when `None`. An empty sequence yields an empty row.
pub fn layout_row(
    values: &[i32],
    total_width: f64,
    aspect_ratio: Option<f64>,
    spacing_ratio: Option<f64>,
    weight: f64,
    color: &str,
) -> Result<Vec<PositionedGlyph>, GlyphError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let row = row_layout(values.len(), total_width, aspect_ratio, spacing_ratio);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            Ok(PositionedGlyph {
                value,
                x: row.x_offset(i),
                width: row.cell_width,
                height: row.cell_height,
                svg: render_number_to_svg(value, row.cell_width, row.cell_height, weight, color)?,
            })
        })
        .collect()
}

/// Lay out a sequence of values in a single row and composite them into one
/// surface of `total_width` × cell-height pixels.
///
/// All values are validated before any drawing, so a row with one bad value
/// fails whole. An empty sequence yields an empty zero-height surface.
pub fn render_row_to_svg(
    values: &[i32],
    total_width: f64,
    aspect_ratio: Option<f64>,
    spacing_ratio: Option<f64>,
    weight: f64,
    color: &str,
) -> Result<String, GlyphError> {
    let encoded: Vec<Vec<Segment>> = values.iter().map(|&v| encode(v)).collect::<Result<_, _>>()?;

    if values.is_empty() {
        return Ok(SvgBuilder::new(total_width, 0.0).build());
    }

    let row = row_layout(values.len(), total_width, aspect_ratio, spacing_ratio);
    let metrics = GlyphMetrics::new(row.cell_width, row.cell_height, weight);
    let mut svg = SvgBuilder::new(total_width, row.cell_height);
    for (i, segments) in encoded.iter().enumerate() {
        draw_glyph(&mut svg, segments, &metrics, row.x_offset(i), color)?;
    }
    Ok(svg.build())
}

fn row_layout(
    count: usize,
    total_width: f64,
    aspect_ratio: Option<f64>,
    spacing_ratio: Option<f64>,
) -> RowLayout {
    RowLayout::new(
        count,
        total_width,
        aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO),
        spacing_ratio.unwrap_or(DEFAULT_SPACING_RATIO),
    )
}

// ═══════════════════════════════════════════════════════════════════════
// Drawing
// ═══════════════════════════════════════════════════════════════════════

/// Draw one glyph into the builder at a horizontal offset: the stave first,
/// then the encoded strokes in table order.
fn draw_glyph(
    svg: &mut SvgBuilder,
    segments: &[Segment],
    metrics: &GlyphMetrics,
    origin_x: f64,
    color: &str,
) -> Result<(), GlyphError> {
    let (x1, y1) = metrics.project(STAVE_TOP)?;
    let (x2, y2) = metrics.project(STAVE_BOTTOM)?;
    svg.line(origin_x + x1, y1, origin_x + x2, y2, color, metrics.line_width);

    for segment in segments {
        let (x1, y1) = metrics.project(segment.start)?;
        let (x2, y2) = metrics.project(segment.end)?;
        svg.line(origin_x + x1, y1, origin_x + x2, y2, color, metrics.line_width);
    }
    Ok(())
}
