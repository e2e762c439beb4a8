//! Row layout — sizes and positions a sequence of glyph cells.

/// Geometry of a single-row glyph layout.
///
/// A row of `k` glyphs is split into `k` cells separated by `k − 1` gaps,
/// each gap a fixed fraction of one cell width, so the row fills the
/// available width exactly at any glyph count.
#[derive(Debug, Clone, Copy)]
pub(super) struct RowLayout {
    pub(super) cell_width: f64,
    pub(super) cell_height: f64,
    /// Distance between the left edges of adjacent cells.
    advance: f64,
}

impl RowLayout {
    /// Callers guarantee `count >= 1` and `spacing_ratio >= 0`.
    pub(super) fn new(count: usize, total_width: f64, aspect_ratio: f64, spacing_ratio: f64) -> Self {
        let slices = count as f64 + (count as f64 - 1.0) * spacing_ratio;
        let cell_width = total_width / slices;
        Self {
            cell_width,
            cell_height: cell_width * aspect_ratio,
            advance: cell_width * (1.0 + spacing_ratio),
        }
    }

    pub(super) fn x_offset(&self, index: usize) -> f64 {
        index as f64 * self.advance
    }
}
