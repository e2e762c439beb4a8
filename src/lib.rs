//! glyphlib — Cistercian numeral encoding and glyph rendering library for
//! Cistercian Clock.
//!
//! Renders any number in 0..=9999 as a single Cistercian glyph: one central
//! vertical stave plus up to four quadrant stroke groups, one per decimal
//! place. Output is a self-contained SVG string sized exactly as requested.
//!
//! # Example
//! ```
//! use glyphlib::{encode, render_number_to_svg};
//!
//! let segments = encode(1234).unwrap();
//! assert_eq!(segments.len(), 4);
//!
//! let svg = render_number_to_svg(1234, 200.0, 200.0, 0.5, "black").unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod clock;
pub mod encoder;
pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use clock::{clamp_display, ordered_values, DateOrder, DateParts};
pub use encoder::{encode, segments_for};
pub use model::{GlyphError, Place, Segment};
pub use renderer::{
    anchor_position, layout_row, render_number_to_svg, render_row_to_svg, PositionedGlyph,
};

use renderer::DEFAULT_STROKE_COLOR;

/// Convert an encoded segment list to a JSON string.
/// Useful for passing glyph data across FFI boundaries.
pub fn segments_to_json(segments: &[Segment]) -> Result<String, String> {
    serde_json::to_string_pretty(segments).map_err(|e| format!("JSON serialization error: {e}"))
}

/// Render a clock face row from sampled date parts.
/// Convenience function combining value ordering and row rendering.
///
/// Pass `None` for `aspect_ratio` / `spacing_ratio` to use the clock face
/// defaults (1 and 0.35).
pub fn render_clock_to_svg(
    parts: &DateParts,
    order: DateOrder,
    total_width: f64,
    aspect_ratio: Option<f64>,
    spacing_ratio: Option<f64>,
    weight: f64,
    color: &str,
) -> Result<String, GlyphError> {
    let values = ordered_values(parts, order);
    render_row_to_svg(&values, total_width, aspect_ratio, spacing_ratio, weight, color)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a single number to SVG and return it as a C string.
/// The caller must free the returned string with `glyphlib_free_string`.
///
/// `color` may be null to use black. Returns null if the number is outside
/// 0..=9999.
///
/// # Safety
/// `color`, when non-null, must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn glyphlib_render_number(
    number: i32,
    width: f64,
    height: f64,
    weight: f64,
    color: *const c_char,
) -> *mut c_char {
    let color = if color.is_null() {
        DEFAULT_STROKE_COLOR
    } else {
        match unsafe { CStr::from_ptr(color) }.to_str() {
            Ok(s) => s,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_number_to_svg(number, width, height, weight, color) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a row of numbers into a single composited SVG.
/// The caller must free the returned string with `glyphlib_free_string`.
///
/// Pass a non-positive `aspect_ratio` or a negative `spacing_ratio` to use
/// the clock face defaults. `color` may be null to use black.
///
/// # Safety
/// `values` must point to `len` valid i32 values. `color`, when non-null,
/// must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn glyphlib_render_row(
    values: *const i32,
    len: usize,
    total_width: f64,
    aspect_ratio: f64,
    spacing_ratio: f64,
    weight: f64,
    color: *const c_char,
) -> *mut c_char {
    if values.is_null() || len == 0 {
        return std::ptr::null_mut();
    }
    let values = unsafe { std::slice::from_raw_parts(values, len) };

    let ar = if aspect_ratio > 0.0 { Some(aspect_ratio) } else { None };
    let sr = if spacing_ratio >= 0.0 { Some(spacing_ratio) } else { None };

    let color = if color.is_null() {
        DEFAULT_STROKE_COLOR
    } else {
        match unsafe { CStr::from_ptr(color) }.to_str() {
            Ok(s) => s,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_row_to_svg(values, total_width, ar, sr, weight, color) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by glyphlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a glyphlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn glyphlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
