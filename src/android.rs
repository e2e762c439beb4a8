//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JIntArray, JString};
use jni::sys::{jdouble, jint, jstring};
use jni::JNIEnv;

use crate::renderer::DEFAULT_STROKE_COLOR;
use crate::{render_number_to_svg, render_row_to_svg};

/// Render a single number to SVG.
///
/// Called from Kotlin as:
///   external fun renderNumber(number: Int, width: Double, height: Double, weight: Double, color: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_cistercianclock_app_GlyphLib_renderNumber(
    mut env: JNIEnv,
    _class: JClass,
    number: jint,
    width: jdouble,
    height: jdouble,
    weight: jdouble,
    color: JString,
) -> jstring {
    let color: String = if color.is_null() {
        DEFAULT_STROKE_COLOR.into()
    } else {
        match env.get_string(&color) {
            Ok(s) => s.into(),
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_number_to_svg(number, width, height, weight, &color) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a row of numbers into a single composited SVG.
///
/// Pass a non-positive `aspectRatio` or a negative `spacingRatio` to use
/// the clock face defaults.
///
/// Called from Kotlin as:
///   external fun renderRow(values: IntArray, totalWidth: Double, aspectRatio: Double, spacingRatio: Double, weight: Double, color: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_cistercianclock_app_GlyphLib_renderRow(
    mut env: JNIEnv,
    _class: JClass,
    values: JIntArray,
    total_width: jdouble,
    aspect_ratio: jdouble,
    spacing_ratio: jdouble,
    weight: jdouble,
    color: JString,
) -> jstring {
    let len = match env.get_array_length(&values) {
        Ok(l) if l > 0 => l as usize,
        _ => return std::ptr::null_mut(),
    };
    let mut buf: Vec<jint> = vec![0; len];
    if env.get_int_array_region(&values, 0, &mut buf).is_err() {
        return std::ptr::null_mut();
    }

    let ar = if aspect_ratio > 0.0 { Some(aspect_ratio) } else { None };
    let sr = if spacing_ratio >= 0.0 { Some(spacing_ratio) } else { None };

    let color: String = if color.is_null() {
        DEFAULT_STROKE_COLOR.into()
    } else {
        match env.get_string(&color) {
            Ok(s) => s.into(),
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match render_row_to_svg(&buf, total_width, ar, sr, weight, &color) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
