//! Assertion utilities for layout tests
//!
//! Layout arithmetic runs in `f64`, so sizes such as `18 * 0.6` are only
//! approximately representable. These helpers compare within a tolerance
//! and name the offending component on failure.

use tessera_ui_graphics::{Rect, Size};
use tessera_ui_layout::LayoutResult;

/// Tolerance suited to layout values built from a handful of additions.
pub const LAYOUT_TOLERANCE: f64 = 1e-9;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

pub fn assert_size_approx_eq(actual: Size, expected: Size, tolerance: f64, msg: &str) {
    assert_approx_eq(actual.width, expected.width, tolerance, &format!("{} - width", msg));
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f64, msg: &str) {
    assert_approx_eq(actual.x(), expected.x(), tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y(), expected.y(), tolerance, &format!("{} - y", msg));
    assert_size_approx_eq(actual.size, expected.size, tolerance, msg);
}

/// Assert that a rectangle contains a point, edges included.
pub fn assert_rect_contains_point(rect: Rect, x: f64, y: f64, msg: &str) {
    assert!(
        rect.contains(x, y),
        "{}: point ({}, {}) not in rect {}",
        msg,
        x,
        y,
        rect
    );
}

/// Looks up `key`, panicking with the whole table when it is missing.
pub fn layout_rect(layout: &LayoutResult, key: &str) -> Rect {
    match layout.get(key) {
        Some(rect) => rect,
        None => panic!("no layout entry for '{}' in {:?}", key, layout),
    }
}

/// Assert the entry for `key` against `(x, y, width, height)` within
/// [`LAYOUT_TOLERANCE`].
pub fn assert_layout_rect(layout: &LayoutResult, key: &str, expected: (f64, f64, f64, f64)) {
    let (x, y, width, height) = expected;
    assert_rect_approx_eq(
        layout_rect(layout, key),
        Rect::from_xywh(x, y, width, height),
        LAYOUT_TOLERANCE,
        key,
    );
}
