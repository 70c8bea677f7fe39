//! Layout constraints system

use tessera_ui_graphics::Size;

use crate::Axis;

/// Minimum and maximum size a node may take.
///
/// Callers are expected to keep `min <= max` on both axes. Malformed
/// constraints are tolerated rather than rejected: [`Constraints::constrain`]
/// applies the minimum first and the maximum last, so the maximum wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    pub const fn new(min_width: f64, min_height: f64, max_width: f64, max_height: f64) -> Self {
        Self {
            min: Size::new(min_width, min_height),
            max: Size::new(max_width, max_height),
        }
    }

    /// Creates constraints satisfied by exactly one size.
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Creates constraints with loose bounds (min = 0, max = given size).
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Creates tight constraints from explicit width and height.
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::tight(Size::new(width, height))
    }

    /// Min zero, max infinite on both axes.
    pub const fn unbounded() -> Self {
        Self::loose(Size::INFINITY)
    }

    /// Returns true if these constraints have a single size that satisfies them.
    pub fn is_tight(&self) -> bool {
        self.min == self.max
    }

    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max.width.is_finite()
    }

    #[inline]
    pub fn has_bounded_height(&self) -> bool {
        self.max.height.is_finite()
    }

    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    /// Maximum extent along `axis`.
    pub fn max_along(&self, axis: Axis) -> f64 {
        axis.main(self.max)
    }

    /// Creates new constraints with loosened minimums (min = 0).
    pub fn loosen(self) -> Self {
        Self::loose(self.max)
    }

    /// Clamps each axis of `size` into `[min, max]`, min first.
    pub fn constrain(&self, size: Size) -> Size {
        Size {
            width: clamp_min_first(size.width, self.min.width, self.max.width),
            height: clamp_min_first(size.height, self.min.height, self.max.height),
        }
    }
}

// `f64::clamp` panics when min > max, which these constraints tolerate.
fn clamp_min_first(value: f64, min: f64, max: f64) -> f64 {
    let mut clamped = value;
    if clamped < min {
        clamped = min;
    }
    if clamped > max {
        clamped = max;
    }
    clamped
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
