//! Geometric primitives: Point, Size, Rect

use std::fmt;

/// Absolute coordinate in the root's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Layout positions are plain points measured from the root origin.
pub type Position = Point;

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const INFINITY: Size = Size {
        width: f64::INFINITY,
        height: f64::INFINITY,
    };

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle: the per-node output of the layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub position: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point { x, y },
            size: Size { width, height },
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            position: Point::ZERO,
            size,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            position: self.position.offset(dx, dy),
            size: self.size,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x() && y >= self.y() && x <= self.right() && y <= self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.position.x, self.position.y, self.size.width, self.size.height
        )
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
