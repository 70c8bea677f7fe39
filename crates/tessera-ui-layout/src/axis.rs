use tessera_ui_graphics::{Point, Size};

/// Represents the main axis of a linear layout (Row or Column).
///
/// Rows and columns share one distribution routine; the axis decides which
/// component of a size or point is "main" (where children are stacked) and
/// which is "cross".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal main axis (Row).
    Horizontal,

    /// Vertical main axis (Column).
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn main(self, size: Size) -> f64 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub fn cross(self, size: Size) -> f64 {
        self.cross_axis().main(size)
    }

    #[inline]
    pub fn main_of(self, point: Point) -> f64 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    #[inline]
    pub fn cross_of(self, point: Point) -> f64 {
        self.cross_axis().main_of(point)
    }

    /// Builds a size from main/cross extents.
    pub fn size(self, main: f64, cross: f64) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    /// Builds a point from main/cross coordinates.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }
}
