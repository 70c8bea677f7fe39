//! Pure geometry data shared across Tessera
//!
//! This crate contains the value types produced by the layout pass and
//! consumed by render backends: points, sizes and rectangles.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Position, Rect, Size};
}
