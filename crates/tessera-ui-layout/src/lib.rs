//! Constraint-based layout engine for Tessera
//!
//! [`LayoutEngine::calculate_layout`] walks a node tree depth first,
//! narrowing the inbound [`Constraints`] for each child, and records one
//! absolute [`Rect`](tessera_ui_graphics::Rect) per node key in a
//! [`LayoutResult`].

mod axis;
mod constraints;
mod engine;
mod result;
mod text;

pub use axis::*;
pub use constraints::*;
pub use engine::*;
pub use result::*;
pub use text::*;

pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::engine::{calculate_layout, LayoutEngine};
    pub use crate::result::{LayoutError, LayoutResult};
    pub use crate::text::{ApproximateTextMeasurer, MonospacedTextMeasurer, TextMeasurer};
}
