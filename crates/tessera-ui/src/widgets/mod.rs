//! UI Widget components

pub mod box_widget;
pub mod button;
pub mod column;
pub mod container;
pub mod divider;
pub mod image;
pub mod input;
pub mod row;
pub mod spacer;
pub mod text;

pub use box_widget::*;
pub use button::*;
pub use column::*;
pub use container::*;
pub use divider::*;
pub use image::*;
pub use input::*;
pub use row::*;
pub use spacer::*;
pub use text::*;

#[cfg(test)]
#[path = "../tests/widgets_tests.rs"]
mod tests;
