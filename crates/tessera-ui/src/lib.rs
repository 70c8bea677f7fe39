//! High level UI primitives for Tessera
//!
//! Widgets are plain constructor functions returning [`Node`]s. Build a new
//! tree from application state every frame and hand it to a
//! [`Renderer`](tessera_render_common::Renderer).

mod events;
pub mod widgets;

pub use events::*;
pub use widgets::*;

pub use tessera_core::{
    keys, props, Component, FunctionComponent, Handler, ListenerId, Node, NodeKind, PropValue,
    Props, StateHandle, StateManager, StatefulComponent,
};
pub use tessera_render_common::{RenderTarget, Renderer};
pub use tessera_ui_graphics::{Point, Rect, Size};
pub use tessera_ui_layout::{
    calculate_layout, Constraints, LayoutEngine, LayoutError, LayoutResult, TextMeasurer,
};

pub mod prelude {
    pub use crate::events::{click, click_at, dispatch};
    pub use crate::widgets::*;
    pub use tessera_core::prelude::*;
    pub use tessera_render_common::{RenderTarget, Renderer};
    pub use tessera_ui_graphics::prelude::*;
    pub use tessera_ui_layout::prelude::*;
}
