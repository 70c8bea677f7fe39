//! Node tree, property bag and component contracts for Tessera
//!
//! A UI is described as an ordered tree of [`Node`]s. Each node carries a
//! [`NodeKind`], a key that is unique among its siblings, a [`Props`] bag of
//! heterogeneous values and, for custom nodes, a deferred [`Component`] that
//! expands into a replacement node when layout or rendering reaches it.
//!
//! The tree is plain data. Layout and rendering only read it, so a new tree
//! is built every frame from application state (see [`StateManager`]).

pub mod collections;
mod component;
pub mod keys;
mod node;
mod property;
mod state;

pub use component::*;
pub use node::*;
pub use property::*;
pub use state::*;

pub mod prelude {
    pub use crate::component::{Component, FunctionComponent, StatefulComponent};
    pub use crate::node::{Node, NodeKind};
    pub use crate::props;
    pub use crate::property::{Handler, PropValue, Props};
    pub use crate::state::{StateHandle, StateManager};
}
