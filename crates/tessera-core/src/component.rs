//! Deferred rendering capability attached to custom nodes.

use std::fmt;

use crate::node::Node;
use crate::property::{PropValue, Props};

/// Expands a custom node into a concrete replacement node.
///
/// Components are stateless from the layout engine's point of view: any
/// state they read lives outside the tree, so calling [`Component::render`]
/// twice with the same props must produce the same tree.
pub trait Component: Send + Sync {
    fn render(&self, props: &Props) -> Node;

    /// Whether a node whose props changed from `old` to `new` needs a fresh
    /// expansion.
    fn should_update(&self, old: &Props, new: &Props) -> bool {
        old != new
    }
}

/// A [`Component`] that owns a piece of state between renders.
///
/// Components are shared through `Arc` once attached to a node, so state is
/// read and replaced through `&self`.
pub trait StatefulComponent: Component {
    fn state(&self) -> PropValue;

    fn set_state(&self, state: PropValue);

    /// Called once before the component is first attached.
    fn initialize(&self, _props: &Props) {}

    fn cleanup(&self) {}
}

/// Wraps a closure as a [`Component`].
pub struct FunctionComponent<F> {
    render_fn: F,
}

impl<F> FunctionComponent<F>
where
    F: Fn(&Props) -> Node + Send + Sync,
{
    pub fn new(render_fn: F) -> Self {
        Self { render_fn }
    }
}

impl<F> Component for FunctionComponent<F>
where
    F: Fn(&Props) -> Node + Send + Sync,
{
    fn render(&self, props: &Props) -> Node {
        (self.render_fn)(props)
    }
}

impl<F> fmt::Debug for FunctionComponent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionComponent").finish_non_exhaustive()
    }
}
