//! Box widget implementation

#![allow(non_snake_case)]

use tessera_core::{Node, NodeKind, Props};

/// Creates a bordered box.
///
/// With both `width` and `height` set the box takes that size, otherwise it
/// wraps its first child. `padding` is added on every side either way.
/// Children are placed at the box's own origin.
pub fn Box(key: &str, props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Box, key, props).with_children(children)
}
