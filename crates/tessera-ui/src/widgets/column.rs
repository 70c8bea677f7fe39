//! Column widget implementation

#![allow(non_snake_case)]

use tessera_core::{Node, NodeKind, Props};

/// Places children top to bottom, `spacing` apart.
pub fn Column(key: &str, props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Column, key, props).with_children(children)
}
