//! Row widget implementation

#![allow(non_snake_case)]

use tessera_core::{Node, NodeKind, Props};

/// Places children left to right, `spacing` apart.
pub fn Row(key: &str, props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(NodeKind::Row, key, props).with_children(children)
}
