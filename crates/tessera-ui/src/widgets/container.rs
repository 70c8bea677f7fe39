#![allow(non_snake_case)]

use tessera_core::{Node, NodeKind, Props};

/// Wraps at most one child and takes its size.
pub fn Container(key: &str, props: Props, child: Option<Node>) -> Node {
    Node::new(NodeKind::Container, key, props).with_children(child)
}
