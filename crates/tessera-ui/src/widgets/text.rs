//! Text widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, Node, NodeKind, Props};

/// Creates a single line of text. Entries in `props` override `text`.
pub fn Text(key: &str, text: impl Into<String>, props: Props) -> Node {
    let defaults = Props::new().with(keys::TEXT, text.into());
    Node::new(NodeKind::Text, key, defaults.merge(&props))
}
