//! Image widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, FunctionComponent, Node, NodeKind, Props};

use super::Box;

/// Creates an image placeholder.
///
/// No pixels are loaded; the node expands to `Box("{key}-box")` carrying all
/// of the image's props, so give it `width` and `height` to reserve space.
pub fn Image(key: &str, source: &str, props: Props) -> Node {
    let defaults = Props::new().with(keys::SOURCE, source);
    let box_key = format!("{key}-box");
    let component =
        FunctionComponent::new(move |props: &Props| Box(&box_key, props.clone(), []));
    Node::new(NodeKind::Custom, key, defaults.merge(&props)).with_component(component)
}
