//! Text input widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, FunctionComponent, Handler, Node, NodeKind, Props};

use super::{Box, Text};

/// Creates a single-line text field showing `value`.
///
/// `on_change` receives the new text whenever an `onChange` event carrying a
/// string is dispatched to this node (see [`crate::dispatch`]). The node
/// expands to `Box("{key}-box")` around `Text("{key}-text")`.
pub fn Input<F>(key: &str, value: &str, on_change: F, props: Props) -> Node
where
    F: Fn(&str) + Send + Sync + 'static,
{
    let handler = Handler::new(move |argument| match argument.as_str() {
        Some(text) => on_change(text),
        None => log::debug!("ignoring non-text change event: {argument:?}"),
    });
    let defaults = Props::new()
        .with(keys::VALUE, value)
        .with(keys::ON_CHANGE, handler);

    let box_key = format!("{key}-box");
    let text_key = format!("{key}-text");
    let component = FunctionComponent::new(move |props: &Props| {
        Box(
            &box_key,
            Props::new()
                .with(keys::PADDING, 8.0)
                .with(keys::BORDER_RADIUS, 4.0)
                .with(keys::BORDER_WIDTH, 1.0)
                .with(keys::BORDER_COLOR, "#CCCCCC")
                .with(keys::BACKGROUND_COLOR, "#FFFFFF"),
            [Text(
                &text_key,
                props.get_string(keys::VALUE, ""),
                Props::new()
                    .with(keys::COLOR, "#000000")
                    .with(keys::FONT_SIZE, 16.0),
            )],
        )
    });

    Node::new(NodeKind::Custom, key, defaults.merge(&props)).with_component(component)
}
