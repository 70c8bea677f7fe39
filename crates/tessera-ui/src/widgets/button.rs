//! Button widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, FunctionComponent, Handler, Node, NodeKind, Props};

use super::{Box, Text};

pub const BUTTON_PADDING: f64 = 8.0;
pub const BUTTON_FONT_SIZE: f64 = 16.0;

/// Creates a clickable button.
///
/// The returned node is a custom node carrying `label` and an `onClick`
/// handler. It expands to `Box("{key}-box")` around `Text("{key}-text")`,
/// so those are the keys that show up in a layout result.
pub fn Button<F>(key: &str, label: &str, on_click: F, props: Props) -> Node
where
    F: Fn() + Send + Sync + 'static,
{
    let defaults = Props::new()
        .with(keys::LABEL, label)
        .with(keys::ON_CLICK, Handler::new(move |_| on_click()));

    let box_key = format!("{key}-box");
    let text_key = format!("{key}-text");
    let component = FunctionComponent::new(move |props: &Props| {
        let label = props.get_string(keys::LABEL, "Button");
        Box(
            &box_key,
            Props::new()
                .with(keys::PADDING, BUTTON_PADDING)
                .with(keys::BORDER_RADIUS, 4.0)
                .with(keys::BACKGROUND_COLOR, "#2196F3"),
            [Text(
                &text_key,
                label,
                Props::new()
                    .with(keys::COLOR, "#FFFFFF")
                    .with(keys::FONT_SIZE, BUTTON_FONT_SIZE)
                    .with(keys::TEXT_ALIGN, "center"),
            )],
        )
    });

    Node::new(NodeKind::Custom, key, defaults.merge(&props)).with_component(component)
}
