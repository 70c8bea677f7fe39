use super::*;
use tessera_core::{keys, props, Node, NodeKind, Props};

#[test]
fn text_sets_content_and_keeps_extra_props() {
    let node = Text("title", "Hello", props! { keys::FONT_SIZE => 20.0 });
    assert_eq!(node.kind(), &NodeKind::Text);
    assert_eq!(node.props().get_string(keys::TEXT, ""), "Hello");
    assert_eq!(node.props().get_float(keys::FONT_SIZE, 0.0), 20.0);
}

#[test]
fn text_props_override_content() {
    let node = Text("t", "ignored", props! { keys::TEXT => "wins" });
    assert_eq!(node.props().get_string(keys::TEXT, ""), "wins");
}

#[test]
fn linear_widgets_keep_child_order() {
    let children = || [Spacer("a", 1.0, 1.0), Spacer("b", 1.0, 1.0)];
    for node in [
        Row("r", Props::new(), children()),
        Column("c", Props::new(), children()),
        Box("x", Props::new(), children()),
    ] {
        let keys: Vec<_> = node.children().iter().map(Node::key).collect();
        assert_eq!(keys, ["a", "b"]);
    }
}

#[test]
fn container_accepts_optional_child() {
    assert!(Container("empty", Props::new(), None).children().is_empty());
    let wrapped = Container("c", Props::new(), Some(Text("t", "x", Props::new())));
    assert_eq!(wrapped.children().len(), 1);
    assert_eq!(wrapped.kind(), &NodeKind::Container);
}

#[test]
fn button_expands_to_padded_box_with_label() {
    let node = Button("ok", "OK", || {}, props! { keys::BACKGROUND_COLOR => "#4CAF50" });
    assert_eq!(node.kind(), &NodeKind::Custom);
    assert!(node.has_component());
    assert!(node.props().get_handler(keys::ON_CLICK).is_some());
    assert_eq!(node.props().get_string(keys::BACKGROUND_COLOR, ""), "#4CAF50");

    let expanded = node.expand();
    assert_eq!(expanded.key(), "ok-box");
    assert_eq!(expanded.kind(), &NodeKind::Box);
    assert_eq!(expanded.props().get_float(keys::PADDING, 0.0), BUTTON_PADDING);
    let label = &expanded.children()[0];
    assert_eq!(label.key(), "ok-text");
    assert_eq!(label.props().get_string(keys::TEXT, ""), "OK");
    assert_eq!(label.props().get_float(keys::FONT_SIZE, 0.0), BUTTON_FONT_SIZE);
}

#[test]
fn button_label_can_be_overridden_by_props() {
    let node = Button("b", "old", || {}, props! { keys::LABEL => "new" });
    let expanded = node.expand();
    assert_eq!(
        expanded.children()[0].props().get_string(keys::TEXT, ""),
        "new"
    );
}

#[test]
fn input_shows_its_value() {
    let node = Input("name", "Ada", |_| {}, Props::new());
    assert!(node.props().get_handler(keys::ON_CHANGE).is_some());

    let expanded = node.expand();
    assert_eq!(expanded.key(), "name-box");
    assert_eq!(expanded.props().get_float(keys::BORDER_WIDTH, 0.0), 1.0);
    assert_eq!(
        expanded.children()[0].props().get_string(keys::TEXT, ""),
        "Ada"
    );
}

#[test]
fn image_expands_to_box_with_all_props() {
    let node = Image(
        "logo",
        "logo.png",
        props! { keys::WIDTH => 32.0, keys::HEIGHT => 16.0 },
    );
    let expanded = node.expand();
    assert_eq!(expanded.key(), "logo-box");
    assert_eq!(expanded.props().get_string(keys::SOURCE, ""), "logo.png");
    assert_eq!(expanded.props().get_float(keys::WIDTH, 0.0), 32.0);
    assert!(expanded.children().is_empty());
}

#[test]
fn spacer_is_an_explicitly_sized_box() {
    let node = Spacer("gap", 4.0, 2.0);
    assert_eq!(node.kind(), &NodeKind::Box);
    assert_eq!(node.props().get_float(keys::WIDTH, 0.0), 4.0);
    assert_eq!(node.props().get_float(keys::HEIGHT, 0.0), 2.0);
}

#[test]
fn divider_thickness_wins_over_props() {
    let horizontal = Divider("h", true, props! { keys::HEIGHT => 9.0, keys::WIDTH => 40.0 });
    assert_eq!(horizontal.props().get_float(keys::HEIGHT, 0.0), 1.0);
    assert_eq!(horizontal.props().get_float(keys::WIDTH, 0.0), 40.0);

    let vertical = Divider("v", false, Props::new());
    assert_eq!(vertical.props().get_float(keys::WIDTH, 0.0), 1.0);
    assert!(!vertical.props().contains_key(keys::HEIGHT));
}
