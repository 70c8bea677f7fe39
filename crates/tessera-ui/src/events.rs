//! Event dispatch onto handler props.
//!
//! Handlers live in the props of the node that declared them (for widgets,
//! the custom node), while the layout result only knows the keys of
//! expanded nodes. Dispatch by key therefore searches the tree as built;
//! dispatch by position walks the expanded tree and credits a hit to the
//! nearest enclosing handler.

use tessera_core::{keys, Handler, Node, PropValue};
use tessera_ui_graphics::Point;
use tessera_ui_layout::LayoutResult;

/// Invokes the `event` handler of the node keyed `key`, if any.
///
/// Returns whether a handler ran.
pub fn dispatch(root: &Node, key: &str, event: &str, argument: &PropValue) -> bool {
    match find_node(root, key).and_then(|node| node.props().get_handler(event)) {
        Some(handler) => {
            log::debug!("dispatching {event} to '{key}'");
            handler.invoke(argument);
            true
        }
        None => {
            log::debug!("no {event} handler on '{key}'");
            false
        }
    }
}

/// Fires `onClick` on the node keyed `key`. The handler receives the key.
pub fn click(root: &Node, key: &str) -> bool {
    dispatch(root, key, keys::ON_CLICK, &PropValue::from(key))
}

/// Fires `onClick` for the top-most clickable node under `point`.
///
/// Returns the key of the node that declared the handler.
pub fn click_at(root: &Node, layout: &LayoutResult, point: Point) -> Option<String> {
    let (key, handler) = hit_test(root, layout, point, None)?;
    log::debug!("pointer at ({}, {}) hit '{key}'", point.x, point.y);
    handler.invoke(&PropValue::from(key.as_str()));
    Some(key)
}

fn find_node<'a>(node: &'a Node, key: &str) -> Option<&'a Node> {
    if node.key() == key {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|child| find_node(child, key))
}

type Hit = (String, Handler);

fn clickable(node: &Node) -> Option<Hit> {
    node.props()
        .get_handler(keys::ON_CLICK)
        .map(|handler| (node.key().to_owned(), handler.clone()))
}

fn hit_test(node: &Node, layout: &LayoutResult, point: Point, enclosing: Option<Hit>) -> Option<Hit> {
    let enclosing = clickable(node).or(enclosing);
    let expanded = node.expand();
    let node = expanded.as_ref();
    let enclosing = clickable(node).or(enclosing);

    // Later siblings are drawn over earlier ones.
    for child in node.children().iter().rev() {
        if let Some(hit) = hit_test(child, layout, point, enclosing.clone()) {
            return Some(hit);
        }
    }

    let rect = layout.get(node.key())?;
    if rect.contains(point.x, point.y) {
        enclosing
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
