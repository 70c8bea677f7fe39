//! Divider widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, Node, Props};

use super::Box;

/// Creates a one unit thick separator.
///
/// Only the thickness is set (`height` for horizontal, `width` for
/// vertical). A box needs both dimensions to size itself, so pass the length
/// in `props` to make the divider visible.
pub fn Divider(key: &str, horizontal: bool, props: Props) -> Node {
    let thickness = if horizontal { keys::HEIGHT } else { keys::WIDTH };
    let merged = Props::new()
        .with(keys::BACKGROUND_COLOR, "#CCCCCC")
        .merge(&props)
        .with(thickness, 1.0);
    Box(key, merged, [])
}
