//! Spacer widget implementation

#![allow(non_snake_case)]

use tessera_core::{keys, Props};

use super::Box;

/// Creates an empty box of the given size.
///
/// Both dimensions must be positive for the size to apply; otherwise the
/// spacer collapses to zero.
pub fn Spacer(key: &str, width: f64, height: f64) -> tessera_core::Node {
    Box(
        key,
        Props::new()
            .with(keys::WIDTH, width)
            .with(keys::HEIGHT, height),
        [],
    )
}
