//! Recursive constraint-propagating layout pass.
//!
//! Every node is sized bottom-up: a node first computes its intrinsic size
//! (from text metrics, explicit props or its children), then clamps it to the
//! constraints it received, records `Rect { position, size }` under its key
//! and returns the clamped size so the parent can advance its cursor.
//!
//! | Kind | Intrinsic size |
//! |---|---|
//! | `Text` | measured text (`text`, `fontSize` = 16) |
//! | `Box` | explicit `width`×`height` when both are positive, else first child; plus `2 * padding` on both axes |
//! | `Row` / `Column` | children stacked on the main axis with `spacing`, cross extent = largest child |
//! | `Container` | first child |
//! | `Custom` with component | the component's replacement node, laid out in its place |
//! | anything else | first child |
//!
//! Linear children receive `min = 0` and a main-axis maximum shrunk by the
//! space already consumed; the cross-axis maximum is passed through.
//! Children after the first of a first-child node are placed at the
//! parent's position with the parent's constraints so that they still get
//! an entry, but they do not contribute to the size.

use std::sync::Arc;

use tessera_core::{keys, Node, NodeKind};
use tessera_ui_graphics::{Point, Rect, Size};

use crate::{ApproximateTextMeasurer, Axis, Constraints, LayoutError, LayoutResult, TextMeasurer};

pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Stateless layout engine. One instance may serve any number of trees,
/// from any thread.
#[derive(Clone)]
pub struct LayoutEngine {
    measurer: Arc<dyn TextMeasurer>,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self {
            measurer: Arc::new(ApproximateTextMeasurer),
        }
    }

    pub fn with_text_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            measurer: Arc::new(measurer),
        }
    }

    pub fn text_measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Lays out `root` at the origin under `constraints`.
    ///
    /// Never fails. Missing or mistyped props fall back to their defaults and
    /// duplicate keys resolve to the last recorded node (see
    /// [`LayoutResult::duplicate_keys`]).
    pub fn calculate_layout(&self, root: &Node, constraints: Constraints) -> LayoutResult {
        log::debug!(
            "layout pass for '{}' under {:?}..{:?}",
            root.key(),
            constraints.min,
            constraints.max
        );
        let mut pass = LayoutPass {
            measurer: self.measurer.as_ref(),
            result: LayoutResult::new(),
        };
        let size = pass.layout_node(root, constraints, Point::ZERO);
        log::debug!(
            "layout pass for '{}' finished: {}x{}, {} entries",
            root.key(),
            size.width,
            size.height,
            pass.result.len()
        );
        pass.result
    }

    /// Like [`LayoutEngine::calculate_layout`], but rejects trees in which
    /// two nodes share a key, reporting the first collision.
    pub fn calculate_layout_strict(
        &self,
        root: &Node,
        constraints: Constraints,
    ) -> Result<LayoutResult, LayoutError> {
        let result = self.calculate_layout(root, constraints);
        match result.duplicate_keys().first() {
            Some(key) => Err(LayoutError::DuplicateKey { key: key.clone() }),
            None => Ok(result),
        }
    }
}

/// Lays out `root` with a default [`LayoutEngine`].
pub fn calculate_layout(root: &Node, constraints: Constraints) -> LayoutResult {
    LayoutEngine::new().calculate_layout(root, constraints)
}

struct LayoutPass<'a> {
    measurer: &'a dyn TextMeasurer,
    result: LayoutResult,
}

impl LayoutPass<'_> {
    fn layout_node(&mut self, node: &Node, constraints: Constraints, position: Point) -> Size {
        // Custom nodes are replaced wholesale; the Custom node's own key is never recorded.
        let expanded = node.expand();
        let node = expanded.as_ref();

        let intrinsic = match node.kind() {
            NodeKind::Text => self.layout_text(node, constraints, position),
            NodeKind::Box => self.layout_box(node, constraints, position),
            NodeKind::Row => self.layout_linear(node, Axis::Horizontal, constraints, position),
            NodeKind::Column => self.layout_linear(node, Axis::Vertical, constraints, position),
            NodeKind::Container | NodeKind::Custom | NodeKind::Other(_) => {
                self.layout_first_child(node, constraints, position)
            }
        };

        let size = constraints.constrain(intrinsic);
        log::trace!(
            "{} '{}' at ({}, {}): intrinsic {}x{} -> {}x{}",
            node.kind(),
            node.key(),
            position.x,
            position.y,
            intrinsic.width,
            intrinsic.height,
            size.width,
            size.height
        );
        if self.result.record(node.key(), Rect::new(position, size)) {
            log::warn!(
                "duplicate node key '{}'; the later {} overwrote the earlier entry",
                node.key(),
                node.kind()
            );
        }
        size
    }

    fn layout_text(&mut self, node: &Node, constraints: Constraints, position: Point) -> Size {
        let props = node.props();
        let text = props.get_string(keys::TEXT, "");
        let font_size = props.get_float(keys::FONT_SIZE, DEFAULT_FONT_SIZE);
        // Text never sizes off children; any it has still get entries.
        self.layout_first_child(node, constraints, position);
        self.measurer.measure(text, font_size)
    }

    fn layout_box(&mut self, node: &Node, constraints: Constraints, position: Point) -> Size {
        let props = node.props();
        let width = props.get_float(keys::WIDTH, 0.0);
        let height = props.get_float(keys::HEIGHT, 0.0);
        let padding = props.get_float(keys::PADDING, 0.0);

        let content = self.layout_first_child(node, constraints, position);
        let mut size = if width > 0.0 && height > 0.0 {
            Size::new(width, height)
        } else {
            content
        };
        size.width += padding * 2.0;
        size.height += padding * 2.0;
        size
    }

    fn layout_linear(
        &mut self,
        node: &Node,
        axis: Axis,
        constraints: Constraints,
        position: Point,
    ) -> Size {
        let children = node.children();
        if children.is_empty() {
            return Size::ZERO;
        }

        let spacing = node.props().get_float(keys::SPACING, 0.0);
        let start = axis.main_of(position);
        let cross_origin = axis.cross_of(position);
        let max_main = axis.main(constraints.max);
        let max_cross = axis.cross(constraints.max);

        let mut cursor = start;
        let mut cross_extent = 0.0_f64;
        for child in children {
            let remaining = max_main - (cursor - start);
            let child_constraints = Constraints::loose(axis.size(remaining, max_cross));
            let child_size =
                self.layout_node(child, child_constraints, axis.point(cursor, cross_origin));
            cursor += axis.main(child_size) + spacing;
            if axis.cross(child_size) > cross_extent {
                cross_extent = axis.cross(child_size);
            }
        }

        // Trailing spacing is not part of the extent.
        axis.size(cursor - start - spacing, cross_extent)
    }

    fn layout_first_child(
        &mut self,
        node: &Node,
        constraints: Constraints,
        position: Point,
    ) -> Size {
        let mut children = node.children().iter();
        let Some(first) = children.next() else {
            return Size::ZERO;
        };
        let size = self.layout_node(first, constraints, position);
        for rest in children {
            self.layout_node(rest, constraints, position);
        }
        size
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
