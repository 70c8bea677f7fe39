//! Common rendering contracts shared between renderer backends.

use tessera_core::{keys, Node, NodeKind, Props};
use tessera_ui_graphics::Rect;
use tessera_ui_layout::{Constraints, LayoutEngine, LayoutResult};

/// Drawing surface implemented by concrete backends.
///
/// A render pass is always `clear`, any number of draws, then `flush`.
/// Only `flush` can fail.
pub trait RenderTarget {
    type Error;

    fn clear(&mut self);

    /// Draws the outline of `rect`. `props` are the Box node's properties.
    fn draw_rect(&mut self, rect: Rect, props: &Props);

    /// Draws a single line of `text` starting at the origin of `rect`.
    fn draw_text(&mut self, text: &str, rect: Rect, props: &Props);

    fn flush(&mut self) -> Result<(), Self::Error>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    type Error = T::Error;

    fn clear(&mut self) {
        (**self).clear();
    }

    fn draw_rect(&mut self, rect: Rect, props: &Props) {
        (**self).draw_rect(rect, props);
    }

    fn draw_text(&mut self, text: &str, rect: Rect, props: &Props) {
        (**self).draw_text(text, rect, props);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

/// Lays out a node tree and paints it onto a [`RenderTarget`].
pub struct Renderer<T> {
    engine: LayoutEngine,
    target: T,
}

impl<T: RenderTarget> Renderer<T> {
    pub fn new(target: T) -> Self {
        Self::with_engine(LayoutEngine::new(), target)
    }

    /// Uses `engine` for the layout half of every pass, e.g. one configured
    /// with a cell-based text measurer for a console target.
    pub fn with_engine(engine: LayoutEngine, target: T) -> Self {
        Self { engine, target }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Runs one full frame: layout, clear, draw, flush.
    ///
    /// Returns the rectangle table the frame was drawn from.
    pub fn render(&mut self, root: &Node, constraints: Constraints) -> Result<LayoutResult, T::Error> {
        let layout = self.engine.calculate_layout(root, constraints);
        self.target.clear();
        let mut painter = Painter {
            layout: &layout,
            target: &mut self.target,
            draws: 0,
        };
        painter.paint(root);
        log::debug!(
            "render pass for '{}': {} draw calls over {} entries",
            root.key(),
            painter.draws,
            layout.len()
        );
        self.target.flush()?;
        Ok(layout)
    }
}

struct Painter<'a, T> {
    layout: &'a LayoutResult,
    target: &'a mut T,
    draws: usize,
}

impl<T: RenderTarget> Painter<'_, T> {
    fn paint(&mut self, node: &Node) {
        // The custom node was never recorded; only its replacement was.
        let expanded = node.expand();
        let node = expanded.as_ref();

        let Some(rect) = self.layout.get(node.key()) else {
            log::debug!(
                "no layout entry for {} '{}', skipping its subtree",
                node.kind(),
                node.key()
            );
            return;
        };

        match node.kind() {
            NodeKind::Text => {
                let text = node.props().get_string(keys::TEXT, "");
                self.target.draw_text(text, rect, node.props());
                self.draws += 1;
            }
            NodeKind::Box => {
                self.target.draw_rect(rect, node.props());
                self.draws += 1;
                self.paint_children(node);
            }
            NodeKind::Row
            | NodeKind::Column
            | NodeKind::Container
            | NodeKind::Custom
            | NodeKind::Other(_) => self.paint_children(node),
        }
    }

    fn paint_children(&mut self, node: &Node) {
        for child in node.children() {
            self.paint(child);
        }
    }
}

#[cfg(test)]
#[path = "tests/renderer_tests.rs"]
mod tests;
