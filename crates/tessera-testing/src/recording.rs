//! In-memory render target that logs every call.

use std::convert::Infallible;

use tessera_core::Props;
use tessera_render_common::RenderTarget;
use tessera_ui_graphics::Rect;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Rect { rect: Rect, props: Props },
    Text { text: String, rect: Rect },
    Flush,
}

/// Records draw calls for later inspection. Never fails.
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    ops: Vec<DrawOp>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Operations since the most recent `clear`.
    pub fn last_frame(&self) -> &[DrawOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear))
            .map_or(0, |index| index + 1);
        &self.ops[start..]
    }

    /// Text drawn in the last frame, in draw order.
    pub fn texts(&self) -> Vec<String> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles drawn in the last frame, in draw order.
    pub fn rects(&self) -> Vec<Rect> {
        self.last_frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Where `text` was drawn in the last frame.
    pub fn text_rect(&self, text: &str) -> Option<Rect> {
        self.last_frame().iter().find_map(|op| match op {
            DrawOp::Text { text: drawn, rect } if drawn == text => Some(*rect),
            _ => None,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Flush))
            .count()
    }
}

impl RenderTarget for RecordingTarget {
    type Error = Infallible;

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_rect(&mut self, rect: Rect, props: &Props) {
        self.ops.push(DrawOp::Rect {
            rect,
            props: props.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _props: &Props) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            rect,
        });
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.ops.push(DrawOp::Flush);
        Ok(())
    }
}
