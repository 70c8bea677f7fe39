//! Character-grid render target, mainly for debugging and parity tests.
//!
//! The board is a fixed `width`×`height` grid of characters. Layout
//! coordinates map one-to-one onto cells after truncation toward zero, so
//! pair this target with the layout crate's `MonospacedTextMeasurer::CONSOLE`
//! when the layout should be measured in cells.

use std::fmt;
use std::io::{self, Stdout, Write};

use tessera_core::Props;
use tessera_render_common::RenderTarget;
use tessera_ui_graphics::Rect;

pub const BLANK: char = ' ';
pub const CORNER: char = '+';
pub const HORIZONTAL_EDGE: char = '-';
pub const VERTICAL_EDGE: char = '|';

pub struct ConsoleRenderTarget<W: Write = Stdout> {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
    writer: W,
}

impl ConsoleRenderTarget {
    /// Board that prints to standard output on flush.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_writer(width, height, io::stdout())
    }
}

impl<W: Write> ConsoleRenderTarget<W> {
    pub fn with_writer(width: usize, height: usize, writer: W) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![BLANK; width]; height],
            writer,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Character at column `x`, row `y`, or `None` outside the board.
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Board rows, trailing blanks included.
    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }

    fn put(&mut self, x: i64, y: i64, glyph: char) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *cell = glyph;
        }
    }

    fn cell_bounds(&self, rect: Rect) -> Option<CellBounds> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let left = cell(rect.x()).max(0);
        let top = cell(rect.y()).max(0);
        let right = cell(rect.x() + rect.width() - 1.0).min(self.width as i64 - 1);
        let bottom = cell(rect.y() + rect.height() - 1.0).min(self.height as i64 - 1);
        if left > right || top > bottom {
            return None;
        }
        Some(CellBounds {
            left,
            top,
            right,
            bottom,
        })
    }
}

/// Inclusive cell range covered by a rectangle after clamping to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellBounds {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

// Truncates toward zero; NaN maps to 0 and infinities saturate.
fn cell(coordinate: f64) -> i64 {
    coordinate as i64
}

impl<W: Write> RenderTarget for ConsoleRenderTarget<W> {
    type Error = io::Error;

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(BLANK);
        }
    }

    fn draw_rect(&mut self, rect: Rect, _props: &Props) {
        let Some(bounds) = self.cell_bounds(rect) else {
            log::trace!("rect {rect} lies outside the {}x{} board", self.width, self.height);
            return;
        };
        let CellBounds {
            left,
            top,
            right,
            bottom,
        } = bounds;

        for x in left..=right {
            self.put(x, top, HORIZONTAL_EDGE);
            self.put(x, bottom, HORIZONTAL_EDGE);
        }
        for y in top..=bottom {
            self.put(left, y, VERTICAL_EDGE);
            self.put(right, y, VERTICAL_EDGE);
        }
        for (x, y) in [(left, top), (right, top), (left, bottom), (right, bottom)] {
            self.put(x, y, CORNER);
        }
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _props: &Props) {
        let x = cell(rect.x());
        let y = cell(rect.y());
        if y < 0 || y >= self.height as i64 {
            return;
        }
        let width = self.width as i64;
        for (offset, glyph) in text.chars().enumerate() {
            let column = x.saturating_add(offset as i64);
            if column >= width {
                break;
            }
            self.put(column, y, glyph);
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for row in &self.cells {
            let line: String = row.iter().collect();
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> fmt::Display for ConsoleRenderTarget<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<W: Write> fmt::Debug for ConsoleRenderTarget<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleRenderTarget")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
