//! Intrinsic text measurement.

use tessera_ui_graphics::Size;

/// Measures the intrinsic size of a single line of text.
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

/// Stand-in font metric: every character is `0.6 * font_size` wide and a
/// line is `1.2 * font_size` tall. No shaping, no wrapping.
///
/// Characters are Unicode scalar values, not UTF-8 bytes, so `"héllo"`
/// measures five characters wide.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateTextMeasurer;

impl ApproximateTextMeasurer {
    pub const CHAR_WIDTH_RATIO: f64 = 0.6;
    pub const LINE_HEIGHT_RATIO: f64 = 1.2;
}

impl TextMeasurer for ApproximateTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let chars = text.chars().count() as f64;
        Size {
            width: chars * font_size * Self::CHAR_WIDTH_RATIO,
            height: font_size * Self::LINE_HEIGHT_RATIO,
        }
    }
}

/// Fixed-cell metric that ignores the font size, for grid backends such as
/// a character console.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospacedTextMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl MonospacedTextMeasurer {
    /// One cell per character, one row per line.
    pub const CONSOLE: Self = Self {
        char_width: 1.0,
        line_height: 1.0,
    };

    pub const fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospacedTextMeasurer {
    fn default() -> Self {
        Self::CONSOLE
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, _font_size: f64) -> Size {
        Size {
            width: text.chars().count() as f64 * self.char_width,
            height: self.line_height,
        }
    }
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
