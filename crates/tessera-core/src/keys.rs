//! Well-known property names read by layout and rendering.

pub const TEXT: &str = "text";
pub const FONT_SIZE: &str = "fontSize";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const PADDING: &str = "padding";
pub const SPACING: &str = "spacing";
pub const LABEL: &str = "label";
pub const VALUE: &str = "value";
pub const SOURCE: &str = "source";
pub const ON_CLICK: &str = "onClick";
pub const ON_CHANGE: &str = "onChange";

// Styling hints. Layout ignores these; backends may read them.
pub const COLOR: &str = "color";
pub const BACKGROUND_COLOR: &str = "backgroundColor";
pub const BORDER_RADIUS: &str = "borderRadius";
pub const BORDER_WIDTH: &str = "borderWidth";
pub const BORDER_COLOR: &str = "borderColor";
pub const TEXT_ALIGN: &str = "textAlign";
