use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const PLACEHOLDER_TEXT: Color = Color::DarkGray;

pub const PREVIEW_TEXT: Color = Color::Gray;
pub const PREVIEW_STRONG: Color = Color::White;
pub const PREVIEW_MUTED: Color = Color::DarkGray;

pub const POPUP_BG: Color = Color::Black;
pub const SUCCESS_COLOR: Color = Color::Green;
pub const ERROR_COLOR: Color = Color::Red;
