use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn border_for(focused: bool) -> Style {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn placeholder_text() -> Style {
    Style::default()
        .fg(PLACEHOLDER_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn preview_text() -> Style {
    Style::default().fg(PREVIEW_TEXT)
}

pub fn preview_strong() -> Style {
    Style::default()
        .fg(PREVIEW_STRONG)
        .add_modifier(Modifier::BOLD)
}

pub fn preview_muted() -> Style {
    Style::default().fg(PREVIEW_MUTED)
}

pub fn success_text() -> Style {
    Style::default().fg(SUCCESS_COLOR)
}

pub fn error_text() -> Style {
    Style::default().fg(ERROR_COLOR)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
