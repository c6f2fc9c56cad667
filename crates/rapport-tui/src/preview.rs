//! Terminal rendition of the report markup shown in the preview pane.

use crate::theme::{preview_muted, preview_strong, preview_text};
use rapport_domain::format::{tokenize, Token};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Parses a markup fragment into styled lines. Block elements and `<br>`
/// start a new line; inline styles pick bold or muted text.
pub fn preview_lines(markup: &str) -> Vec<Line<'static>> {
    let mut builder = PreviewBuilder::default();
    for token in tokenize(markup) {
        match token {
            Token::Open { name, style } => {
                if name == "div" {
                    builder.break_line();
                }
                builder.push_style(&style);
            }
            Token::Close { name } => {
                builder.pop_style();
                if name == "div" {
                    builder.break_line();
                }
            }
            Token::LineBreak => builder.break_line(),
            Token::Text(text) => builder.push_text(&text),
        }
    }
    builder.finish()
}

#[derive(Default)]
struct PreviewBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
}

impl PreviewBuilder {
    fn push_style(&mut self, css: &str) {
        let inherited = self.styles.last().copied().unwrap_or_else(preview_text);
        self.styles.push(style_from_css(css, inherited));
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn push_text(&mut self, text: &str) {
        // Newlines in the raw fragment are source formatting, not content
        let text = text.replace('\n', "");
        let text = if self.current.is_empty() {
            text.trim_start().to_string()
        } else {
            text
        };
        if text.is_empty() {
            return;
        }
        let style = self.styles.last().copied().unwrap_or_else(preview_text);
        self.current.push(Span::styled(text, style));
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        self.lines
    }
}

fn style_from_css(css: &str, inherited: Style) -> Style {
    let declarations = css
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| (prop.trim(), value.trim()));

    let mut style = inherited;
    for (prop, value) in declarations {
        match (prop, value) {
            ("font-weight", "600" | "700" | "bold") => style = style.patch(preview_strong()),
            ("color", "#64748b") => style = style.patch(preview_muted()),
            _ => {}
        }
    }
    style
}
