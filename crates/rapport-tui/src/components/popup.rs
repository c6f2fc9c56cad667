use crate::theme::{focused_border, highlight_text, label_text, normal_text, popup_bg};
use rapport_core::InputState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn render_popup_block(frame: &mut Frame, title: &str, area: Rect) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Line and column of the cursor inside a possibly multi-line buffer.
fn cursor_line_col(input: &InputState) -> (usize, usize) {
    let before = &input.as_str()[..input.cursor_pos()];
    let line = before.matches('\n').count();
    let col = before.rsplit('\n').next().unwrap_or("").chars().count();
    (line, col)
}

pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input: &InputState,
    multiline: bool,
) {
    let (percent_y, box_height) = if multiline { (50, 8) } else { (30, 3) };
    let area = centered_rect(60, percent_y, frame.area());
    let inner = render_popup_block(frame, title, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(box_height),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label.to_string()).style(highlight_text()), chunks[0]);

    let lines: Vec<Line> = input.as_str().split('\n').map(Line::from).collect();
    let (line, col) = cursor_line_col(input);
    let visible_rows = box_height.saturating_sub(2) as usize;
    let scroll = line.saturating_sub(visible_rows.saturating_sub(1));
    let field = Paragraph::new(lines)
        .style(normal_text())
        .scroll((scroll as u16, 0))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(field, chunks[1]);

    let hint = if multiline {
        "Enter: valider  Alt+Enter: nouvelle ligne  Esc: annuler"
    } else {
        "Enter: valider  Esc: annuler"
    };
    frame.render_widget(Paragraph::new(hint).style(label_text()), chunks[2]);

    let cursor_x = chunks[1].x + col as u16 + 1;
    let cursor_y = chunks[1].y + (line - scroll) as u16 + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 25, frame.area());
    let inner = render_popup_block(frame, title, area);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::styled("y: confirmer  n/Esc: annuler", label_text()),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .style(normal_text())
            .wrap(Wrap { trim: true }),
        inner,
    );
}
