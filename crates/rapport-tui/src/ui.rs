use crate::app::{App, AppMode, Focus, MetaField, TaskField};
use crate::components::{render_confirm_popup, render_input_popup};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DESCRIPTION_PREVIEW_CHARS: usize = 60;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MetaField::ALL.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    render_meta_panel(app, frame, form[0]);
    render_tasks_panel(app, frame, form[1]);
    render_preview_panel(app, frame, columns[1]);
    render_footer(app, frame, chunks[1]);

    match app.mode {
        AppMode::EditMeta(field) => render_input_popup(
            frame,
            "Rapport",
            field.label(),
            &app.input,
            false,
        ),
        AppMode::EditTask(field) => {
            let title = match app.task_selection.get() {
                Some(idx) => format!("Tâche {}", idx + 1),
                None => "Tâche".to_string(),
            };
            render_input_popup(
                frame,
                &title,
                field.label(),
                &app.input,
                field == TaskField::Description,
            )
        }
        AppMode::ConfirmReset => render_confirm_popup(
            frame,
            "Réinitialiser",
            "Supprimer toutes les tâches et revenir à la date du jour ?",
        ),
        AppMode::Normal => {}
    }
}

fn panel_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_for(focused))
}

fn field_line(label: &str, value: &str, selected: bool, focused: bool) -> Line<'static> {
    let value_span = if value.trim().is_empty() {
        Span::styled("(vide)", placeholder_text())
    } else {
        Span::styled(value.to_string(), normal_text())
    };
    let line = Line::from(vec![
        Span::styled(format!("{:<12}", label), label_text()),
        value_span,
    ]);
    if selected {
        line.style(selected_item(focused))
    } else {
        line
    }
}

fn render_meta_panel(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Meta;
    let lines: Vec<Line> = MetaField::ALL
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            field_line(
                field.label(),
                field.value(&app.report),
                app.meta_selection.is_selected(idx),
                focused,
            )
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Rapport", focused)),
        area,
    );
}

/// First line of a description, shortened for the task list.
fn description_summary(description: &str) -> String {
    let first_line = description.lines().next().unwrap_or("");
    let mut summary: String = first_line.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if first_line.chars().count() > DESCRIPTION_PREVIEW_CHARS || description.lines().count() > 1 {
        summary.push('…');
    }
    summary
}

fn render_tasks_panel(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Tasks;
    let title = format!("Tâches ({})", app.report.task_count());

    let mut lines = vec![];
    if app.report.tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            "Aucune tâche. Appuyez sur 'n' pour en ajouter une.",
            label_text(),
        )));
    }

    for (idx, task) in app.report.tasks.iter().enumerate() {
        let selected = app.task_selection.is_selected(idx);
        let marker_style = if selected && focused {
            bold_highlight()
        } else {
            label_text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", idx + 1), marker_style),
            Span::styled("[d] Supprimer", label_text()),
        ]));
        lines.push(field_line(
            "  Titre",
            &task.title,
            selected && app.task_field == TaskField::Title,
            focused,
        ));
        lines.push(field_line(
            "  Description",
            &description_summary(&task.description),
            selected && app.task_field == TaskField::Description,
            focused,
        ));
    }

    // Keep the selected row visible: each task takes three lines
    let visible = area.height.saturating_sub(2) as usize;
    let selected_bottom = app.task_selection.get().map(|i| i * 3 + 3).unwrap_or(0);
    let scroll = selected_bottom.saturating_sub(visible) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .scroll((scroll, 0))
            .block(panel_block(&title, focused)),
        area,
    );
}

fn render_preview_panel(app: &App, frame: &mut Frame, area: Rect) {
    let preview = Paragraph::new(app.preview.clone())
        .wrap(Wrap { trim: false })
        .scroll((app.preview_scroll, 0))
        .block(panel_block("Aperçu", false));
    frame.render_widget(preview, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let style = if status.is_error {
                error_text()
            } else {
                success_text()
            };
            Line::from(Span::styled(status.text.clone(), style))
        }
        None => {
            let mut spans = vec![Span::styled(
                "Tab: focus  j/k: naviguer  h/l: champ  Enter: modifier  E: $EDITOR  n: ajouter  d: supprimer  g: aperçu  y: copier  R: réinitialiser  q: quitter",
                label_text(),
            )];
            if !app.save_enabled() {
                spans.push(Span::styled("  [lecture seule]", error_text()));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(
        Paragraph::new(line)
            .style(Style::default())
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
