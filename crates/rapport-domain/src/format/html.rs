use super::escape::escape_html;
use crate::{ReportState, TaskEntry};
use std::fmt::Write;

const CONTAINER_STYLE: &str = "max-width:760px;margin:0;padding:16px;border:1px solid #e5e7eb;border-radius:14px;background:#ffffff";
const BRAND_ROW_STYLE: &str =
    "display:flex;justify-content:space-between;align-items:center;margin-bottom:12px";
const BRAND_STYLE: &str = "font-weight:700;font-size:16px;color:#0f172a";
const TAGLINE_STYLE: &str = "font-size:12px;color:#64748b";
const META_GRID_STYLE: &str =
    "display:grid;grid-template-columns:1fr 160px 160px;gap:8px;margin-bottom:12px";
const META_CELL_STYLE: &str =
    "padding:8px 10px;border:1px solid #e5e7eb;border-radius:8px;background:#f8fafc";
const META_LABEL_STYLE: &str = "font-size:12px;color:#64748b";
const META_VALUE_STYLE: &str = "font-weight:600;color:#0f172a";
const DATE_VALUE_STYLE: &str = "font-weight:600;color:#0f172a;text-transform:capitalize";
const CARD_STYLE: &str = "border:1px solid #e5e7eb;border-radius:12px;padding:12px;margin-bottom:10px;background:#ffffff";
const CARD_HEADER_STYLE: &str =
    "display:flex;justify-content:space-between;align-items:center;margin-bottom:6px";
const CARD_TITLE_STYLE: &str = "font-weight:600;color:#0f172a";
const CARD_BODY_STYLE: &str = "font-size:14px;line-height:1.5;color:#334155";

pub const BRAND: &str = "EasyRapport";
pub const TAGLINE: &str = "Rapport des tâches réalisées";

/// Renders the report as a single styled `<div>` block. All user text is
/// escaped; blank tasks are skipped.
pub fn render_report(state: &ReportState) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<div style="{}">"#, CONTAINER_STYLE);
    push_header(&mut html, state);
    for (position, task) in state.reportable_tasks() {
        push_task_card(&mut html, position, task);
    }
    html.push_str("</div>\n");
    html
}

fn push_header(html: &mut String, state: &ReportState) {
    let meta = &state.meta;
    let _ = writeln!(
        html,
        r#"<div style="{}"><div style="{}">{}</div><div style="{}">{}</div></div>"#,
        BRAND_ROW_STYLE, BRAND_STYLE, BRAND, TAGLINE_STYLE, TAGLINE
    );
    let _ = writeln!(html, r#"<div style="{}">"#, META_GRID_STYLE);
    push_meta_cell(html, "Titre", META_VALUE_STYLE, &escape_html(&meta.title));
    push_meta_cell(
        html,
        "Date",
        DATE_VALUE_STYLE,
        &escape_html(&meta.formatted_date()),
    );
    push_meta_cell(html, "Auteur", META_VALUE_STYLE, &escape_html(&meta.author));
    html.push_str("</div>\n");
}

fn push_meta_cell(html: &mut String, label: &str, value_style: &str, value: &str) {
    let _ = writeln!(
        html,
        r#"<div style="{}"><span style="{}">{}</span><div style="{}">{}</div></div>"#,
        META_CELL_STYLE, META_LABEL_STYLE, label, value_style, value
    );
}

fn push_task_card(html: &mut String, position: usize, task: &TaskEntry) {
    let title = if task.has_title() {
        escape_html(&task.title)
    } else {
        format!("Tâche {}", position)
    };
    let description = escape_html(&task.description)
        .replace("\r\n", "<br>")
        .replace('\n', "<br>");
    let _ = writeln!(
        html,
        r#"<div style="{}"><div style="{}"><div style="{}">{}</div></div><div style="{}">{}</div></div>"#,
        CARD_STYLE, CARD_HEADER_STYLE, CARD_TITLE_STYLE, title, CARD_BODY_STYLE, description
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReportMeta, TaskEntry};
    use chrono::NaiveDate;

    fn sample_state() -> ReportState {
        ReportState {
            meta: ReportMeta::for_date(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(), "Camille"),
            tasks: vec![
                TaskEntry::with_text("Revue de code", "PR #42\nPR #43"),
                TaskEntry::new(),
                TaskEntry::with_text("  ", "Support client"),
            ],
        }
    }

    #[test]
    fn test_header_contains_meta() {
        let html = render_report(&sample_state());
        assert!(html.starts_with("<div style="));
        assert!(html.contains(">Rapport du mercredi</div>"));
        assert!(html.contains(">04/03/2026</div>"));
        assert!(html.contains(">Camille</div>"));
        assert!(html.contains("text-transform:capitalize"));
        assert!(html.contains(BRAND));
    }

    #[test]
    fn test_blank_tasks_are_skipped() {
        let html = render_report(&sample_state());
        assert_eq!(html.matches(CARD_STYLE).count(), 2);
    }

    #[test]
    fn test_untitled_task_gets_positional_label() {
        let html = render_report(&sample_state());
        assert!(html.contains(">Tâche 2</div>"));
        assert!(!html.contains(">Tâche 3</div>"));
    }

    #[test]
    fn test_description_newlines_become_breaks() {
        let html = render_report(&sample_state());
        assert!(html.contains("PR #42<br>PR #43"));

        let mut state = sample_state();
        state.tasks[0].description = "a\r\nb".to_string();
        assert!(render_report(&state).contains(">a<br>b</div>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut state = sample_state();
        state.meta.title = "<script>alert('x')</script>".to_string();
        state.meta.author = "Tom & \"Jerry\"".to_string();
        state.tasks[0].title = "<b>gras</b>".to_string();
        state.tasks[0].description = "a > b\n<i>".to_string();

        let html = render_report(&state);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(html.contains("a &gt; b<br>&lt;i&gt;"));
    }

    #[test]
    fn test_invalid_date_rendered_raw() {
        let mut state = sample_state();
        state.meta.date = "bientôt".to_string();
        assert!(render_report(&state).contains(">bientôt</div>"));
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let html = render_report(&ReportState::default());
        assert!(html.contains(TAGLINE));
        assert_eq!(html.matches(CARD_STYLE).count(), 0);
    }
}
