use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rapport_domain::{date, ReportState, TaskEntry};
use rapport_persistence::StateStore;
use rapport_tui::app::{AppMode, Focus, KeyOutcome, TaskField};
use rapport_tui::{App, ClipboardBackend};
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

#[derive(Clone, Default)]
struct RecordingClipboard {
    rich_fails: bool,
    writes: Arc<Mutex<Vec<(String, Option<String>)>>>,
}

impl ClipboardBackend for RecordingClipboard {
    fn write_rich(&mut self, html: &str, plain: &str) -> io::Result<()> {
        if self.rich_fails {
            return Err(io::Error::other("html unsupported"));
        }
        self.writes
            .lock()
            .unwrap()
            .push((plain.to_string(), Some(html.to_string())));
        Ok(())
    }

    fn write_text(&mut self, plain: &str) -> io::Result<()> {
        self.writes.lock().unwrap().push((plain.to_string(), None));
        Ok(())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c))).await;
    }
}

async fn reload(path: &std::path::Path) -> ReportState {
    StateStore::open(path).load().await.unwrap()
}

#[tokio::test]
async fn test_new_task_is_edited_saved_and_previewed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut app = App::load(StateStore::open(&path)).await;

    app.handle_key(key(KeyCode::Char('n'))).await;
    assert_eq!(app.mode, AppMode::EditTask(TaskField::Title));
    assert_eq!(app.focus, Focus::Tasks);

    type_text(&mut app, "Revue <code>").await;
    app.handle_key(key(KeyCode::Enter)).await;
    assert_eq!(app.mode, AppMode::Normal);

    let saved = reload(&path).await;
    assert_eq!(saved.tasks, vec![TaskEntry::with_text("Revue <code>", "")]);

    let preview: Vec<String> = app
        .preview
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert!(preview.iter().any(|line| line == "Revue <code>"));
}

#[tokio::test]
async fn test_description_edit_and_remove() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut app = App::load(StateStore::open(&path)).await;

    app.handle_key(key(KeyCode::Char('n'))).await;
    type_text(&mut app, "A").await;
    app.handle_key(key(KeyCode::Enter)).await;
    app.handle_key(key(KeyCode::Char('n'))).await;
    type_text(&mut app, "B").await;
    app.handle_key(key(KeyCode::Enter)).await;

    app.handle_key(key(KeyCode::Char('l'))).await;
    app.handle_key(key(KeyCode::Enter)).await;
    assert_eq!(app.mode, AppMode::EditTask(TaskField::Description));
    type_text(&mut app, "un").await;
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)).await;
    type_text(&mut app, "deux").await;
    app.handle_key(key(KeyCode::Enter)).await;
    assert_eq!(app.report.tasks[1].description, "un\ndeux");

    app.handle_key(key(KeyCode::Char('k'))).await;
    app.handle_key(key(KeyCode::Char('d'))).await;
    let saved = reload(&path).await;
    assert_eq!(saved.tasks, vec![TaskEntry::with_text("B", "un\ndeux")]);
    assert_eq!(app.task_selection.get(), Some(0));
}

#[tokio::test]
async fn test_escape_discards_edit() {
    let dir = tempdir().unwrap();
    let mut app = App::load(StateStore::open(dir.path().join("state.json"))).await;
    let title = app.report.meta.title.clone();

    app.handle_key(key(KeyCode::Enter)).await;
    assert!(matches!(app.mode, AppMode::EditMeta(_)));
    type_text(&mut app, " modifié").await;
    app.handle_key(key(KeyCode::Esc)).await;

    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.report.meta.title, title);
}

#[tokio::test]
async fn test_editing_date_rederives_title() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut app = App::load(StateStore::open(&path)).await;

    app.handle_key(key(KeyCode::Char('j'))).await;
    app.handle_key(key(KeyCode::Enter)).await;
    app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
        .await;
    type_text(&mut app, "2026-03-04").await;
    app.handle_key(key(KeyCode::Enter)).await;

    assert_eq!(app.report.meta.title, "Rapport du mercredi");
    assert_eq!(reload(&path).await.meta.date, "2026-03-04");
}

#[tokio::test]
async fn test_reset_requires_confirmation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    let mut app = App::load(StateStore::open(&path).with_default_author("Camille")).await;
    app.handle_key(key(KeyCode::Char('n'))).await;
    type_text(&mut app, "A").await;
    app.handle_key(key(KeyCode::Enter)).await;

    app.handle_key(key(KeyCode::Char('R'))).await;
    app.handle_key(key(KeyCode::Char('n'))).await;
    assert_eq!(app.mode, AppMode::Normal);
    assert_eq!(app.report.task_count(), 1);

    app.handle_key(key(KeyCode::Char('R'))).await;
    app.handle_key(key(KeyCode::Char('y'))).await;
    assert_eq!(app.report.task_count(), 0);
    assert_eq!(app.report.meta.date, date::today_iso());
    assert_eq!(app.report.meta.author, "Camille");
    assert_eq!(reload(&path).await, app.report);
}

#[tokio::test]
async fn test_copy_uses_rich_then_plain_fallback() {
    let dir = tempdir().unwrap();
    let clipboard = RecordingClipboard::default();
    let writes = clipboard.writes.clone();
    let mut app = App::load(StateStore::open(dir.path().join("state.json")))
        .await
        .with_clipboard(Box::new(clipboard));

    app.handle_key(key(KeyCode::Char('y'))).await;
    {
        let writes = writes.lock().unwrap();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].1.as_deref().unwrap().starts_with("<div"));
    }

    let failing = RecordingClipboard {
        rich_fails: true,
        writes: writes.clone(),
    };
    app = app.with_clipboard(Box::new(failing));
    app.handle_key(key(KeyCode::Char('y'))).await;

    let writes = writes.lock().unwrap();
    assert_eq!(writes.len(), 2);
    assert!(writes[1].1.is_none());
    assert!(writes[1].0.contains("EasyRapport"));
    assert!(!app.status.as_ref().unwrap().is_error);
}

#[tokio::test]
async fn test_corrupt_file_disables_saving() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ invalid json }").unwrap();

    let mut app = App::load(StateStore::open(&path)).await;
    assert!(!app.save_enabled());
    assert!(app.status.as_ref().unwrap().is_error);

    app.handle_key(key(KeyCode::Char('n'))).await;
    type_text(&mut app, "A").await;
    app.handle_key(key(KeyCode::Enter)).await;

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ invalid json }");
}

#[tokio::test]
async fn test_external_editor_request() {
    let dir = tempdir().unwrap();
    let mut app = App::load(StateStore::open(dir.path().join("state.json"))).await;

    assert_eq!(
        app.handle_key(key(KeyCode::Char('E'))).await,
        KeyOutcome::Handled
    );

    app.handle_key(key(KeyCode::Char('n'))).await;
    app.handle_key(key(KeyCode::Enter)).await;
    assert_eq!(
        app.handle_key(key(KeyCode::Char('E'))).await,
        KeyOutcome::EditDescription(0)
    );

    app.apply_description(0, "ligne\n".to_string()).await;
    assert_eq!(app.report.tasks[0].description, "ligne");
}

#[tokio::test]
async fn test_q_quits_only_outside_editing() {
    let dir = tempdir().unwrap();
    let mut app = App::load(StateStore::open(dir.path().join("state.json"))).await;

    app.handle_key(key(KeyCode::Char('e'))).await;
    app.handle_key(key(KeyCode::Char('q'))).await;
    assert!(!app.should_quit);
    assert!(app.input.as_str().ends_with('q'));

    app.handle_key(key(KeyCode::Esc)).await;
    app.handle_key(key(KeyCode::Char('q'))).await;
    assert!(app.should_quit);
}
