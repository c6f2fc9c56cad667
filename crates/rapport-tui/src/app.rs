use crate::clipboard::{copy_report, ClipboardBackend, CopyOutcome, SystemClipboard};
use crate::dialog::{handle_dialog_input, DialogAction};
use crate::editor::edit_in_external_editor;
use crate::events::{Event, EventHandler};
use crate::preview::preview_lines;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rapport_core::{InputState, RapportResult, SelectionState};
use rapport_domain::{
    date, render_report, MetaUpdate, ReportOperations, ReportState, TaskUpdate,
};
use rapport_persistence::StateStore;
use ratatui::{backend::CrosstermBackend, text::Line, Terminal};
use std::io;

const PREVIEW_SCROLL_STEP: u16 = 5;

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub focus: Focus,
    pub input: InputState,
    pub report: ReportState,
    pub meta_selection: SelectionState,
    pub task_selection: SelectionState,
    pub task_field: TaskField,
    pub preview: Vec<Line<'static>>,
    pub preview_scroll: u16,
    pub status: Option<StatusMessage>,
    store: StateStore,
    save_enabled: bool,
    clipboard: Box<dyn ClipboardBackend>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Meta,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Title,
    Date,
    Author,
}

impl MetaField {
    pub const ALL: [MetaField; 3] = [MetaField::Title, MetaField::Date, MetaField::Author];

    pub fn label(self) -> &'static str {
        match self {
            MetaField::Title => "Titre",
            MetaField::Date => "Date",
            MetaField::Author => "Auteur",
        }
    }

    pub fn value(self, report: &ReportState) -> &str {
        match self {
            MetaField::Title => &report.meta.title,
            MetaField::Date => &report.meta.date,
            MetaField::Author => &report.meta.author,
        }
    }

    fn update(self, value: String) -> MetaUpdate {
        let mut update = MetaUpdate::default();
        match self {
            MetaField::Title => update.title = Some(value),
            MetaField::Date => update.date = Some(value),
            MetaField::Author => update.author = Some(value),
        }
        update
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
}

impl TaskField {
    pub fn label(self) -> &'static str {
        match self {
            TaskField::Title => "Titre",
            TaskField::Description => "Description",
        }
    }

    fn toggle(self) -> Self {
        match self {
            TaskField::Title => TaskField::Description,
            TaskField::Description => TaskField::Title,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    EditMeta(MetaField),
    EditTask(TaskField),
    ConfirmReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// What the event loop must do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// Hand the terminal to `$EDITOR` for the description of this task
    EditDescription(usize),
}

impl ReportOperations for App {
    fn report(&self) -> &ReportState {
        &self.report
    }

    fn report_mut(&mut self) -> &mut ReportState {
        &mut self.report
    }

    fn default_author(&self) -> String {
        self.store.default_author().to_string()
    }
}

impl App {
    /// Loads the stored report. An unreadable file leaves the app on a fresh
    /// report with saving disabled, so the file is not overwritten.
    pub async fn load(store: StateStore) -> Self {
        let (report, save_enabled, status) = match store.load().await {
            Ok(report) => (report, true, None),
            Err(e) => {
                tracing::error!(
                    "Failed to load report from {}: {}",
                    store.path().display(),
                    e
                );
                let message = format!(
                    "Lecture de {} impossible ({}), enregistrement désactivé",
                    store.path().display(),
                    e
                );
                (
                    ReportState::fresh(date::today(), store.default_author()),
                    false,
                    Some(StatusMessage::error(message)),
                )
            }
        };

        let mut app = Self {
            should_quit: false,
            mode: AppMode::Normal,
            focus: Focus::Meta,
            input: InputState::new(),
            report,
            meta_selection: SelectionState::new(),
            task_selection: SelectionState::new(),
            task_field: TaskField::Title,
            preview: Vec::new(),
            preview_scroll: 0,
            status,
            store,
            save_enabled,
            clipboard: Box::new(SystemClipboard::new()),
        };
        app.meta_selection.set(Some(0));
        app.task_selection.clamp(app.report.task_count());
        app.update_preview();
        app
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardBackend>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn save_enabled(&self) -> bool {
        self.save_enabled
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn selected_meta_field(&self) -> MetaField {
        let idx = self.meta_selection.get().unwrap_or(0);
        MetaField::ALL[idx.min(MetaField::ALL.len() - 1)]
    }

    /// Rebuilds the preview pane from a freshly rendered fragment.
    pub fn update_preview(&mut self) {
        let markup = render_report(&self.report);
        self.preview = preview_lines(&markup);
    }

    /// Saves the whole report and refreshes the preview. Called after every
    /// mutation.
    async fn persist(&mut self) {
        if self.save_enabled {
            if let Err(e) = self.store.save(&self.report).await {
                tracing::error!("Failed to save report: {}", e);
                self.status = Some(StatusMessage::error(format!("Échec de l'enregistrement : {}", e)));
            }
        }
        self.update_preview();
    }

    pub async fn add_task_row(&mut self) {
        match ReportOperations::add_task(self, TaskUpdate::default()) {
            Ok(index) => {
                tracing::info!("Added task #{}", index + 1);
                self.focus = Focus::Tasks;
                self.task_selection.set(Some(index));
                self.task_field = TaskField::Title;
                self.persist().await;
                self.begin_edit();
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    pub async fn remove_selected_task(&mut self) {
        let Some(index) = self.task_selection.get() else {
            return;
        };
        match ReportOperations::remove_task(self, index) {
            Ok(task) => {
                tracing::info!("Removed task #{} ({:?})", index + 1, task.title);
                self.task_selection.clamp(self.report.task_count());
                self.persist().await;
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    pub async fn apply_description(&mut self, index: usize, description: String) {
        let description = description.trim_end_matches(['\n', '\r']).to_string();
        match ReportOperations::update_task(self, index, TaskUpdate::description(description)) {
            Ok(_) => self.persist().await,
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    pub fn copy_to_clipboard(&mut self) {
        self.update_preview();
        self.status = Some(match copy_report(self.clipboard.as_mut(), &self.report) {
            Ok(CopyOutcome::Rich) => StatusMessage::info("Rapport copié (HTML)"),
            Ok(CopyOutcome::PlainText) => StatusMessage::info("Rapport copié (texte brut)"),
            Err(e) => {
                tracing::error!("Failed to copy report: {}", e);
                StatusMessage::error(format!("Copie impossible : {}", e))
            }
        });
    }

    pub async fn reset(&mut self) {
        match self.reset_report() {
            Ok(()) => {
                self.task_selection.clear();
                self.focus = Focus::Meta;
                self.status = Some(StatusMessage::info("Rapport réinitialisé"));
                self.persist().await;
            }
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn begin_edit(&mut self) {
        match self.focus {
            Focus::Meta => {
                let field = self.selected_meta_field();
                self.input.set(field.value(&self.report).to_string());
                self.mode = AppMode::EditMeta(field);
            }
            Focus::Tasks => {
                let Some(task) = self.task_selection.get().and_then(|i| self.report.task(i)) else {
                    return;
                };
                let value = match self.task_field {
                    TaskField::Title => task.title.clone(),
                    TaskField::Description => task.description.clone(),
                };
                self.input.set(value);
                self.mode = AppMode::EditTask(self.task_field);
            }
        }
    }

    async fn commit_edit(&mut self) {
        let value = self.input.take();
        let result = match self.mode {
            AppMode::EditMeta(field) => self.update_meta(field.update(value)).map(|_| ()),
            AppMode::EditTask(field) => match self.task_selection.get() {
                Some(index) => {
                    let update = match field {
                        TaskField::Title => TaskUpdate::title(value),
                        TaskField::Description => TaskUpdate::description(value),
                    };
                    ReportOperations::update_task(self, index, update).map(|_| ())
                }
                None => Ok(()),
            },
            AppMode::Normal | AppMode::ConfirmReset => Ok(()),
        };
        self.mode = AppMode::Normal;
        match result {
            Ok(()) => self.persist().await,
            Err(e) => self.status = Some(StatusMessage::error(e.to_string())),
        }
    }

    fn move_selection(&mut self, down: bool) {
        match (self.focus, down) {
            (Focus::Meta, true) => self.meta_selection.next(MetaField::ALL.len()),
            (Focus::Meta, false) => self.meta_selection.prev(),
            (Focus::Tasks, true) => self.task_selection.next(self.report.task_count()),
            (Focus::Tasks, false) => {
                if self.report.task_count() > 0 {
                    self.task_selection.prev();
                }
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Meta if self.report.task_count() > 0 => {
                self.task_selection.clamp(self.report.task_count());
                Focus::Tasks
            }
            Focus::Meta => Focus::Meta,
            Focus::Tasks => Focus::Meta,
        };
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return KeyOutcome::Handled;
        }

        match self.mode {
            AppMode::EditMeta(_) | AppMode::EditTask(_) => {
                let multiline = self.mode == AppMode::EditTask(TaskField::Description);
                match handle_dialog_input(&mut self.input, key, multiline) {
                    DialogAction::Confirm => self.commit_edit().await,
                    DialogAction::Cancel => {
                        self.input.clear();
                        self.mode = AppMode::Normal;
                    }
                    DialogAction::None => {}
                }
            }
            AppMode::ConfirmReset => {
                match key.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.reset().await,
                    _ => {}
                }
                if self.mode == AppMode::ConfirmReset {
                    self.mode = AppMode::Normal;
                }
            }
            AppMode::Normal => return self.handle_normal_key(key).await,
        }
        KeyOutcome::Handled
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) -> KeyOutcome {
        self.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(true),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(false),
            KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left | KeyCode::Right => {
                if self.focus == Focus::Tasks {
                    self.task_field = self.task_field.toggle();
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char('E') => {
                if let Some(index) = self.task_selection.get() {
                    if self.focus == Focus::Tasks && index < self.report.task_count() {
                        return KeyOutcome::EditDescription(index);
                    }
                }
            }
            KeyCode::Char('n') => self.add_task_row().await,
            KeyCode::Char('d') | KeyCode::Delete => {
                if self.focus == Focus::Tasks {
                    self.remove_selected_task().await;
                }
            }
            KeyCode::Char('g') => {
                self.update_preview();
                self.status = Some(StatusMessage::info("Aperçu régénéré"));
            }
            KeyCode::Char('y') => self.copy_to_clipboard(),
            KeyCode::Char('R') => self.mode = AppMode::ConfirmReset,
            KeyCode::PageDown => {
                self.preview_scroll = self.preview_scroll.saturating_add(PREVIEW_SCROLL_STEP)
            }
            KeyCode::PageUp => {
                self.preview_scroll = self.preview_scroll.saturating_sub(PREVIEW_SCROLL_STEP)
            }
            _ => {}
        }
        KeyOutcome::Handled
    }

    async fn edit_description_externally(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &EventHandler,
        index: usize,
    ) {
        let current = self
            .report
            .task(index)
            .map(|task| task.description.clone())
            .unwrap_or_default();
        match edit_in_external_editor(terminal, events, &current) {
            Ok(Some(content)) => self.apply_description(index, content).await,
            Ok(None) => {}
            Err(e) => {
                tracing::error!("Failed to edit description: {}", e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    pub async fn run(&mut self) -> RapportResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> RapportResult<()> {
        while !self.should_quit {
            let mut events = EventHandler::default();

            loop {
                terminal.draw(|frame| ui::render(self, frame))?;

                match events.next().await {
                    Some(Event::Key(key)) => {
                        if let KeyOutcome::EditDescription(index) = self.handle_key(key).await {
                            self.edit_description_externally(terminal, &events, index)
                                .await;
                            // The handler was stopped for the editor
                            break;
                        }
                    }
                    Some(Event::Resize) | Some(Event::Tick) => {}
                    None => self.quit(),
                }

                if self.should_quit {
                    break;
                }
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
