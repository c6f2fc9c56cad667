use crate::events::EventHandler;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::process::Command;

const FALLBACK_EDITORS: &[&str] = if cfg!(target_os = "windows") {
    &["nvim", "vim", "nano", "notepad"]
} else {
    &["nvim", "vim", "nano", "vi"]
};

fn which_editor() -> String {
    let which_cmd = if cfg!(target_os = "windows") {
        "where"
    } else {
        "which"
    };

    FALLBACK_EDITORS
        .iter()
        .find(|editor| {
            Command::new(which_cmd)
                .arg(editor)
                .output()
                .map(|output| output.status.success())
                .unwrap_or(false)
        })
        .map(|editor| editor.to_string())
        .unwrap_or_else(|| FALLBACK_EDITORS[FALLBACK_EDITORS.len() - 1].to_string())
}

/// Opens `$EDITOR` (or the first editor found) on a scratch file holding
/// `initial_content`. Returns the edited text, or `None` when the editor
/// exits with a failure status.
///
/// The event handler must be recreated by the caller afterwards: it is
/// stopped so the editor gets the keyboard.
pub fn edit_in_external_editor(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    event_handler: &EventHandler,
    initial_content: &str,
) -> io::Result<Option<String>> {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| which_editor());

    let mut scratch = tempfile::Builder::new()
        .prefix("rapport-description-")
        .suffix(".md")
        .tempfile()?;
    scratch.write_all(initial_content.as_bytes())?;
    scratch.flush()?;

    event_handler.stop();
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    io::stdout().flush()?;

    let status = Command::new(&editor).arg(scratch.path()).status();

    // Drop keys typed while the editor was closing
    while crossterm::event::poll(std::time::Duration::ZERO)? {
        let _ = crossterm::event::read()?;
    }
    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    terminal.clear()?;

    let status = status.map_err(|e| {
        tracing::error!("Failed to launch editor '{}': {}", editor, e);
        io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Editor '{}' not found. Please set $EDITOR environment variable.",
                editor
            ),
        )
    })?;

    if !status.success() {
        tracing::info!("Editor '{}' exited with {}, discarding edit", editor, status);
        return Ok(None);
    }
    std::fs::read_to_string(scratch.path()).map(Some)
}
