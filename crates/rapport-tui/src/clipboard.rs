use rapport_core::{RapportError, RapportResult};
use rapport_domain::{render_plain_text, render_report, ReportState};
use std::io;

/// Where a copied report ends up.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardBackend {
    /// Places `html` on the clipboard with `plain` as its text alternative.
    fn write_rich(&mut self, html: &str, plain: &str) -> io::Result<()>;

    fn write_text(&mut self, plain: &str) -> io::Result<()>;
}

/// The system clipboard. The handle is opened on first use and kept so the
/// selection stays owned while the app runs.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> io::Result<&mut arboard::Clipboard> {
        if self.handle.is_none() {
            self.handle = Some(arboard::Clipboard::new().map_err(io::Error::other)?);
        }
        self.handle
            .as_mut()
            .ok_or_else(|| io::Error::other("clipboard unavailable"))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_rich(&mut self, html: &str, plain: &str) -> io::Result<()> {
        self.handle()?
            .set_html(html, Some(plain))
            .map_err(io::Error::other)
    }

    fn write_text(&mut self, plain: &str) -> io::Result<()> {
        self.handle()?.set_text(plain).map_err(io::Error::other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// HTML with a plain-text alternative
    Rich,
    /// Rich write failed; only text was copied
    PlainText,
}

/// Renders the report and copies it. A failed rich write falls back to plain
/// text once; if that fails too the error is returned.
pub fn copy_report(
    backend: &mut dyn ClipboardBackend,
    state: &ReportState,
) -> RapportResult<CopyOutcome> {
    let html = render_report(state);
    let text = render_plain_text(&html);

    match backend.write_rich(&html, &text) {
        Ok(()) => {
            tracing::info!("Copied report as HTML ({} bytes)", html.len());
            Ok(CopyOutcome::Rich)
        }
        Err(rich_err) => {
            tracing::warn!("Rich clipboard write failed: {}", rich_err);
            backend
                .write_text(&text)
                .map_err(|e| RapportError::Clipboard(e.to_string()))?;
            tracing::info!("Copied report as plain text ({} bytes)", text.len());
            Ok(CopyOutcome::PlainText)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::*;
    use rapport_domain::TaskEntry;

    fn report() -> ReportState {
        let mut state = ReportState::default();
        state.meta.title = "Rapport du mercredi".to_string();
        state.tasks.push(TaskEntry::with_text("Revue & tests", ""));
        state
    }

    #[test]
    fn test_rich_copy() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_write_rich()
            .withf(|html, plain| {
                html.contains("Revue &amp; tests")
                    && plain.contains("Revue & tests")
                    && !plain.contains('<')
            })
            .times(1)
            .returning(|_, _| Ok(()));
        backend.expect_write_text().never();

        assert_eq!(copy_report(&mut backend, &report()).unwrap(), CopyOutcome::Rich);
    }

    #[test]
    fn test_falls_back_to_plain_text() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_write_rich()
            .times(1)
            .returning(|_, _| Err(io::Error::other("no html support")));
        backend
            .expect_write_text()
            .with(function(|text: &str| text.contains("Rapport du mercredi")))
            .times(1)
            .returning(|_| Ok(()));

        assert_eq!(
            copy_report(&mut backend, &report()).unwrap(),
            CopyOutcome::PlainText
        );
    }

    #[test]
    fn test_plain_text_failure_propagates() {
        let mut backend = MockClipboardBackend::new();
        backend
            .expect_write_rich()
            .returning(|_, _| Err(io::Error::other("no html support")));
        backend
            .expect_write_text()
            .times(1)
            .returning(|_| Err(io::Error::other("no clipboard")));

        let err = copy_report(&mut backend, &report()).unwrap_err();
        assert!(matches!(err, RapportError::Clipboard(msg) if msg.contains("no clipboard")));
    }
}
