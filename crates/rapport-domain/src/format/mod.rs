//! Report rendering.
//!
//! [`render_report`] turns a [`crate::ReportState`] into a self-contained
//! HTML fragment with inline styles, suitable for pasting into a mail client
//! or a wiki. [`render_plain_text`] derives the text alternative placed next
//! to it on the clipboard.

pub mod escape;
pub mod html;
pub mod markup;
pub mod plain;

pub use escape::{escape_html, unescape_html};
pub use html::render_report;
pub use markup::{tokenize, Token};
pub use plain::render_plain_text;

/// Output flavour for a rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Html,
    Text,
}
