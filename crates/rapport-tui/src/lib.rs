pub mod app;
pub mod clipboard;
pub mod components;
pub mod dialog;
pub mod editor;
pub mod events;
pub mod preview;
pub mod theme;
pub mod ui;

pub use app::App;
pub use clipboard::{copy_report, ClipboardBackend, CopyOutcome, SystemClipboard};
