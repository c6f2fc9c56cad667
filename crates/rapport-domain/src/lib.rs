pub mod date;
pub mod format;
pub mod meta;
pub mod operations;
pub mod state;
pub mod task;

pub use format::{escape_html, render_plain_text, render_report, ReportFormat};
pub use meta::ReportMeta;
pub use operations::{MetaUpdate, ReportOperations, TaskUpdate};
pub use state::ReportState;
pub use task::TaskEntry;
