pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::AppConfig;
pub use error::RapportError;
pub use input::InputState;
pub use result::RapportResult;
pub use selection::SelectionState;
