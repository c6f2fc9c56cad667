use thiserror::Error;

#[derive(Error, Debug)]
pub enum RapportError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RapportError {
    pub fn task_not_found(index: usize, len: usize) -> Self {
        Self::NotFound(format!("task #{} (report has {} tasks)", index, len))
    }
}
