use crate::error::RapportError;

pub type RapportResult<T> = Result<T, RapportError>;
