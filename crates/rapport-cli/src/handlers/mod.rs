pub mod meta;
pub mod report;
pub mod task;

/// Converts a 1-based position given on the command line to an index.
pub(crate) fn index_from_position(position: usize, len: usize) -> anyhow::Result<usize> {
    match position.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        _ => Err(rapport_core::RapportError::task_not_found(position, len).into()),
    }
}
