use rapport_core::RapportResult;
use std::path::Path;
use tokio::fs;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating the parent directory if
    /// needed. A crash mid-write leaves the previous file intact.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> RapportResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Same directory as the target so the rename stays on one filesystem
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read all data from a file
    pub async fn read_all(path: &Path) -> RapportResult<Vec<u8>> {
        let data = fs::read(path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("state.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"{}");
    }

    #[tokio::test]
    async fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("state.json");

        AtomicWriter::write_atomic(&file_path, b"First")
            .await
            .unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second")
            .await
            .unwrap();

        let read_data = AtomicWriter::read_all(&file_path).await.unwrap();
        assert_eq!(read_data, b"Second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("easyrapport").join("state.json");

        AtomicWriter::write_atomic(&file_path, b"{}").await.unwrap();
        assert!(file_path.exists());
    }
}
