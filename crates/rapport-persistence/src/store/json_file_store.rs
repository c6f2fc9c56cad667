use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{
    PersistenceMetadata, PersistenceStore, StoreSnapshot, CURRENT_FORMAT_VERSION,
};
use rapport_core::{RapportError, RapportResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file-based persistence store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// Wrapper written around the report document
#[derive(Debug, Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    metadata: PersistenceMetadata,
    data: serde_json::Value,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Accepts both the envelope and a bare `{meta, tasks}` document, the
    /// shape the report had before it was wrapped.
    fn unwrap_document(&self, value: serde_json::Value) -> RapportResult<StoreSnapshot> {
        let is_envelope = value.get("version").is_some() && value.get("data").is_some();
        if !is_envelope {
            tracing::info!(
                "No envelope in {}, reading it as a bare report document",
                self.path.display()
            );
            return Ok(StoreSnapshot {
                data: to_bytes(&value)?,
                metadata: PersistenceMetadata::new(self.instance_id),
            });
        }

        let envelope: JsonEnvelope = serde_json::from_value(value)
            .map_err(|e| RapportError::Serialization(e.to_string()))?;
        if envelope.version != CURRENT_FORMAT_VERSION {
            return Err(RapportError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(StoreSnapshot {
            data: to_bytes(&envelope.data)?,
            metadata: envelope.metadata,
        })
    }
}

fn to_bytes(value: &serde_json::Value) -> RapportResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| RapportError::Serialization(e.to_string()))
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> RapportResult<PersistenceMetadata> {
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let data: serde_json::Value = serde_json::from_slice(&snapshot.data)
            .map_err(|e| RapportError::Serialization(e.to_string()))?;
        let envelope = JsonEnvelope {
            version: CURRENT_FORMAT_VERSION,
            metadata: snapshot.metadata.clone(),
            data,
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| RapportError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(snapshot.metadata)
    }

    async fn load(&self) -> RapportResult<StoreSnapshot> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;
        let value: serde_json::Value = serde_json::from_slice(&file_bytes)
            .map_err(|e| RapportError::Serialization(e.to_string()))?;
        let snapshot = self.unwrap_document(value)?;

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
