use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rapport_core::RapportResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Version of the on-disk envelope written by this crate.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// Metadata for persistence operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the process that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(instance_id: Uuid) -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}

/// Serialized report state plus the metadata it was saved with
#[derive(Debug, Clone)]
pub struct StoreSnapshot {
    /// Raw JSON bytes of the `{meta, tasks}` document
    pub data: Vec<u8>,
    pub metadata: PersistenceMetadata,
}

/// Backend-agnostic key-value slot holding one report
#[async_trait]
pub trait PersistenceStore: Send + Sync {
    /// Save a snapshot, replacing whatever was stored
    async fn save(&self, snapshot: StoreSnapshot) -> RapportResult<PersistenceMetadata>;

    /// Load the stored snapshot
    async fn load(&self) -> RapportResult<StoreSnapshot>;

    /// Whether anything has been stored yet
    async fn exists(&self) -> bool;

    /// Location of the backing file
    fn path(&self) -> &Path;
}

/// Serialization strategy for domain values
pub trait Serializer<T: Send + Sync>: Send + Sync {
    fn serialize(&self, data: &T) -> RapportResult<Vec<u8>>;

    fn deserialize(&self, bytes: &[u8]) -> RapportResult<T>;
}
