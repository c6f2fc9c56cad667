//! Load, save and reset of the one persisted report.

use crate::serialization::JsonSerializer;
use crate::store::JsonFileStore;
use crate::traits::{PersistenceMetadata, PersistenceStore, Serializer, StoreSnapshot};
use chrono::NaiveDate;
use rapport_core::RapportResult;
use rapport_domain::{date, ReportState};
use std::path::Path;
use uuid::Uuid;

/// Persists a [`ReportState`] wholesale through a [`PersistenceStore`].
pub struct StateStore<S: PersistenceStore = JsonFileStore> {
    store: S,
    serializer: JsonSerializer,
    instance_id: Uuid,
    default_author: String,
}

impl StateStore<JsonFileStore> {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let store = JsonFileStore::new(path);
        let instance_id = store.instance_id();
        Self::with_store(store, instance_id)
    }
}

impl<S: PersistenceStore> StateStore<S> {
    pub fn with_store(store: S, instance_id: Uuid) -> Self {
        Self {
            store,
            serializer: JsonSerializer,
            instance_id,
            default_author: String::new(),
        }
    }

    /// Author used for a report that has never been saved and on reset.
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    pub async fn load(&self) -> RapportResult<ReportState> {
        self.load_as_of(date::today()).await
    }

    /// Reads the stored report, or a fresh one dated `today` when nothing is
    /// stored. Missing fields are filled the same way in both cases.
    pub async fn load_as_of(&self, today: NaiveDate) -> RapportResult<ReportState> {
        if !self.store.exists().await {
            tracing::info!(
                "No report at {}, starting a new one",
                self.store.path().display()
            );
            return Ok(ReportState::fresh(today, self.default_author.as_str()));
        }

        let snapshot = self.store.load().await?;
        let mut state: ReportState = self.serializer.deserialize(&snapshot.data)?;
        state.normalize(today);
        Ok(state)
    }

    pub async fn save(&self, state: &ReportState) -> RapportResult<PersistenceMetadata> {
        let snapshot = StoreSnapshot {
            data: self.serializer.serialize(state)?,
            metadata: PersistenceMetadata::new(self.instance_id),
        };
        self.store.save(snapshot).await
    }

    pub async fn reset(&self, state: &mut ReportState) -> RapportResult<PersistenceMetadata> {
        self.reset_as_of(state, date::today()).await
    }

    /// Replaces `state` with an empty report dated `today` and saves it.
    pub async fn reset_as_of(
        &self,
        state: &mut ReportState,
        today: NaiveDate,
    ) -> RapportResult<PersistenceMetadata> {
        state.reset(today, self.default_author.as_str());
        tracing::info!("Report reset to {}", state.meta.date);
        self.save(state).await
    }
}
