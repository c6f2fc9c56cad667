use rapport_core::RapportResult;
use rapport_domain::{ReportOperations, ReportState};
use rapport_persistence::{PersistenceMetadata, StateStore};

/// One-shot command context: the report loaded from disk plus the store it
/// came from.
pub struct CliContext {
    pub report: ReportState,
    store: StateStore,
}

impl CliContext {
    pub async fn load(store: StateStore) -> RapportResult<Self> {
        let report = store.load().await?;
        tracing::debug!(
            "Loaded report from {} ({} tasks)",
            store.path().display(),
            report.task_count()
        );
        Ok(Self { report, store })
    }

    pub async fn save(&self) -> RapportResult<PersistenceMetadata> {
        self.store.save(&self.report).await
    }
}

impl ReportOperations for CliContext {
    fn report(&self) -> &ReportState {
        &self.report
    }

    fn report_mut(&mut self) -> &mut ReportState {
        &mut self.report
    }

    fn default_author(&self) -> String {
        self.store.default_author().to_string()
    }
}
