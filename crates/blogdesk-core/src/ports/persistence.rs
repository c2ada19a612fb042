use async_trait::async_trait;

use crate::domain::Snapshot;

/// Persistence collaborator - loads the records at session start and saves them at the end.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the stored snapshot. An empty store yields an empty snapshot.
    async fn load(&self) -> Result<Snapshot, PersistenceError>;

    /// Replace the stored snapshot.
    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}

/// Persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
