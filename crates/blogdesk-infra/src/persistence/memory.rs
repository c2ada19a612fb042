//! In-memory snapshot store - used when no data file is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogdesk_core::domain::Snapshot;
use blogdesk_core::ports::{PersistenceError, SnapshotStore};

/// Holds the last saved snapshot in memory.
///
/// Note: Data is lost on process restart.
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Snapshot>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::with_snapshot(Snapshot::default())
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }
}

impl Default for InMemorySnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> Result<Snapshot, PersistenceError> {
        let snapshot = self.snapshot.read().await;
        Ok(snapshot.clone())
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let mut stored = self.snapshot.write().await;
        *stored = snapshot.clone();
        tracing::debug!(posts = snapshot.posts.len(), "Snapshot kept in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdesk_core::domain::Category;

    #[tokio::test]
    async fn test_empty_by_default() {
        let store = InMemorySnapshotStore::new();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces() {
        let store = InMemorySnapshotStore::new();
        let mut snapshot = Snapshot::default();
        snapshot.categories.push(Category::new("Tech".to_string()));

        store.save(&snapshot).await.unwrap();
        assert_eq!(store.load().await.unwrap(), snapshot);

        store.save(&Snapshot::default()).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
