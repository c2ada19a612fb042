//! JSON file snapshot store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use blogdesk_core::domain::Snapshot;
use blogdesk_core::ports::{PersistenceError, SnapshotStore};

/// Keeps the snapshot as pretty-printed JSON in a single file.
///
/// Saves write a sibling `.tmp` file first and rename it over the target.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<Snapshot, PersistenceError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "No snapshot file yet, starting empty");
                return Ok(Snapshot::default());
            }
            Err(e) => return Err(PersistenceError::Io(e.to_string())),
        };

        let snapshot: Snapshot =
            serde_json::from_str(&raw).map_err(|e| PersistenceError::Serialization(e.to_string()))?;
        tracing::debug!(
            path = %self.path.display(),
            posts = snapshot.posts.len(),
            "Snapshot loaded"
        );
        Ok(snapshot)
    }

    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError> {
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| PersistenceError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::Io(e.to_string()))?;
        }

        let staging = self.staging_path();
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| PersistenceError::Io(e.to_string()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| PersistenceError::Io(e.to_string()))?;

        tracing::info!(path = %self.path.display(), posts = snapshot.posts.len(), "Snapshot saved");
        Ok(())
    }
}
