//! Console state - the collaborators a session talks to.

use std::sync::Arc;

use blogdesk_core::ports::{SnapshotStore, ViewTracker};
use blogdesk_infra::persistence::InMemorySnapshotStore;
use blogdesk_infra::seed;
use blogdesk_infra::tracking::FixedViewTracker;

#[cfg(feature = "json-file")]
use blogdesk_infra::persistence::JsonFileSnapshotStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct ConsoleState {
    pub persistence: Arc<dyn SnapshotStore>,
    pub tracker: Arc<dyn ViewTracker>,
}

impl ConsoleState {
    /// Build the state with the appropriate adapters.
    pub fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "json-file")]
        let persistence: Arc<dyn SnapshotStore> = match &config.data_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using JSON snapshot file");
                Arc::new(JsonFileSnapshotStore::new(path.clone()))
            }
            None => {
                tracing::warn!("BLOGDESK_DATA_FILE not set. Changes will not outlive this run.");
                Arc::new(InMemorySnapshotStore::new())
            }
        };

        #[cfg(not(feature = "json-file"))]
        let persistence: Arc<dyn SnapshotStore> = {
            if config.data_file.is_some() {
                tracing::warn!("Built without json-file feature - ignoring BLOGDESK_DATA_FILE");
            }
            Arc::new(InMemorySnapshotStore::new())
        };

        // No view-tracking service is wired in yet; serve the demo week.
        let tracker: Arc<dyn ViewTracker> = Arc::new(FixedViewTracker::sample_week());

        Self {
            persistence,
            tracker,
        }
    }

    /// Save the demo records if the store holds nothing yet.
    pub async fn seed_if_empty(&self) -> anyhow::Result<bool> {
        if !self.persistence.load().await?.is_empty() {
            return Ok(false);
        }
        self.persistence.save(&seed::demo_snapshot()?).await?;
        tracing::info!("Seeded demo records");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdesk_core::Section;
    use blogdesk_core::analytics::ReportingWindow;

    fn in_memory_config() -> AppConfig {
        AppConfig {
            data_file: None,
            section: Section::Dashboard,
            actions_file: None,
            traffic_window: ReportingWindow::weekdays(),
            seed_demo: true,
        }
    }

    #[tokio::test]
    async fn test_seed_only_once() {
        let state = ConsoleState::new(&in_memory_config());
        assert!(state.seed_if_empty().await.unwrap());
        assert!(!state.seed_if_empty().await.unwrap());
        assert_eq!(state.persistence.load().await.unwrap().posts.len(), 6);
    }
}
