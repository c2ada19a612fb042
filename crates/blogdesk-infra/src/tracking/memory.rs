//! In-memory view tracker.
//!
//! Accumulates view counts per label within a single process.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blogdesk_core::domain::TrafficSample;
use blogdesk_core::ports::{TrackingError, ViewTracker};

/// Counts views per bucket label, in first-seen order.
pub struct InMemoryViewTracker {
    samples: RwLock<Vec<TrafficSample>>,
}

impl InMemoryViewTracker {
    pub fn new() -> Self {
        Self {
            samples: RwLock::new(Vec::new()),
        }
    }

    /// Add `views` to the bucket labelled `label`.
    pub async fn record_view(&self, label: &str, views: u64) {
        let mut samples = self.samples.write().await;
        match samples.iter_mut().find(|s| s.label == label) {
            Some(sample) => sample.view_count = sample.view_count.saturating_add(views),
            None => samples.push(TrafficSample::new(label, views)),
        }
        tracing::trace!(label = %label, views, "View recorded");
    }

    pub async fn reset(&self) {
        self.samples.write().await.clear();
    }
}

impl Default for InMemoryViewTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ViewTracker for InMemoryViewTracker {
    async fn fetch_samples(&self) -> Result<Vec<TrafficSample>, TrackingError> {
        let samples = self.samples.read().await;
        Ok(samples.clone())
    }
}
