use async_trait::async_trait;

use crate::domain::TrafficSample;

/// View-tracking collaborator - the source of raw traffic counts.
#[async_trait]
pub trait ViewTracker: Send + Sync {
    /// Fetch raw `{label, view_count}` samples. Labels may repeat.
    async fn fetch_samples(&self) -> Result<Vec<TrafficSample>, TrackingError>;
}

/// View-tracking errors.
#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("Tracker unavailable: {0}")]
    Unavailable(String),
}
