//! Fixed view tracker - serves a static set of samples.

use async_trait::async_trait;

use blogdesk_core::domain::TrafficSample;
use blogdesk_core::ports::{TrackingError, ViewTracker};

/// Tracker that always answers with the same samples.
#[derive(Debug, Clone, Default)]
pub struct FixedViewTracker {
    samples: Vec<TrafficSample>,
}

impl FixedViewTracker {
    pub fn new(samples: Vec<TrafficSample>) -> Self {
        Self { samples }
    }

    /// One week of weekday-labelled demo traffic.
    pub fn sample_week() -> Self {
        let samples = [
            ("Mon", 400),
            ("Tue", 300),
            ("Wed", 500),
            ("Thu", 200),
            ("Fri", 600),
            ("Sat", 700),
            ("Sun", 650),
        ]
        .into_iter()
        .map(|(label, views)| TrafficSample::new(label, views))
        .collect();
        Self { samples }
    }
}

#[async_trait]
impl ViewTracker for FixedViewTracker {
    async fn fetch_samples(&self) -> Result<Vec<TrafficSample>, TrackingError> {
        Ok(self.samples.clone())
    }
}
