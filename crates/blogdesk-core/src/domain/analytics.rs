use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Views recorded for one reporting bucket (a weekday or an ISO date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub label: String,
    pub view_count: u64,
}

impl TrafficSample {
    pub fn new(label: impl Into<String>, view_count: u64) -> Self {
        Self {
            label: label.into(),
            view_count,
        }
    }
}

/// Number of posts filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistributionEntry {
    pub category_id: Uuid,
    pub category_name: String,
    pub count: u64,
}

/// Headline counters of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub posts: u64,
    pub categories: u64,
    pub users: u64,
}
