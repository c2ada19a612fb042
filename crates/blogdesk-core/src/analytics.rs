//! Analytics aggregator - pure derivations for the dashboard.
//!
//! Nothing here keeps state: identical inputs always yield identical summaries.

use std::cmp::Reverse;
use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, CategoryDistributionEntry, Post, Totals, TrafficSample};
use crate::store::RecordStore;

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Default length of a date-based reporting window.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Ordered set of buckets a traffic summary is reported over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    buckets: Vec<String>,
}

impl ReportingWindow {
    /// Monday through Sunday.
    pub fn weekdays() -> Self {
        Self::from_labels(WEEKDAY_LABELS)
    }

    /// The `days` calendar days ending at `end`, oldest first, labelled `YYYY-MM-DD`.
    pub fn trailing_days(end: NaiveDate, days: u32) -> Self {
        let buckets = (0..u64::from(days))
            .rev()
            .filter_map(|offset| end.checked_sub_days(Days::new(offset)))
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect();
        Self { buckets }
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            buckets: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn buckets(&self) -> &[String] {
        &self.buckets
    }
}

impl Default for ReportingWindow {
    fn default() -> Self {
        Self::weekdays()
    }
}

/// Shape raw tracker samples into one sample per window bucket, in window order.
///
/// Samples sharing a label are summed, buckets without samples report zero and
/// samples outside the window are dropped.
pub fn traffic_summary(raw: &[TrafficSample], window: &ReportingWindow) -> Vec<TrafficSample> {
    let mut views: HashMap<&str, u64> = HashMap::new();
    for sample in raw {
        let total = views.entry(sample.label.as_str()).or_insert(0);
        *total = total.saturating_add(sample.view_count);
    }

    window
        .buckets
        .iter()
        .map(|label| TrafficSample {
            label: label.clone(),
            view_count: views.get(label.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Count posts per category, including empty categories.
///
/// Ordered by count descending, then category name ascending ignoring case.
pub fn category_distribution(
    posts: &[Post],
    categories: &[Category],
) -> Vec<CategoryDistributionEntry> {
    let mut counts: HashMap<Uuid, u64> = HashMap::new();
    for post in posts {
        *counts.entry(post.category_id).or_insert(0) += 1;
    }

    let mut entries: Vec<CategoryDistributionEntry> = categories
        .iter()
        .map(|category| CategoryDistributionEntry {
            category_id: category.id,
            category_name: category.name.clone(),
            count: counts.get(&category.id).copied().unwrap_or(0),
        })
        .collect();

    entries.sort_by_cached_key(|entry| {
        (
            Reverse(entry.count),
            Category::name_key(&entry.category_name),
            entry.category_name.clone(),
        )
    });
    entries
}

pub fn totals(store: &RecordStore) -> Totals {
    Totals {
        posts: store.posts().len() as u64,
        categories: store.categories().len() as u64,
        users: store.users().len() as u64,
    }
}
