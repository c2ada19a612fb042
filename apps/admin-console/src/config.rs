//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use blogdesk_core::Section;
use blogdesk_core::analytics::{DEFAULT_WINDOW_DAYS, ReportingWindow};
use chrono::{NaiveDate, Utc};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON snapshot file. Without it the session lives in memory only.
    pub data_file: Option<PathBuf>,
    /// Section shown before any scripted action runs.
    pub section: Section,
    /// Optional JSON array of actions to replay.
    pub actions_file: Option<PathBuf>,
    pub traffic_window: ReportingWindow,
    /// Seed demo records when the loaded snapshot is empty.
    pub seed_demo: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), Utc::now().date_naive())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>, today: NaiveDate) -> Self {
        let section = match lookup("BLOGDESK_SECTION") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring BLOGDESK_SECTION");
                Section::default()
            }),
            None => Section::default(),
        };

        let traffic_window = lookup("BLOGDESK_TRAFFIC_WINDOW")
            .and_then(|raw| {
                let window = parse_traffic_window(&raw, today);
                if window.is_none() {
                    tracing::warn!(value = %raw, "Ignoring BLOGDESK_TRAFFIC_WINDOW");
                }
                window
            })
            .unwrap_or_default();

        Self {
            data_file: lookup("BLOGDESK_DATA_FILE").map(PathBuf::from),
            section,
            actions_file: lookup("BLOGDESK_ACTIONS_FILE").map(PathBuf::from),
            traffic_window,
            seed_demo: lookup("BLOGDESK_SEED_DEMO")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

/// Parse `week` or `days[:N]` into a reporting window ending `today`.
fn parse_traffic_window(raw: &str, today: NaiveDate) -> Option<ReportingWindow> {
    let raw = raw.trim().to_lowercase();
    if raw == "week" {
        return Some(ReportingWindow::weekdays());
    }
    if raw == "days" {
        return Some(ReportingWindow::trailing_days(today, DEFAULT_WINDOW_DAYS));
    }
    let days: u32 = raw.strip_prefix("days:")?.parse().ok()?;
    (days > 0).then(|| ReportingWindow::trailing_days(today, days))
}
