//! Data Transfer Objects - the frame the console renders around every view.

use serde::{Deserialize, Serialize};

/// One sidebar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Machine name of the section (`dashboard`, `posts`, ...).
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// Sidebar plus the active section's data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleFrame<V> {
    pub site_title: String,
    pub sidebar: Vec<NavigationEntry>,
    pub view: V,
}

impl<V> ConsoleFrame<V> {
    pub fn active_key(&self) -> Option<&str> {
        self.sidebar
            .iter()
            .find(|entry| entry.active)
            .map(|entry| entry.key.as_str())
    }
}
