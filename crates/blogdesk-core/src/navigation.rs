//! Navigation controller - which functional area of the console is active.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the five navigable areas of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Posts,
    Categories,
    Users,
    Settings,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Posts,
        Section::Categories,
        Section::Users,
        Section::Settings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Posts => "posts",
            Section::Categories => "categories",
            Section::Users => "users",
            Section::Settings => "settings",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::Validation(format!("unknown section '{wanted}'")))
    }
}

/// Marks the navigation state an asynchronous fetch was started in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    section: Section,
    generation: u64,
}

impl FetchTicket {
    pub fn section(&self) -> Section {
        self.section
    }
}

/// Per-session section selector. Any section is reachable from any other.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    current: Section,
    generation: u64,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    /// Move to `section`. Fetches nothing; callers pull data afterwards.
    pub fn select_section(&mut self, section: Section) {
        let previous = self.current;
        self.current = section;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(from = %previous, to = %section, "Section selected");
    }

    pub fn ticket(&self) -> FetchTicket {
        FetchTicket {
            section: self.current,
            generation: self.generation,
        }
    }

    /// Whether a result fetched under `ticket` may still be applied.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.section == self.current
    }
}
