//! # Blogdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `blogdesk-core`:
//! snapshot persistence and view tracking, plus the demo seed data.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory adapters only
//! - `json-file` - Snapshot persistence to a JSON file

pub mod persistence;
pub mod seed;
pub mod tracking;

// Re-exports - In-Memory
pub use persistence::InMemorySnapshotStore;
pub use tracking::{FixedViewTracker, InMemoryViewTracker};

#[cfg(feature = "json-file")]
pub use persistence::JsonFileSnapshotStore;
