//! Snapshot persistence - JSON file and in-memory fallback.

mod memory;

pub use memory::InMemorySnapshotStore;

#[cfg(feature = "json-file")]
mod json_file;
#[cfg(feature = "json-file")]
pub use json_file::JsonFileSnapshotStore;
