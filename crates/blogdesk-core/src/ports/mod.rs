//! Ports - trait definitions for external collaborators.
//! Infrastructure adapters implement these.

mod persistence;
mod view_tracking;

pub use persistence::{PersistenceError, SnapshotStore};
pub use view_tracking::{TrackingError, ViewTracker};
