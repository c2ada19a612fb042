//! View-tracking sources.

mod fixed;
mod memory;

pub use fixed::FixedViewTracker;
pub use memory::InMemoryViewTracker;
