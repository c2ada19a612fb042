//! # Blogdesk Core
//!
//! The domain layer of the Blogdesk admin console: the record store, the
//! analytics aggregator, the post query engine, the navigation controller and
//! the admin shell that composes them.
//! Persistence and view tracking are reached only through the traits in [`ports`].

pub mod analytics;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod ports;
pub mod query;
pub mod shell;
pub mod store;

pub use error::{DomainError, SessionError};
pub use navigation::{NavigationController, Section};
pub use query::{PostFilters, PostQuery};
pub use shell::{Action, ActionOutcome, AdminShell, ShellConfig, View};
pub use store::RecordStore;
