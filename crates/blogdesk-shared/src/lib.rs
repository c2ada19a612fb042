//! # Blogdesk Shared
//!
//! Envelopes handed to the presentation layer.
//! This crate has no dependency on the domain so a frontend can reuse it as-is.

pub mod dto;
pub mod response;

pub use dto::{ConsoleFrame, NavigationEntry};
pub use response::{ConsoleResponse, FailureResponse};
