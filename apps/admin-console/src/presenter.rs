//! Presenter - wraps shell results into the envelopes the frontend renders.

use blogdesk_core::shell::{ActionOutcome, AdminShell, View};
use blogdesk_core::{DomainError, Section};
use blogdesk_shared::{ConsoleFrame, ConsoleResponse, FailureResponse, NavigationEntry};
use serde::Serialize;

/// Either a success envelope or a failure envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
    Ok(ConsoleResponse<T>),
    Failed(FailureResponse),
}

/// Conversion from domain errors.
pub fn failure(err: &DomainError) -> FailureResponse {
    let detail = err.to_string();
    match err {
        DomainError::NotFound { .. } => FailureResponse::not_found(detail),
        DomainError::Reference { .. } => FailureResponse::unknown_reference(detail),
        DomainError::Validation(_) => FailureResponse::validation(detail),
        DomainError::InUse { .. } => FailureResponse::conflict(detail),
    }
}

pub fn reply(result: Result<ActionOutcome, DomainError>) -> Reply<ActionOutcome> {
    match result {
        Ok(outcome) => Reply::Ok(ConsoleResponse::ok(outcome)),
        Err(err) => Reply::Failed(failure(&err)),
    }
}

fn label(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "Dashboard",
        Section::Posts => "Posts",
        Section::Categories => "Categories",
        Section::Users => "Users",
        Section::Settings => "Settings",
    }
}

/// Sidebar and active view for the shell's current state.
pub fn frame(shell: &AdminShell) -> ConsoleFrame<View> {
    let current = shell.current_section();
    let sidebar = Section::ALL
        .into_iter()
        .map(|section| NavigationEntry {
            key: section.to_string(),
            label: label(section).to_string(),
            active: section == current,
        })
        .collect();

    ConsoleFrame {
        site_title: shell.store().settings().site_title.clone(),
        sidebar,
        view: shell.view(),
    }
}
