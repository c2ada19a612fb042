//! # Blogdesk Admin Console
//!
//! Opens an admin session, replays an optional action script and prints the
//! active section's view as JSON. Logs go to stderr.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use blogdesk_core::{Action, AdminShell, ShellConfig};
use serde::Serialize;

mod config;
mod presenter;
mod state;
mod telemetry;

use config::AppConfig;
use state::ConsoleState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let state = ConsoleState::new(&config);
    if config.seed_demo {
        state.seed_if_empty().await?;
    }

    let shell_config = ShellConfig {
        traffic_window: config.traffic_window.clone(),
    };
    let mut shell = AdminShell::open(state.persistence.as_ref(), shell_config)
        .await
        .context("failed to open admin session")?;

    if let Err(e) = shell.refresh_traffic(state.tracker.as_ref()).await {
        tracing::warn!(error = %e, "Traffic unavailable, dashboard will show zeros");
    }

    shell.select_section(config.section);

    let mut out = std::io::stdout().lock();
    if let Some(path) = &config.actions_file {
        for action in load_actions(path).await? {
            let reply = presenter::reply(shell.dispatch(action));
            write_json(&mut out, &reply)?;
        }
    }

    write_json(&mut out, &presenter::frame(&shell))?;

    shell
        .close(state.persistence.as_ref())
        .await
        .context("failed to save admin session")?;
    Ok(())
}

async fn load_actions(path: &Path) -> anyhow::Result<Vec<Action>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read actions from {}", path.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid action script {}", path.display()))?;
    tracing::info!(count = actions.len(), "Replaying actions");
    Ok(actions)
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
