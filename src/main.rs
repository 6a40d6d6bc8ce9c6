//! mo - Set console window and buffer sizes, QuickEdit and Insert modes.
//!
//! With no arguments the current console status is shown.

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use mo_config::Config;
use mo_engine::App;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "MO_LOG";

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so diagnostic lines on stdout stay untouched
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Config::load().context("failed to load configuration")?;
    debug!(policy = %config.column_policy, "configuration loaded");
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut surface = mo_console::platform_surface();

    let app = App::new(config);
    let outcome = app.run(&args, &mut surface, io::stdout().lock(), io::stderr().lock())?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
