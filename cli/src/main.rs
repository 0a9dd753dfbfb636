mod config;
mod prompt;
mod report;

use std::io;

use accounts_core::{AccountsClient, UreqTransport};
use anyhow::{Context, Result};
use clap::Parser;
use config::{Args, LogLevel};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber unless logging is off and RUST_LOG is unset.
fn setup_logging(level: LogLevel) {
    let default = level.to_level_filter();
    if default == LevelFilter::OFF && std::env::var_os(EnvFilter::DEFAULT_ENV).is_none() {
        return;
    }

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    tracing::info!("log level: {:?}", level);
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.log_level);

    let user_id = match args.user_id {
        Some(id) => id,
        None => prompt::prompt_user_id(&mut io::stdin().lock(), &mut io::stdout())?,
    };

    let client = AccountsClient::with_transport(&args.base_url, UreqTransport::new(args.timeout()))
        .with_strict_ownership(args.strict);
    tracing::info!("using {}", client.base_url());

    let summary = client
        .fetch_summary(user_id)
        .with_context(|| format!("Failed to fetch user {user_id} and their accounts"))?;
    report::render_report(&mut io::stdout().lock(), &summary).context("Failed to write report")?;
    Ok(())
}
