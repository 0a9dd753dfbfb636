//! Command-line configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "https://sample-accounts-api.herokuapp.com";

/// Print a user's accounts and total balance
#[derive(Parser, Debug)]
#[command(name = "accounts", version, about, long_about = None)]
pub struct Args {
    /// User to look up; prompts on stdin when omitted
    pub user_id: Option<u64>,

    /// Base URL of the accounts API
    #[arg(long, env = "ACCOUNTS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Deadline for each request, in seconds
    #[arg(long, env = "ACCOUNTS_API_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    /// Fail if an account belongs to a different user
    #[arg(long)]
    pub strict: bool,

    /// Log level written to stderr (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "off")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
