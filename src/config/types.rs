//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CREDENTIALS_PATH, DEFAULT_KEY_PATH, DEFAULT_LISTING_HOST, DEFAULT_USER_AGENT,
    HTTP_TIMEOUT_SECS, MAX_DAYS_PER_RANGE, MAX_PAGES_PER_SOURCE, WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Bot configuration.
///
/// Parsed from the command line (with environment fallbacks) by the binary,
/// or built programmatically with `..Default::default()`.
#[derive(Debug, Clone, Parser)]
#[command(name = "nrd_whois", version, about)]
pub struct Config {
    /// Log level
    #[arg(long, value_enum, default_value = "info", env = "NRD_LOG_LEVEL")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain", env = "NRD_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Credentials file holding the bot token and the operator user ID
    #[arg(long, default_value = DEFAULT_CREDENTIALS_PATH, env = "NRD_CREDENTIALS")]
    pub credentials: PathBuf,

    /// Key file used when credentials are encrypted at rest
    #[arg(long, default_value = DEFAULT_KEY_PATH, env = "NRD_KEY_FILE")]
    pub key_file: PathBuf,

    /// Store and read the credentials file encrypted (AES-256-GCM)
    #[arg(long, env = "NRD_ENCRYPT_CREDENTIALS")]
    pub encrypt_credentials: bool,

    /// Base URL of the newly-registered-domains listing site
    #[arg(long, default_value = DEFAULT_LISTING_HOST, env = "NRD_LISTING_HOST")]
    pub listing_host: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Per-domain WHOIS timeout in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_seconds: u64,

    /// Maximum number of days accepted in a date range
    #[arg(
        long,
        default_value_t = MAX_DAYS_PER_RANGE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_days: usize,

    /// Maximum number of pages fetched per listing source
    #[arg(
        long,
        default_value_t = MAX_PAGES_PER_SOURCE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_pages: u32,
}

impl Config {
    /// HTTP request timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Per-domain WHOIS timeout as a `Duration`.
    pub fn whois_timeout(&self) -> Duration {
        Duration::from_secs(self.whois_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            credentials: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            key_file: PathBuf::from(DEFAULT_KEY_PATH),
            encrypt_credentials: false,
            listing_host: DEFAULT_LISTING_HOST.to_string(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            whois_timeout_seconds: WHOIS_TIMEOUT_SECS,
            max_days: MAX_DAYS_PER_RANGE,
            max_pages: MAX_PAGES_PER_SOURCE,
        }
    }
}
