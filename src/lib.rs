//! nrd_whois library: newly-registered-domain discovery with WHOIS enrichment
//!
//! This library collects the domains a public listing site reports as newly
//! registered on given days, optionally filters them by keyword, looks each
//! one up over WHOIS and writes the results to an `.xlsx` report. The binary
//! exposes the whole flow as a Telegram bot conversation.
//!
//! # Example
//!
//! ```no_run
//! use nrd_whois::initialization::init_context;
//! use nrd_whois::listing::parse_date_input;
//! use nrd_whois::{export::export_report, run_pipeline, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let ctx = init_context(&config).await?;
//! let dates = parse_date_input("20240115", config.max_days)?;
//!
//! let keywords = vec!["shop".to_string()];
//! let outcome = run_pipeline(&ctx, &dates, Some(keywords.as_slice())).await;
//! if let Some(report) = export_report(&outcome.records)? {
//!     println!("{} rows in {}", report.rows(), report.path().display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod bot;
pub mod config;
pub mod conversation;
pub mod credentials;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod listing;
pub mod pipeline;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use pipeline::{run_pipeline, PipelineContext, PipelineOutcome};
