//! Startup banner.

use colored::Colorize;

use crate::config::Config;

/// Startup lines: name and version, listing host, WHOIS timeout, credential mode.
pub fn banner_lines(config: &Config) -> Vec<String> {
    let mode = if config.encrypt_credentials {
        format!("encrypted ({})", config.key_file.display())
    } else {
        "plaintext".to_string()
    };

    vec![
        format!(
            "{} {}",
            "nrd_whois".bold().cyan(),
            env!("CARGO_PKG_VERSION").dimmed()
        ),
        format!("  {} {}", "listing:".bold(), config.listing_host),
        format!(
            "  {} whois-service, {}s per domain",
            "whois:".bold(),
            config.whois_timeout_seconds
        ),
        format!(
            "  {} {} [{}]",
            "credentials:".bold(),
            config.credentials.display(),
            mode
        ),
    ]
}

pub fn print_banner(config: &Config) {
    for line in banner_lines(config) {
        println!("{line}");
    }
}
