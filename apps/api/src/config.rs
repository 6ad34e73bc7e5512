use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub rules_dir: PathBuf,
    pub rules_ttl: Duration,
    /// Emit a trace event for every term match.
    pub trace_matching: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            rules_dir: PathBuf::from("rules"),
            rules_ttl: Duration::from_secs(60),
            trace_matching: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        Ok(Config {
            port: match get("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            rules_dir: get("FITCHECK_RULES_DIR").map_or(defaults.rules_dir, PathBuf::from),
            rules_ttl: match get("FITCHECK_RULES_TTL_SECS") {
                Some(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("FITCHECK_RULES_TTL_SECS must be a whole number of seconds")?,
                ),
                None => defaults.rules_ttl,
            },
            trace_matching: match get("FITCHECK_TRACE_MATCHING") {
                Some(v) => parse_bool(&v).with_context(|| {
                    format!("FITCHECK_TRACE_MATCHING must be true or false, got '{v}'")
                })?,
                None => defaults.trace_matching,
            },
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
