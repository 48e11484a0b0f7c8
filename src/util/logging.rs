//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; what the build log shows to
//! users is written by [`crate::output::BuildLogger`]. The subscriber honours
//! `RUST_LOG` when it is set and otherwise filters this crate at the
//! configured level.
//!
//! # Environment Variables
//!
//! - `BP_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error` (any case)
//! - `BP_LOG_FORMAT`: `json` for one JSON object per event
//! - `RUST_LOG`: standard `EnvFilter` directives, overrides the level

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

const CRATE_TARGET: &str = "ubi_java_extension";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Level,
    pub use_json: bool,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let level = env::var("BP_LOG_LEVEL")
            .map(|v| parse_level(&v))
            .unwrap_or(Level::INFO);

        let use_json = env::var("BP_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a level name, case-insensitively. Unknown names fall back to
/// `INFO` with a warning on stderr.
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

fn build_filter(level: Level) -> EnvFilter {
    if env::var("RUST_LOG").is_ok() {
        return EnvFilter::from_default_env();
    }

    let filter = EnvFilter::new("warn");
    match format!("{}={}", CRATE_TARGET, level).parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config.level);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(config.include_target)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(config.include_target)
                        .with_ansi(atty::is(atty::Stream::Stderr))
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
