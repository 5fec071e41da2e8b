//! Logging setup built on `tracing`
//!
//! Diagnostics go to stderr so reports on stdout stay machine readable.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: DEBUG for this crate
//! 2. `--quiet`: errors only
//! 3. `CYCLE_BREAKER_LOG`, then `RUST_LOG`: custom filter
//! 4. Default: WARN, so truncation and manual-review warnings are visible

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::env::PREFIX;

const DEFAULT_DIRECTIVE: &str = "cycle_breaker=warn";

/// Filter directive forced by the CLI flags, if any
fn flag_directive(verbose: bool, quiet: bool) -> Option<&'static str> {
    if verbose {
        Some("cycle_breaker=debug")
    } else if quiet {
        Some("cycle_breaker=error")
    } else {
        None
    }
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if let Some(directive) = flag_directive(verbose, quiet) {
        return EnvFilter::new(directive);
    }

    EnvFilter::try_from_env(format!("{PREFIX}LOG"))
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber
///
/// `verbose` wins over `quiet`. Calling this more than once keeps the first
/// subscriber.
pub fn init_logger(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(console::colors_enabled_stderr())
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}
