//! Configuration constants for cycle-breaker
//!
//! Every CLI flag can also be set through an environment variable carrying
//! the [`env::PREFIX`] prefix.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a cycle is being cut
    pub const SPINNER_FRAMES: &[&str] = &[
        "⛓  ", // Intact chain
        "⛓· ", // Looking for a link
        "⛓✂ ", // Cutting
        "⛓ ✂", // Cut
        "⛓ ·", // Gap
        "✓  ", // Resolved
    ];

    /// Style template of the per-SCC progress bar
    pub const PROGRESS_BAR_TEMPLATE: &str =
        "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

    /// Style template of indeterminate spinners
    pub const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph format of the `render` command
    pub const DEFAULT_GRAPH_FORMAT: &str = "mermaid";

    /// Test suite name used in JUnit reports
    pub const JUNIT_SUITE_NAME: &str = "dependency-cycles";
}

/// Environment variable naming
pub mod env {
    /// Prefix shared by every environment variable the CLI reads
    pub const PREFIX: &str = "CYCLE_BREAKER_";
}
