//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::StrategyArg;
use crate::error::CycleBreakerError;

/// The analysis input file
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON file describing components and dependency edges
    #[arg(value_name = "INPUT", env = "CYCLE_BREAKER_INPUT")]
    pub path: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_BREAKER_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Strategy selection arguments
#[derive(Args, Debug, Clone)]
pub struct StrategyArgs {
    /// Break strategy to apply (auto tries each in priority order)
    #[arg(long, value_enum, default_value = "auto", env = "CYCLE_BREAKER_STRATEGY")]
    pub strategy: StrategyArg,
}

/// Cycle enumeration budget arguments
#[derive(Args, Debug, Clone)]
pub struct CycleBudgetArgs {
    /// Maximum number of cycles to enumerate per strongly connected component
    /// (enumerates all by default)
    #[arg(long, env = "CYCLE_BREAKER_MAX_CYCLES")]
    pub max_cycles: Option<usize>,

    /// Analyse strongly connected components one at a time
    #[arg(long, env = "CYCLE_BREAKER_SEQUENTIAL")]
    pub sequential: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, CycleBreakerError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, CycleBreakerError>;
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(name: &str) -> CycleBreakerError {
    CycleBreakerError::ConfigurationError {
        message: format!("Missing required field: {name}"),
    }
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CycleBreakerError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_field("input").to_string(),
            "Configuration error: Missing required field: input"
        );
    }
}
