//! Plan command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PlanConfig;
use crate::error::CycleBreakerError;

impl FromCommand for PlanConfig {
    fn from_command(command: Commands) -> Result<Self, CycleBreakerError> {
        match command {
            Commands::Plan {
                input,
                format,
                strategy,
                budget,
                max_plans,
                error_on_cycles,
                error_on_manual,
            } => PlanConfig::builder()
                .with_input(input.path)
                .with_format(format.format)
                .with_strategy(strategy.strategy.into())
                .with_max_cycles(budget.max_cycles)
                .with_max_plans(max_plans)
                .with_parallel(!budget.sequential)
                .with_error_on_cycles(error_on_cycles)
                .with_error_on_manual(error_on_manual)
                .build(),
            _ => Err(CycleBreakerError::ConfigurationError {
                message: "Invalid command type for PlanConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PlanConfig);

/// Execute the plan command
pub fn execute_plan_command(command: Commands) -> Result<()> {
    let config = PlanConfig::from_command(command)
        .wrap_err("Failed to parse plan command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::plan::PlanExecutor;
    PlanExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, OutputFormat};
    use crate::core::{BreakStrategy, StrategyMode};

    #[test]
    fn test_plan_config_from_command() {
        let cli = Cli::try_parse_from([
            "cycle-breaker",
            "plan",
            "graph.json",
            "--strategy",
            "lazy-injection",
            "--sequential",
            "--error-on-manual",
        ])
        .unwrap();

        let config = PlanConfig::try_from(cli.command).unwrap();
        assert_eq!(config.format, OutputFormat::Human);
        assert_eq!(
            config.strategy,
            StrategyMode::Forced(BreakStrategy::LazyInjection)
        );
        assert!(!config.parallel);
        assert!(config.error_on_manual);
        assert!(!config.error_on_cycles);
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["cycle-breaker", "cycles", "graph.json"]).unwrap();

        assert!(matches!(
            PlanConfig::from_command(cli.command),
            Err(CycleBreakerError::ConfigurationError { .. })
        ));
    }
}
