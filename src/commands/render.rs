//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::CycleBreakerError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, CycleBreakerError> {
        match command {
            Commands::Render {
                input,
                format,
                output,
                highlight_plan,
                strategy,
                budget,
            } => RenderConfig::builder()
                .with_input(input.path)
                .with_format(format)
                .with_output(output)
                .with_highlight_plan(highlight_plan)
                .with_strategy(strategy.strategy.into())
                .with_max_cycles(budget.max_cycles)
                .with_parallel(!budget.sequential)
                .build(),
            _ => Err(CycleBreakerError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for generating visual dependency graphs
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, GraphFormat};

    #[test]
    fn test_render_config_from_command() {
        let cli = Cli::try_parse_from([
            "cycle-breaker",
            "render",
            "graph.json",
            "-f",
            "dot",
            "-o",
            "graph.dot",
            "--max-cycles",
            "10",
        ])
        .unwrap();

        let config = RenderConfig::try_from(cli.command).unwrap();
        assert_eq!(config.format, GraphFormat::Dot);
        assert_eq!(config.output, Some(PathBuf::from("graph.dot")));
        assert_eq!(config.max_cycles, Some(10));
        assert!(config.highlight_plan);
    }
}
