//! Cycles command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::CyclesConfig;
use crate::error::CycleBreakerError;

impl FromCommand for CyclesConfig {
    fn from_command(command: Commands) -> Result<Self, CycleBreakerError> {
        match command {
            Commands::Cycles {
                input,
                format,
                budget,
            } => CyclesConfig::builder()
                .with_input(input.path)
                .with_format(format.format)
                .with_max_cycles(budget.max_cycles)
                .with_parallel(!budget.sequential)
                .build(),
            _ => Err(CycleBreakerError::ConfigurationError {
                message: "Invalid command type for CyclesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CyclesConfig);

/// Execute the cycles command
pub fn execute_cycles_command(command: Commands) -> Result<()> {
    let config = CyclesConfig::from_command(command)
        .wrap_err("Failed to parse cycles command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::cycles::CyclesExecutor;
    CyclesExecutor::execute(config)
}
