//! Command implementations for the cycle-breaker CLI
//!
//! This module contains the implementations for each CLI command:
//! - plan: detect cycles and recommend how to break each one
//! - cycles: list strongly connected components and elementary cycles
//! - render: draw the graph with cycles and break plans highlighted

pub mod cycles;
pub mod plan;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Plan { .. } => plan::execute_plan_command(command),
        Commands::Cycles { .. } => cycles::execute_cycles_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
