//! Cycles command executor

use console::style;
use miette::{Result, WrapErr};

use super::{load_graph, run_planner};
use crate::cli::OutputFormat;
use crate::config::CyclesConfig;
use crate::executors::CommandExecutor;
use crate::planner::CyclePlanner;
use crate::progress::ProgressReporter;
use crate::reports::{CycleListReportGenerator, ReportGenerator};

pub struct CyclesExecutor;

impl CommandExecutor for CyclesExecutor {
    type Config = CyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Enumerating dependency cycles...\n",
            style("🔄").cyan()
        );

        let mut progress = ProgressReporter::for_terminal();
        let graph = load_graph(&config.input, &mut progress)?;

        let planner = CyclePlanner::default()
            .with_max_cycles(config.max_cycles)
            .with_parallel(config.parallel);
        let outcome = run_planner(&graph, planner, &mut progress);

        let generator = match config.format {
            OutputFormat::Json => CycleListReportGenerator::json(),
            _ => CycleListReportGenerator::human(),
        };
        let report = generator
            .generate_report(&outcome)
            .wrap_err("Failed to generate cycle listing")?;

        print!("{report}");
        Ok(())
    }
}
