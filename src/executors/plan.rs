//! Plan command executor

use console::style;
use miette::{Result, WrapErr};
use tracing::debug;

use super::{load_graph, run_planner};
use crate::cli::OutputFormat;
use crate::config::PlanConfig;
use crate::core::StrategyMode;
use crate::executors::CommandExecutor;
use crate::planner::{CyclePlanner, PlanningOutcome};
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

pub struct PlanExecutor;

impl CommandExecutor for PlanExecutor {
    type Config = PlanConfig;

    fn execute(config: Self::Config) -> Result<()> {
        match config.strategy {
            StrategyMode::Auto => eprintln!(
                "{} Planning dependency cycle breaks...\n",
                style("✂").cyan()
            ),
            StrategyMode::Forced(strategy) => eprintln!(
                "{} Planning dependency cycle breaks with forced strategy {}...\n",
                style("✂").cyan(),
                style(strategy).yellow().bold()
            ),
        }
        debug!(?config, "plan configuration");

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();

        let graph = load_graph(&config.input, &mut progress)?;

        let planner = CyclePlanner::new(config.strategy)
            .with_max_cycles(config.max_cycles)
            .with_parallel(config.parallel);
        let outcome = run_planner(&graph, planner, &mut progress);

        // Generate report based on format
        let report = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_plans).generate_report(&outcome)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&outcome),
            OutputFormat::Junit => JunitReportGenerator::new().generate_report(&outcome),
            OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(&outcome),
        }
        .wrap_err("Failed to generate report")?;

        print!("{report}");

        // Exit with error code if requested
        if fails_checks(&config, &outcome) {
            std::process::exit(1);
        }

        Ok(())
    }
}

/// Whether the `--error-on-*` flags turn this outcome into a failing exit
fn fails_checks(config: &PlanConfig, outcome: &PlanningOutcome) -> bool {
    (config.error_on_cycles && outcome.has_cycles())
        || (config.error_on_manual && outcome.manual_count() > 0)
}
