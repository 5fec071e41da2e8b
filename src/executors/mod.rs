//! Command executors that handle the actual logic for each command

pub mod cycles;
pub mod plan;
pub mod render;

use std::path::Path;

use miette::{Result, WrapErr};

use crate::graph::Graph;
use crate::input::AnalysisInput;
use crate::planner::{CyclePlanner, PlanningOutcome};
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Load the input file and validate it into a graph
fn load_graph(path: &Path, progress: &mut Option<ProgressReporter>) -> Result<Graph> {
    if let Some(p) = progress.as_mut() {
        p.loading_input(&path.display().to_string());
    }

    let input = AnalysisInput::load(path)
        .wrap_err_with(|| format!("Failed to load analysis input '{}'", path.display()))?;
    let (components, edges) = (input.components.len(), input.edges.len());
    let graph = input
        .into_graph()
        .wrap_err("Invalid dependency graph")?;

    if let Some(p) = progress.as_mut() {
        p.finish_loading(components, edges);
    }
    Ok(graph)
}

/// Run the planner, driving the progress bar when one is shown
fn run_planner(
    graph: &Graph,
    planner: CyclePlanner,
    progress: &mut Option<ProgressReporter>,
) -> PlanningOutcome {
    let bar = progress.as_mut().map(ProgressReporter::start_planning);
    let outcome = planner.plan(graph, bar.as_ref());

    if let Some(p) = progress.as_mut() {
        p.finish_planning(outcome.cycle_count(), outcome.plans().len());
    }
    outcome
}
