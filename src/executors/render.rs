//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{load_graph, run_planner};
use crate::cli::GraphFormat;
use crate::config::RenderConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::planner::CyclePlanner;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} dependency graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        // No progress bars: the rendered graph may be going to stdout
        let mut progress = None;
        let graph = load_graph(&config.input, &mut progress)?;

        if graph.is_empty() {
            eprintln!("{} No components found to visualize", style("ℹ").blue());
            return Ok(());
        }

        let planner = CyclePlanner::new(config.strategy)
            .with_max_cycles(config.max_cycles)
            .with_parallel(config.parallel);
        let outcome = run_planner(&graph, planner, &mut progress);

        let renderer = GraphRenderer::new(config.highlight_plan);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        match config.format {
            GraphFormat::Mermaid => renderer
                .render_mermaid(
                    &graph,
                    outcome.sccs(),
                    outcome.plans(),
                    output_writer.as_mut(),
                )
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Dot => renderer
                .render_dot(
                    &graph,
                    outcome.sccs(),
                    outcome.plans(),
                    output_writer.as_mut(),
                )
                .wrap_err("Failed to render DOT graph")?,
        }
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to write graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
