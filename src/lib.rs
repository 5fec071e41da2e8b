//! # Cycle Breaker - Plan the Removal of Dependency Injection Cycles
//!
//! Cycle Breaker takes the component graph of a dependency-injected
//! application, finds every circular dependency, and recommends which edge to
//! break in each cycle and how. It is the analysis stage of an automated
//! refactoring pipeline: scanning source code happens before it, rewriting
//! source code after it.
//!
//! ## Main Components
//!
//! - **Graph**: validates components and edges into an immutable graph
//! - **Detector**: Tarjan's SCC algorithm and Johnson's cycle enumeration
//! - **Planner**: strategy selection per cycle and plan assembly
//! - **Reports**: human-readable and machine-readable output
//!
//! ## Usage
//!
//! ```
//! use cycle_breaker::core::{BreakStrategy, Component, DependencyEdge, InjectionKind, StrategyMode};
//! use cycle_breaker::graph::GraphBuilder;
//! use cycle_breaker::planner::CyclePlanner;
//! use cycle_breaker::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // OrderService needs PaymentService in its constructor, and
//! // PaymentService has OrderService injected into a field.
//! let graph = GraphBuilder::new()
//!     .with_components([
//!         Component::new("app.OrderService"),
//!         Component::new("app.PaymentService").with_extractable_surface(true),
//!     ])
//!     .with_edges([
//!         DependencyEdge::new(
//!             "app.OrderService",
//!             "app.PaymentService",
//!             InjectionKind::Constructor,
//!             false,
//!         ),
//!         DependencyEdge::new(
//!             "app.PaymentService",
//!             "app.OrderService",
//!             InjectionKind::Field,
//!             true,
//!         ),
//!     ])
//!     .build()?;
//!
//! let outcome = CyclePlanner::new(StrategyMode::Auto)
//!     .with_max_cycles(Some(10_000))
//!     .plan(&graph, None);
//!
//! assert_eq!(outcome.cycle_count(), 1);
//! let plan = &outcome.plans()[0];
//! assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
//! assert_eq!(
//!     plan.broken_edge().map(|e| e.to_string()),
//!     Some("app.PaymentService -> app.OrderService (FIELD)".to_string())
//! );
//!
//! let json = JsonReportGenerator::new().generate_report(&outcome)?;
//! assert!(json.contains("LAZY_INJECTION"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading a Front-End Export
//!
//! ```no_run
//! use std::path::Path;
//!
//! use cycle_breaker::input::AnalysisInput;
//! use cycle_breaker::planner::CyclePlanner;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = AnalysisInput::load(Path::new("components.json"))?.into_graph()?;
//! let outcome = CyclePlanner::default().plan(&graph, None);
//!
//! for plan in outcome.plans() {
//!     println!("{}", plan.rationale());
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod input;
pub mod logger;
pub mod planner;
pub mod reports;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet);

    execute_command(cli.command)
}
