use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleBudgetArgs, FormatArgs, InputArgs, StrategyArgs};
use crate::core::{BreakStrategy, StrategyMode};

#[derive(Parser)]
#[command(
    name = "cycle-breaker",
    about = "✂ Detect and plan the removal of dependency injection cycles",
    long_about = "cycle-breaker reads a component dependency graph produced by a DI scanner, \
                  finds every circular dependency with Tarjan's and Johnson's algorithms, and \
                  recommends which edge to break in each cycle and how: lazy injection, \
                  interface extraction, method extraction, or manual review.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true, env = "CYCLE_BREAKER_VERBOSE")]
    pub verbose: bool,

    /// Only log errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "CYCLE_BREAKER_QUIET"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan how to break every dependency cycle
    ///
    /// Runs the full pipeline and prints one break plan per physical edge to
    /// cut, ordered from least to most invasive strategy.
    #[command(
        long_about = "Detect every elementary dependency cycle in the input graph and produce an \
                      ordered list of break plans. Each plan names the edge to break, the \
                      strategy to apply and a rationale. Plans that break the same edge are \
                      merged, and cycles no automated strategy can break are reported as MANUAL."
    )]
    Plan {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        budget: CycleBudgetArgs,

        /// Maximum number of plans to display (shows all by default)
        #[arg(long, env = "CYCLE_BREAKER_MAX_PLANS")]
        max_plans: Option<usize>,

        /// Exit with error code if any cycle is found
        #[arg(long, env = "CYCLE_BREAKER_ERROR_ON_CYCLES")]
        error_on_cycles: bool,

        /// Exit with error code if any cycle needs manual review
        #[arg(long, env = "CYCLE_BREAKER_ERROR_ON_MANUAL")]
        error_on_manual: bool,
    },

    /// List strongly connected components and their elementary cycles
    #[command(
        long_about = "Detect strongly connected components with Tarjan's algorithm and enumerate \
                      the elementary cycles inside each with Johnson's algorithm, without \
                      selecting any break strategy."
    )]
    Cycles {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        budget: CycleBudgetArgs,
    },

    /// Render the dependency graph with cycles and break plans highlighted
    #[command(
        long_about = "Render the component graph as a Mermaid or Graphviz DOT diagram. Components \
                      inside cycles are highlighted and, unless disabled, the edges the break \
                      plans cut are drawn dashed and labelled with their strategy."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "CYCLE_BREAKER_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "CYCLE_BREAKER_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the edges each break plan cuts
        #[arg(
            long,
            default_value = "true",
            action = clap::ArgAction::Set,
            env = "CYCLE_BREAKER_HIGHLIGHT_PLAN"
        )]
        highlight_plan: bool,

        #[command(flatten)]
        strategy: StrategyArgs,

        #[command(flatten)]
        budget: CycleBudgetArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
    #[value(name = "github")]
    GitHub,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Mermaid,
    Dot,
}

/// `--strategy` values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyArg {
    /// Pick the first feasible strategy in priority order
    #[default]
    Auto,
    LazyInjection,
    InterfaceExtraction,
    MethodExtraction,
    /// Report every cycle for manual review
    Manual,
}

impl From<StrategyArg> for StrategyMode {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Auto => StrategyMode::Auto,
            StrategyArg::LazyInjection => StrategyMode::Forced(BreakStrategy::LazyInjection),
            StrategyArg::InterfaceExtraction => {
                StrategyMode::Forced(BreakStrategy::InterfaceExtraction)
            }
            StrategyArg::MethodExtraction => StrategyMode::Forced(BreakStrategy::MethodExtraction),
            StrategyArg::Manual => StrategyMode::Forced(BreakStrategy::Manual),
        }
    }
}
