//! Plan command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::core::StrategyMode;
use crate::error::CycleBreakerError;

/// Configuration for the plan command
///
/// This struct contains all options for detecting cycles and reporting the
/// plans that break them.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// JSON file with components and edges
    pub input: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Automatic or forced strategy selection
    pub strategy: StrategyMode,
    /// Per-SCC cycle enumeration budget (None = unbounded)
    pub max_cycles: Option<usize>,
    /// Maximum number of plans to display (None = all)
    pub max_plans: Option<usize>,
    /// Analyse SCCs on the rayon pool
    pub parallel: bool,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Whether to exit with error code if any plan is MANUAL
    pub error_on_manual: bool,
}

impl PlanConfig {
    pub fn builder() -> PlanConfigBuilder {
        PlanConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct PlanConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    strategy: Option<StrategyMode>,
    max_cycles: Option<Option<usize>>,
    max_plans: Option<Option<usize>>,
    parallel: Option<bool>,
    error_on_cycles: Option<bool>,
    error_on_manual: Option<bool>,
}

impl PlanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyMode) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }

    pub fn with_max_plans(mut self, max_plans: Option<usize>) -> Self {
        self.max_plans = Some(max_plans);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_error_on_manual(mut self, error_on_manual: bool) -> Self {
        self.error_on_manual = Some(error_on_manual);
        self
    }
}

impl crate::common::ConfigBuilder for PlanConfigBuilder {
    type Config = PlanConfig;

    fn build(self) -> Result<Self::Config, CycleBreakerError> {
        Ok(PlanConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            strategy: self.strategy.unwrap_or_default(),
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
            max_plans: self.max_plans.unwrap_or(None),
            parallel: self.parallel.unwrap_or(true),
            error_on_cycles: self.error_on_cycles.unwrap_or(false),
            error_on_manual: self.error_on_manual.unwrap_or(false),
        })
    }
}
