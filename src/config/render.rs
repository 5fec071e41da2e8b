//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::core::StrategyMode;
use crate::error::CycleBreakerError;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub format: GraphFormat,
    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Draw the edges each plan cuts
    pub highlight_plan: bool,
    pub strategy: StrategyMode,
    pub max_cycles: Option<usize>,
    pub parallel: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    input: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    highlight_plan: Option<bool>,
    strategy: Option<StrategyMode>,
    max_cycles: Option<Option<usize>>,
    parallel: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_highlight_plan(mut self, highlight_plan: bool) -> Self {
        self.highlight_plan = Some(highlight_plan);
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

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, CycleBreakerError> {
        Ok(RenderConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.unwrap_or(None),
            highlight_plan: self.highlight_plan.unwrap_or(true),
            strategy: self.strategy.unwrap_or_default(),
            max_cycles: self.max_cycles.unwrap_or(None),
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_defaults_to_stdout_with_highlighting() {
        let config = RenderConfig::builder()
            .with_input("graph.json".into())
            .with_format(GraphFormat::Mermaid)
            .build()
            .unwrap();

        assert_eq!(config.output, None);
        assert!(config.highlight_plan);
        assert_eq!(config.strategy, StrategyMode::Auto);
    }
}
