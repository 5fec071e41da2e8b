//! Cycles command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::CycleBreakerError;

/// Configuration for the cycles command
#[derive(Debug, Clone)]
pub struct CyclesConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub max_cycles: Option<usize>,
    pub parallel: bool,
}

impl CyclesConfig {
    pub fn builder() -> CyclesConfigBuilder {
        CyclesConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct CyclesConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_cycles: Option<Option<usize>>,
    parallel: Option<bool>,
}

impl CyclesConfigBuilder {
    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
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

impl crate::common::ConfigBuilder for CyclesConfigBuilder {
    type Config = CyclesConfig;

    fn build(self) -> Result<Self::Config, CycleBreakerError> {
        let format = self.format.ok_or_else(|| missing_field("format"))?;
        if !matches!(format, OutputFormat::Human | OutputFormat::Json) {
            return Err(CycleBreakerError::ConfigurationError {
                message: format!("The cycles command supports human and json output, not {format:?}"),
            });
        }

        Ok(CyclesConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format,
            max_cycles: self.max_cycles.ok_or_else(|| missing_field("max_cycles"))?,
            parallel: self.parallel.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_requires_format() {
        let err = CyclesConfig::builder()
            .with_input("graph.json".into())
            .with_max_cycles(None)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_builder_rejects_annotation_formats() {
        let err = CyclesConfig::builder()
            .with_input("graph.json".into())
            .with_format(OutputFormat::GitHub)
            .with_max_cycles(None)
            .build()
            .unwrap_err();

        assert!(matches!(err, CycleBreakerError::ConfigurationError { .. }));
    }
}
