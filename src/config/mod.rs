//! # Configuration Module
//!
//! This module provides configuration structures for all cycle-breaker
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **PlanConfig**: Configuration for the `plan` command
//! - **CyclesConfig**: Configuration for the `cycles` command
//! - **RenderConfig**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use cycle_breaker::cli::{GraphFormat, OutputFormat};
//! use cycle_breaker::common::ConfigBuilder;
//! use cycle_breaker::config::{PlanConfig, RenderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = PlanConfig::builder()
//!     .with_input("graph.json".into())
//!     .with_format(OutputFormat::Human)
//!     .with_max_cycles(Some(1_000))
//!     .with_error_on_manual(true)
//!     .build()?;
//! assert!(plan.parallel);
//!
//! let render = RenderConfig::builder()
//!     .with_input("graph.json".into())
//!     .with_format(GraphFormat::Dot)
//!     .with_highlight_plan(false)
//!     .build()?;
//! assert!(!render.highlight_plan);
//! # Ok(())
//! # }
//! ```

pub mod cycles;
pub mod plan;
pub mod render;

pub use cycles::CyclesConfig;
pub use plan::PlanConfig;
pub use render::RenderConfig;
