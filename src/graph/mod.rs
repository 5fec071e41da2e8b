//! # Graph Construction and Rendering Module
//!
//! This module builds the validated dependency graph the detector and planner
//! operate on, and renders it for visual inspection.
//!
//! ## Components
//!
//! ### Graph Building
//! - **GraphBuilder**: validates components and edges and produces a `Graph`
//! - **Graph**: read-only adjacency over components, ordered by id
//!
//! ### Graph Rendering
//! - **GraphRenderer**: renders the graph as DOT or Mermaid, highlighting
//!   cyclic components and the edges a plan breaks
//!
//! ## Example
//!
//! ```
//! use cycle_breaker::core::{Component, DependencyEdge, InjectionKind};
//! use cycle_breaker::graph::{GraphBuilder, GraphRenderer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = GraphBuilder::new()
//!     .with_components([Component::new("app.Service"), Component::new("app.Repository")])
//!     .with_edges([DependencyEdge::new(
//!         "app.Service",
//!         "app.Repository",
//!         InjectionKind::Constructor,
//!         false,
//!     )])
//!     .build()?;
//!
//! let renderer = GraphRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &[], &[], &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("app.Service"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{GraphBuilder, build_graph};
pub use renderer::GraphRenderer;
pub use types::Graph;
