//! # Cycle Detection Module
//!
//! This module finds circular dependencies in the component graph.
//!
//! ## Algorithm
//!
//! Detection runs in two stages:
//!
//! 1. **Tarjan's SCC algorithm** partitions the graph into strongly connected
//!    components in O(V + E). Only non-trivial SCCs (more than one member, or a
//!    single member with a self-edge) can contain cycles.
//! 2. **Johnson's algorithm** then enumerates every elementary cycle inside
//!    each non-trivial SCC, in time proportional to `(V + E)` per cycle found.
//!    A per-SCC budget can cap the enumeration; hitting it is reported as
//!    [`Truncated`] rather than silently dropping cycles.
//!
//! ## Key Components
//!
//! - **SccDetector**: iterative Tarjan traversal with deterministic ordering
//! - **CycleEnumerator**: Johnson's enumeration with canonical rotation
//! - **CycleEnumeration**: the cycles of one SCC plus its truncation status
//!
//! ## Example
//!
//! ```
//! use cycle_breaker::core::{Component, DependencyEdge, InjectionKind};
//! use cycle_breaker::detector::{CycleEnumerator, SccDetector};
//! use cycle_breaker::graph::GraphBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = GraphBuilder::new()
//!     .with_components([Component::new("A"), Component::new("B")])
//!     .with_edges([
//!         DependencyEdge::new("A", "B", InjectionKind::Field, true),
//!         DependencyEdge::new("B", "A", InjectionKind::Field, true),
//!     ])
//!     .build()?;
//!
//! let sccs = SccDetector::new().detect(&graph);
//! assert_eq!(sccs.len(), 1);
//! assert!(!sccs[0].is_trivial());
//!
//! let enumeration = CycleEnumerator::new().enumerate(&graph, &sccs[0]);
//! assert_eq!(enumeration.cycles().len(), 1);
//! assert_eq!(enumeration.cycles()[0].to_string(), "[A -> B]");
//! # Ok(())
//! # }
//! ```

mod cycles;
mod scc;

pub use cycles::{CycleEnumeration, CycleEnumerator, Truncated};
pub use scc::SccDetector;
