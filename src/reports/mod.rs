//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration
//! - github: GitHub Actions workflow annotations
//! - cycles: SCC and cycle listing used by the `cycles` command

pub mod cycles;
pub mod github;
pub mod human;
pub mod json;
pub mod junit;

use crate::error::CycleBreakerError;
use crate::planner::PlanningOutcome;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a planning run
    fn generate_report(&self, outcome: &PlanningOutcome) -> Result<String, CycleBreakerError>;
}

// Re-export for convenience
pub use cycles::CycleListReportGenerator;
pub use github::GitHubReportGenerator;
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::core::{Component, DependencyEdge, InjectionKind, StrategyMode};
    use crate::graph::{Graph, build_graph};
    use crate::planner::{CyclePlanner, PlanningOutcome};

    /// `[A -> B]` broken lazily and the manual self-loop `[C]`
    pub fn mixed_graph() -> Graph {
        build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Constructor, false),
                DependencyEdge::new("B", "A", InjectionKind::Field, true),
                DependencyEdge::new("C", "C", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B"), Component::new("C")],
        )
        .unwrap()
    }

    pub fn mixed_outcome() -> PlanningOutcome {
        CyclePlanner::new(StrategyMode::Auto).plan(&mixed_graph(), None)
    }

    pub fn acyclic_outcome() -> PlanningOutcome {
        let graph = build_graph(
            vec![DependencyEdge::new("A", "B", InjectionKind::Field, true)],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();
        CyclePlanner::default().plan(&graph, None)
    }

    /// Mutual pair `[A -> B]` enumerated with a budget of zero
    pub fn zero_budget_outcome() -> PlanningOutcome {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Field, true),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();
        CyclePlanner::default()
            .with_max_cycles(Some(0))
            .plan(&graph, None)
    }

    /// Complete digraph on four nodes, enumerated with a budget of 2
    pub fn truncated_outcome() -> PlanningOutcome {
        let ids = ["A", "B", "C", "D"];
        let mut edges = Vec::new();
        for from in ids {
            for to in ids {
                if from != to {
                    edges.push(DependencyEdge::new(from, to, InjectionKind::Setter, true));
                }
            }
        }
        let graph = build_graph(edges, ids.map(Component::new).to_vec()).unwrap();
        CyclePlanner::default()
            .with_max_cycles(Some(2))
            .plan(&graph, None)
    }
}
