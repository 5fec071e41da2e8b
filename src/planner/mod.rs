//! # Break Planning Module
//!
//! Turns detected cycles into an ordered list of [`BreakPlan`]s.
//!
//! ## Pipeline
//!
//! ```text
//! Graph -> SccDetector -> [SCC] -> CycleEnumerator (per SCC)
//!       -> StrategySelector (per cycle) -> PlanAssembler -> [BreakPlan]
//! ```
//!
//! Non-trivial SCCs share no mutable state, so enumeration and selection can
//! fan out over a rayon pool. Results are collected in SCC order and the
//! assembler sorts them, so parallel and sequential runs produce identical
//! plans.
//!
//! ## Example
//!
//! ```
//! use cycle_breaker::core::{BreakStrategy, Component, DependencyEdge, InjectionKind, StrategyMode};
//! use cycle_breaker::graph::GraphBuilder;
//! use cycle_breaker::planner::CyclePlanner;
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
//! let outcome = CyclePlanner::new(StrategyMode::Auto).plan(&graph, None);
//! let plan = &outcome.plans()[0];
//! assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
//! assert_eq!(plan.broken_edge().map(|e| e.from.as_str()), Some("B"));
//! # Ok(())
//! # }
//! ```

mod assembler;
mod strategy;

pub use assembler::{BreakPlan, PlanAssembler};
pub use strategy::{CandidatePlan, StrategySelector, compare_break_candidates, is_feasible};

use indicatif::ProgressBar;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, info_span};

use crate::core::{Cycle, EdgeKey, StrategyMode, StronglyConnectedComponent};
use crate::detector::{CycleEnumeration, CycleEnumerator, SccDetector};
use crate::graph::Graph;

/// An SCC whose cycle enumeration hit the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SccTruncation {
    pub scc: Vec<String>,
    pub budget: usize,
    pub cycles_found: usize,
}

/// Everything one planning run produced
#[derive(Debug, Clone)]
pub struct PlanningOutcome {
    component_count: usize,
    sccs: Vec<StronglyConnectedComponent>,
    cycles: Vec<Cycle>,
    plans: Vec<BreakPlan>,
    truncations: Vec<SccTruncation>,
}

impl PlanningOutcome {
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Every SCC, sorted by smallest member id
    pub fn sccs(&self) -> &[StronglyConnectedComponent] {
        &self.sccs
    }

    pub fn non_trivial_sccs(&self) -> impl Iterator<Item = &StronglyConnectedComponent> + '_ {
        self.sccs.iter().filter(|s| !s.is_trivial())
    }

    /// Elementary cycles, sorted by canonical form
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn plans(&self) -> &[BreakPlan] {
        &self.plans
    }

    pub fn truncations(&self) -> &[SccTruncation] {
        &self.truncations
    }

    pub fn is_truncated(&self) -> bool {
        !self.truncations.is_empty()
    }

    /// Whether the graph contains any cycle
    ///
    /// True for every non-trivial SCC, including one whose enumeration hit a
    /// budget of zero before recording a single cycle.
    pub fn has_cycles(&self) -> bool {
        self.non_trivial_sccs().next().is_some()
    }

    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    pub fn manual_count(&self) -> usize {
        self.plans.iter().filter(|p| p.is_manual()).count()
    }

    /// Physical edges named by automated plans
    pub fn broken_edges(&self) -> Vec<EdgeKey> {
        self.plans
            .iter()
            .filter_map(|p| p.broken_edge().map(|e| e.key()))
            .collect()
    }
}

struct SccAnalysis {
    scc: StronglyConnectedComponent,
    enumeration: CycleEnumeration,
    candidates: Vec<CandidatePlan>,
}

/// Runs the full detection and planning pipeline over a graph
#[derive(Debug, Clone, Copy)]
pub struct CyclePlanner {
    selector: StrategySelector,
    enumerator: CycleEnumerator,
    parallel: bool,
}

impl Default for CyclePlanner {
    fn default() -> Self {
        Self::new(StrategyMode::Auto)
    }
}

impl CyclePlanner {
    pub fn new(mode: StrategyMode) -> Self {
        Self {
            selector: StrategySelector::new(mode),
            enumerator: CycleEnumerator::new(),
            parallel: true,
        }
    }

    /// Per-SCC cycle budget; `None` enumerates everything
    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.enumerator = self.enumerator.with_max_cycles(max_cycles);
        self
    }

    /// Analyze independent SCCs on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn analyze(&self, graph: &Graph, scc: &StronglyConnectedComponent) -> SccAnalysis {
        let enumeration = self.enumerator.enumerate(graph, scc);
        let candidates = enumeration
            .cycles()
            .iter()
            .map(|cycle| self.selector.select(cycle, graph))
            .collect();

        SccAnalysis {
            scc: scc.clone(),
            enumeration,
            candidates,
        }
    }

    /// Detect cycles in `graph` and plan how to break each of them
    ///
    /// `progress` has its length set to the number of non-trivial SCCs and is
    /// ticked once per SCC.
    pub fn plan(&self, graph: &Graph, progress: Option<&ProgressBar>) -> PlanningOutcome {
        let _span = info_span!("plan", components = graph.component_count()).entered();

        let sccs = SccDetector::new().detect(graph);
        let non_trivial: Vec<&StronglyConnectedComponent> =
            sccs.iter().filter(|s| !s.is_trivial()).collect();
        if let Some(pb) = progress {
            pb.set_length(non_trivial.len() as u64);
        }

        let run = |scc: &&StronglyConnectedComponent| {
            let analysis = self.analyze(graph, scc);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            analysis
        };
        let analyses: Vec<SccAnalysis> = if self.parallel {
            non_trivial.par_iter().map(run).collect()
        } else {
            non_trivial.iter().map(run).collect()
        };

        let mut cycles = Vec::new();
        let mut candidates = Vec::new();
        let mut truncations = Vec::new();
        for analysis in analyses {
            if let Some(truncated) = analysis.enumeration.truncated() {
                truncations.push(SccTruncation {
                    scc: analysis.scc.members().to_vec(),
                    budget: truncated.budget,
                    cycles_found: analysis.enumeration.cycles().len(),
                });
            }
            cycles.extend(analysis.enumeration.into_cycles());
            candidates.extend(analysis.candidates);
        }
        cycles.sort();

        let plans = PlanAssembler::new().assemble(candidates);

        info!(
            sccs = non_trivial.len(),
            cycles = cycles.len(),
            plans = plans.len(),
            truncated = truncations.len(),
            "planning complete"
        );

        PlanningOutcome {
            component_count: graph.component_count(),
            sccs,
            cycles,
            plans,
            truncations,
        }
    }
}
