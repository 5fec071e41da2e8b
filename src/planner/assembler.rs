//! Reduction of per-cycle candidates into the final break plan list

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::strategy::CandidatePlan;
use crate::core::{BreakStrategy, Cycle, DependencyEdge, EdgeKey};

/// One recommended resolution, handed to the code transformation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakPlan {
    cycle: Cycle,
    also_resolves: Vec<Cycle>,
    broken_edge: Option<DependencyEdge>,
    strategy: BreakStrategy,
    rationale: String,
}

impl BreakPlan {
    /// The first (smallest canonical) cycle this plan resolves
    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Further cycles eliminated by breaking the same edge
    pub fn also_resolves(&self) -> &[Cycle] {
        &self.also_resolves
    }

    /// Every cycle resolved by this plan, primary first
    pub fn resolved_cycles(&self) -> impl Iterator<Item = &Cycle> + '_ {
        std::iter::once(&self.cycle).chain(self.also_resolves.iter())
    }

    pub fn broken_edge(&self) -> Option<&DependencyEdge> {
        self.broken_edge.as_ref()
    }

    pub fn strategy(&self) -> BreakStrategy {
        self.strategy
    }

    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    pub fn is_manual(&self) -> bool {
        !self.strategy.is_automated()
    }

    /// A copy of this plan that additionally resolves `cycle`
    fn merged_with(&self, cycle: Cycle) -> Self {
        let mut merged = self.clone();
        merged.rationale = format!("{}; also resolves {cycle}", merged.rationale);
        merged.also_resolves.push(cycle);
        merged
    }
}

impl From<CandidatePlan> for BreakPlan {
    fn from(candidate: CandidatePlan) -> Self {
        let (cycle, broken_edge, strategy, rationale) = candidate.into_parts();
        Self {
            cycle,
            also_resolves: Vec::new(),
            broken_edge,
            strategy,
            rationale,
        }
    }
}

/// Accumulator threaded through the reduction
#[derive(Default)]
struct Assembly {
    plans: Vec<BreakPlan>,
    broken: HashMap<EdgeKey, usize>,
}

impl Assembly {
    fn absorb(mut self, candidate: CandidatePlan) -> Self {
        let existing = candidate
            .edge()
            .and_then(|edge| self.broken.get(&edge.key()).copied());

        match (existing, candidate.edge().map(DependencyEdge::key)) {
            (Some(pos), _) => {
                let (cycle, ..) = candidate.into_parts();
                self.plans[pos] = self.plans[pos].merged_with(cycle);
            }
            (None, Some(key)) => {
                self.broken.insert(key, self.plans.len());
                self.plans.push(candidate.into());
            }
            // MANUAL plans are never merged
            (None, None) => self.plans.push(candidate.into()),
        }

        self
    }
}

/// Deduplicates and orders candidate plans
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanAssembler;

impl PlanAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Reduce `candidates` to at most one plan per physical edge
    ///
    /// Candidates are processed smallest canonical cycle first. A candidate
    /// whose edge is already broken by an earlier plan is folded into that
    /// plan instead of producing a second one. The result is ordered by
    /// `(strategy priority, canonical cycle)`.
    pub fn assemble(&self, mut candidates: Vec<CandidatePlan>) -> Vec<BreakPlan> {
        let total = candidates.len();
        candidates.sort_by(|a, b| a.cycle().cmp(b.cycle()));

        let mut plans = candidates
            .into_iter()
            .fold(Assembly::default(), Assembly::absorb)
            .plans;

        plans.sort_by(|a, b| {
            a.strategy
                .priority()
                .cmp(&b.strategy.priority())
                .then_with(|| a.cycle.cmp(&b.cycle))
        });

        debug!(
            candidates = total,
            plans = plans.len(),
            "assembled break plans"
        );

        plans
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Component, InjectionKind};
    use crate::graph::{Graph, build_graph};
    use crate::planner::StrategySelector;

    fn cycle(ids: &[&str]) -> Cycle {
        Cycle::canonical(ids.iter().map(|s| s.to_string()).collect())
    }

    fn candidates(graph: &Graph, cycles: &[Cycle]) -> Vec<CandidatePlan> {
        let selector = StrategySelector::default();
        cycles.iter().map(|c| selector.select(c, graph)).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(PlanAssembler::new().assemble(vec![]).is_empty());
    }

    #[test]
    fn test_shared_edge_is_merged() {
        // [A, B] and [A, B, C] share A -> B, the only mutable edge
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Constructor, false),
                DependencyEdge::new("B", "C", InjectionKind::Constructor, false),
                DependencyEdge::new("C", "A", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B"), Component::new("C")],
        )
        .unwrap();

        let plans = PlanAssembler::new().assemble(candidates(
            &graph,
            &[cycle(&["A", "B", "C"]), cycle(&["A", "B"])],
        ));

        assert_eq!(plans.len(), 1);
        let plan = &plans[0];
        assert_eq!(plan.cycle(), &cycle(&["A", "B"]));
        assert_eq!(plan.also_resolves(), &[cycle(&["A", "B", "C"])]);
        assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
        assert_eq!(
            plan.rationale(),
            "LAZY_INJECTION on A -> B (FIELD): binding is mutable and can be deferred; also \
             resolves [A -> B -> C]"
        );
        assert_eq!(plan.resolved_cycles().count(), 2);
    }

    #[test]
    fn test_manual_plans_never_merge() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "A", InjectionKind::Constructor, false),
                DependencyEdge::new("B", "B", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();

        let plans =
            PlanAssembler::new().assemble(candidates(&graph, &[cycle(&["B"]), cycle(&["A"])]));

        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(BreakPlan::is_manual));
        assert_eq!(plans[0].cycle(), &cycle(&["A"]));
        assert_eq!(plans[1].cycle(), &cycle(&["B"]));
    }

    #[test]
    fn test_sorted_by_strategy_then_cycle() {
        let graph = build_graph(
            vec![
                // [A] manual
                DependencyEdge::new("A", "A", InjectionKind::Constructor, false),
                // [B, C] method extraction
                DependencyEdge::new("B", "C", InjectionKind::Constructor, false),
                DependencyEdge::new("C", "B", InjectionKind::Constructor, false),
                // [D, E] lazy
                DependencyEdge::new("D", "E", InjectionKind::Setter, true),
                DependencyEdge::new("E", "D", InjectionKind::Setter, true),
            ],
            ["A", "B", "C", "D", "E"].map(Component::new).to_vec(),
        )
        .unwrap();

        let plans = PlanAssembler::new().assemble(candidates(
            &graph,
            &[cycle(&["A"]), cycle(&["B", "C"]), cycle(&["D", "E"])],
        ));

        let order: Vec<(BreakStrategy, String)> = plans
            .iter()
            .map(|p| (p.strategy(), p.cycle().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (BreakStrategy::LazyInjection, "[D -> E]".to_string()),
                (BreakStrategy::MethodExtraction, "[B -> C]".to_string()),
                (BreakStrategy::Manual, "[A]".to_string()),
            ]
        );
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Field, true),
                DependencyEdge::new("B", "C", InjectionKind::Field, true),
                DependencyEdge::new("C", "A", InjectionKind::Field, true),
            ],
            vec![Component::new("A"), Component::new("B"), Component::new("C")],
        )
        .unwrap();
        let cycles = [cycle(&["A", "B"]), cycle(&["A", "B", "C"])];
        let reversed = [cycle(&["A", "B", "C"]), cycle(&["A", "B"])];

        let forward = PlanAssembler::new().assemble(candidates(&graph, &cycles));
        let backward = PlanAssembler::new().assemble(candidates(&graph, &reversed));
        assert_eq!(forward, backward);
    }
}
