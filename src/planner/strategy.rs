//! Per-cycle choice of the edge to break and the strategy to break it with

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{trace, warn};

use crate::core::{BreakStrategy, Cycle, DependencyEdge, InjectionKind, StrategyMode};
use crate::graph::Graph;

/// The selector's verdict for a single cycle
///
/// `edge` is `None` exactly when `strategy` is [`BreakStrategy::Manual`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidatePlan {
    cycle: Cycle,
    edge: Option<DependencyEdge>,
    strategy: BreakStrategy,
    rationale: String,
}

impl CandidatePlan {
    fn automated(cycle: Cycle, edge: DependencyEdge, strategy: BreakStrategy, rationale: String) -> Self {
        Self {
            cycle,
            edge: Some(edge),
            strategy,
            rationale,
        }
    }

    fn manual(cycle: Cycle, rationale: String) -> Self {
        Self {
            cycle,
            edge: None,
            strategy: BreakStrategy::Manual,
            rationale,
        }
    }

    pub fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    pub fn edge(&self) -> Option<&DependencyEdge> {
        self.edge.as_ref()
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

    pub(super) fn into_parts(self) -> (Cycle, Option<DependencyEdge>, BreakStrategy, String) {
        (self.cycle, self.edge, self.strategy, self.rationale)
    }
}

/// Tie-break between two edges that support the same strategy
///
/// Smaller `to` id wins; on the same target, FIELD beats SETTER beats
/// CONSTRUCTOR. Kept in one place so the policy can be swapped without
/// touching the selection loop.
pub fn compare_break_candidates(a: &DependencyEdge, b: &DependencyEdge) -> Ordering {
    a.to.cmp(&b.to)
        .then_with(|| {
            a.injection_kind
                .break_preference()
                .cmp(&b.injection_kind.break_preference())
        })
        .then_with(|| a.from.cmp(&b.from))
}

/// Whether `strategy` can structurally break `edge`
///
/// MANUAL is never "feasible": it is the outcome when nothing else is.
pub fn is_feasible(strategy: BreakStrategy, edge: &DependencyEdge, graph: &Graph) -> bool {
    match strategy {
        BreakStrategy::LazyInjection => edge.mutable,
        BreakStrategy::InterfaceExtraction => {
            matches!(
                edge.injection_kind,
                InjectionKind::Constructor | InjectionKind::Field
            ) && graph
                .component_by_id(&edge.to)
                .is_some_and(|c| c.has_extractable_surface)
        }
        // A component cannot be mediated with itself
        BreakStrategy::MethodExtraction => !edge.is_self_loop(),
        BreakStrategy::Manual => false,
    }
}

fn condition(strategy: BreakStrategy, edge: &DependencyEdge, mode: StrategyMode) -> String {
    match strategy {
        BreakStrategy::LazyInjection => "binding is mutable and can be deferred".to_string(),
        BreakStrategy::InterfaceExtraction => format!(
            "'{}' exposes an extractable surface and the dependency is {}-injected",
            edge.to, edge.injection_kind
        ),
        BreakStrategy::MethodExtraction if mode == StrategyMode::Auto => format!(
            "no lazy or interface break is feasible; '{}' and '{}' can be mediated by a \
             synthesized component",
            edge.from, edge.to
        ),
        BreakStrategy::MethodExtraction => format!(
            "'{}' and '{}' can be mediated by a synthesized component",
            edge.from, edge.to
        ),
        BreakStrategy::Manual => "requires manual review".to_string(),
    }
}

/// Selects one edge and strategy per cycle
#[derive(Debug, Default, Clone, Copy)]
pub struct StrategySelector {
    mode: StrategyMode,
}

impl StrategySelector {
    pub fn new(mode: StrategyMode) -> Self {
        Self { mode }
    }

    /// Choose how to break `cycle`
    ///
    /// In [`StrategyMode::Auto`] strategies are tried in priority order and
    /// the first one feasible on any edge of the cycle wins; among the edges
    /// supporting it, [`compare_break_candidates`] decides. A forced mode only
    /// evaluates its own strategy. When nothing is feasible the cycle is
    /// flagged MANUAL with no broken edge.
    pub fn select(&self, cycle: &Cycle, graph: &Graph) -> CandidatePlan {
        let candidates: Vec<&DependencyEdge> = cycle
            .hops()
            .flat_map(|(from, to)| graph.edges_between(from, to))
            .collect();

        let strategies: &[BreakStrategy] = match self.mode {
            StrategyMode::Auto => &BreakStrategy::AUTOMATED,
            StrategyMode::Forced(BreakStrategy::Manual) => {
                return CandidatePlan::manual(
                    cycle.clone(),
                    format!("MANUAL: manual review requested for cycle {cycle}"),
                );
            }
            StrategyMode::Forced(ref strategy) => std::slice::from_ref(strategy),
        };

        for &strategy in strategies {
            let chosen = candidates
                .iter()
                .copied()
                .filter(|edge| is_feasible(strategy, edge, graph))
                .min_by(|a, b| compare_break_candidates(a, b));

            if let Some(edge) = chosen {
                let rationale = self.rationale(strategy, edge, &candidates);
                trace!(%cycle, %edge, %strategy, "selected break");
                return CandidatePlan::automated(cycle.clone(), edge.clone(), strategy, rationale);
            }
        }

        let rationale = match self.mode {
            StrategyMode::Forced(strategy) => format!(
                "MANUAL: forced strategy {strategy} is not feasible on any edge of cycle {cycle}"
            ),
            StrategyMode::Auto => {
                format!("MANUAL: no automated strategy is feasible for cycle {cycle}")
            }
        };
        warn!(%cycle, "no feasible break strategy");
        CandidatePlan::manual(cycle.clone(), rationale)
    }

    fn rationale(
        &self,
        strategy: BreakStrategy,
        edge: &DependencyEdge,
        candidates: &[&DependencyEdge],
    ) -> String {
        let mut rationale = format!(
            "{strategy} on {} -> {} ({}): {}",
            edge.from,
            edge.to,
            edge.injection_kind,
            condition(strategy, edge, self.mode)
        );

        let remaining: Vec<String> = candidates
            .iter()
            .filter(|c| c.from == edge.from && c.to == edge.to && c.injection_kind != edge.injection_kind)
            .map(|c| c.injection_kind.to_string())
            .collect();
        if !remaining.is_empty() {
            rationale.push_str(&format!(
                "; other injections on this hop remain: {}",
                remaining.join(", ")
            ));
        }

        rationale
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::Component;
    use crate::graph::build_graph;

    fn cycle(ids: &[&str]) -> Cycle {
        Cycle::canonical(ids.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_mutual_pair_prefers_smallest_target() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Field, true),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A", "B"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
        assert_eq!(
            plan.edge(),
            Some(&DependencyEdge::new("B", "A", InjectionKind::Field, true))
        );
        assert_eq!(
            plan.rationale(),
            "LAZY_INJECTION on B -> A (FIELD): binding is mutable and can be deferred"
        );
    }

    #[test]
    fn test_interface_extraction_on_immutable_cycle() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Constructor, false),
                DependencyEdge::new("B", "C", InjectionKind::Constructor, false),
                DependencyEdge::new("C", "A", InjectionKind::Constructor, false),
            ],
            vec![
                Component::new("A"),
                Component::new("B").with_extractable_surface(true),
                Component::new("C"),
            ],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A", "B", "C"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::InterfaceExtraction);
        assert_eq!(plan.edge().map(|e| e.key().to_string()), Some("A -> B (CONSTRUCTOR)".to_string()));
    }

    #[test]
    fn test_setter_edges_skip_interface_extraction() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Setter, false),
                DependencyEdge::new("B", "A", InjectionKind::Setter, false),
            ],
            vec![
                Component::new("A").with_extractable_surface(true),
                Component::new("B").with_extractable_surface(true),
            ],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A", "B"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::MethodExtraction);
        assert_eq!(plan.edge().map(|e| e.to.as_str()), Some("A"));
    }

    #[test]
    fn test_method_extraction_fallback() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Constructor, false),
                DependencyEdge::new("B", "A", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A", "B"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::MethodExtraction);
        assert_eq!(plan.edge().map(|e| e.from.as_str()), Some("B"));
        assert!(plan.rationale().starts_with("METHOD_EXTRACTION on B -> A (CONSTRUCTOR): no lazy"));
    }

    #[test]
    fn test_immutable_self_loop_is_manual() {
        let graph = build_graph(
            vec![DependencyEdge::new("A", "A", InjectionKind::Constructor, false)],
            vec![Component::new("A")],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A"]), &graph);
        assert!(plan.is_manual());
        assert_eq!(plan.edge(), None);
        assert_eq!(
            plan.rationale(),
            "MANUAL: no automated strategy is feasible for cycle [A]"
        );
    }

    #[test]
    fn test_mutable_self_loop_is_lazy() {
        let graph = build_graph(
            vec![DependencyEdge::new("A", "A", InjectionKind::Setter, true)],
            vec![Component::new("A")],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
    }

    #[test]
    fn test_same_target_prefers_field_over_setter_over_constructor() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Constructor, true),
                DependencyEdge::new("A", "B", InjectionKind::Setter, true),
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "C", InjectionKind::Constructor, false),
                DependencyEdge::new("C", "A", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B"), Component::new("C")],
        )
        .unwrap();

        let plan = StrategySelector::default().select(&cycle(&["A", "B", "C"]), &graph);
        assert_eq!(plan.strategy(), BreakStrategy::LazyInjection);
        assert_eq!(
            plan.edge().map(|e| e.injection_kind),
            Some(InjectionKind::Field)
        );
        assert!(plan
            .rationale()
            .ends_with("; other injections on this hop remain: CONSTRUCTOR, SETTER"));
    }

    #[test]
    fn test_forced_strategy_only_checks_itself() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Constructor, false),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();
        let c = cycle(&["A", "B"]);

        let forced_method =
            StrategySelector::new(StrategyMode::Forced(BreakStrategy::MethodExtraction))
                .select(&c, &graph);
        assert_eq!(forced_method.strategy(), BreakStrategy::MethodExtraction);
        assert_eq!(forced_method.edge().map(|e| e.to.as_str()), Some("A"));

        let forced_interface =
            StrategySelector::new(StrategyMode::Forced(BreakStrategy::InterfaceExtraction))
                .select(&c, &graph);
        assert!(forced_interface.is_manual());
        assert_eq!(
            forced_interface.rationale(),
            "MANUAL: forced strategy INTERFACE_EXTRACTION is not feasible on any edge of cycle \
             [A -> B]"
        );

        let forced_lazy = StrategySelector::new(StrategyMode::Forced(BreakStrategy::LazyInjection))
            .select(&c, &graph);
        assert_eq!(forced_lazy.edge().map(|e| e.to.as_str()), Some("B"));
    }

    #[test]
    fn test_forced_manual() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("B", "A", InjectionKind::Field, true),
            ],
            vec![Component::new("A"), Component::new("B")],
        )
        .unwrap();

        let plan = StrategySelector::new(StrategyMode::Forced(BreakStrategy::Manual))
            .select(&cycle(&["A", "B"]), &graph);
        assert!(plan.is_manual());
        assert_eq!(plan.edge(), None);
    }

    #[test]
    fn test_comparator_orders_by_target_then_kind() {
        let ab_field = DependencyEdge::new("A", "B", InjectionKind::Field, true);
        let ab_setter = DependencyEdge::new("A", "B", InjectionKind::Setter, true);
        let ca_ctor = DependencyEdge::new("C", "A", InjectionKind::Constructor, true);

        assert_eq!(compare_break_candidates(&ca_ctor, &ab_field), Ordering::Less);
        assert_eq!(compare_break_candidates(&ab_field, &ab_setter), Ordering::Less);
        assert_eq!(compare_break_candidates(&ab_field, &ab_field), Ordering::Equal);
    }
}
