use std::collections::{HashMap, HashSet};
use std::ops::ControlFlow;

use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::scc::tarjan;
use crate::core::{Cycle, StronglyConnectedComponent};
use crate::graph::Graph;

/// Enumerates every elementary cycle inside one strongly connected component
///
/// Uses Johnson's algorithm restricted to the SCC's induced subgraph. Start
/// vertices are processed in ascending id order and each search only visits
/// vertices with a larger id, so every cycle is reported from its smallest
/// member exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleEnumerator {
    max_cycles: Option<usize>,
}

/// The per-SCC cycle budget was exhausted before enumeration finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Truncated {
    pub budget: usize,
}

/// Cycles found in one SCC, plus whether the budget cut the search short
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleEnumeration {
    cycles: Vec<Cycle>,
    truncated: Option<Truncated>,
}

impl CycleEnumeration {
    fn complete(cycles: Vec<Cycle>) -> Self {
        Self {
            cycles,
            truncated: None,
        }
    }

    /// Cycles sorted by canonical form
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }

    pub fn truncated(&self) -> Option<Truncated> {
        self.truncated
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated.is_some()
    }
}

struct CircuitFrame {
    node: usize,
    next: usize,
    closed: bool,
}

/// Johnson's CIRCUIT search rooted at `start`, run without recursion
///
/// `adjacency` holds local successor lists; only vertices flagged in
/// `in_component` are explored. `emit` receives each closed path and may stop
/// the search by returning `Break`.
fn circuits_from(
    start: usize,
    adjacency: &[Vec<usize>],
    in_component: &[bool],
    emit: &mut impl FnMut(&[usize]) -> ControlFlow<()>,
) -> ControlFlow<()> {
    let n = adjacency.len();
    let mut blocked = vec![false; n];
    let mut b_lists: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut path = vec![start];
    let mut frames = vec![CircuitFrame {
        node: start,
        next: 0,
        closed: false,
    }];
    blocked[start] = true;

    while let Some(frame) = frames.last_mut() {
        let v = frame.node;

        if frame.next < adjacency[v].len() {
            let w = adjacency[v][frame.next];
            frame.next += 1;

            if !in_component[w] {
                continue;
            }
            if w == start {
                frame.closed = true;
                emit(&path)?;
            } else if !blocked[w] {
                blocked[w] = true;
                path.push(w);
                frames.push(CircuitFrame {
                    node: w,
                    next: 0,
                    closed: false,
                });
            }
            continue;
        }

        let closed = frame.closed;
        frames.pop();
        path.pop();

        if closed {
            unblock(v, &mut blocked, &mut b_lists);
            if let Some(parent) = frames.last_mut() {
                parent.closed = true;
            }
        } else {
            for &w in &adjacency[v] {
                if in_component[w] && !b_lists[w].contains(&v) {
                    b_lists[w].push(v);
                }
            }
        }
    }

    ControlFlow::Continue(())
}

fn unblock(node: usize, blocked: &mut [bool], b_lists: &mut [Vec<usize>]) {
    let mut pending = vec![node];
    while let Some(u) = pending.pop() {
        if !blocked[u] {
            continue;
        }
        blocked[u] = false;
        pending.extend(std::mem::take(&mut b_lists[u]));
    }
}

/// Membership mask of the SCC containing `start` within the subgraph of
/// vertices `>= start`, or `None` when that SCC holds no cycle
fn component_from(start: usize, adjacency: &[Vec<usize>]) -> Option<Vec<bool>> {
    let shifted: Vec<Vec<usize>> = adjacency[start..]
        .iter()
        .map(|succ| {
            succ.iter()
                .filter(|&&w| w >= start)
                .map(|&w| w - start)
                .collect()
        })
        .collect();

    let members = tarjan(&shifted).into_iter().find(|c| c.contains(&0))?;
    if members.len() == 1 && !adjacency[start].contains(&start) {
        return None;
    }

    let mut in_component = vec![false; adjacency.len()];
    for m in members {
        in_component[m + start] = true;
    }
    Some(in_component)
}

impl CycleEnumerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `max_cycles` cycles per SCC and report [`Truncated`]
    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    pub fn max_cycles(&self) -> Option<usize> {
        self.max_cycles
    }

    /// Enumerate the elementary cycles of `scc`
    ///
    /// Trivial SCCs yield nothing and a self-loop singleton yields its single
    /// length-1 cycle without running the search. Results are sorted by
    /// canonical form.
    pub fn enumerate(&self, graph: &Graph, scc: &StronglyConnectedComponent) -> CycleEnumeration {
        if scc.is_trivial() {
            return CycleEnumeration::complete(Vec::new());
        }

        let members = scc.members();
        let mut cycles: Vec<Cycle> = Vec::new();
        let mut seen: HashSet<Cycle> = HashSet::new();
        let mut truncated = None;
        let budget = self.max_cycles;

        let mut record = |cycle: Cycle| -> ControlFlow<()> {
            if seen.contains(&cycle) {
                return ControlFlow::Continue(());
            }
            if let Some(budget) = budget
                && cycles.len() >= budget
            {
                truncated = Some(Truncated { budget });
                return ControlFlow::Break(());
            }
            trace!(%cycle, "elementary cycle");
            seen.insert(cycle.clone());
            cycles.push(cycle);
            ControlFlow::Continue(())
        };

        if members.len() == 1 {
            let _ = record(Cycle::canonical(members.to_vec()));
        } else {
            let adjacency = local_adjacency(graph, members);
            for start in 0..members.len() {
                let Some(in_component) = component_from(start, &adjacency) else {
                    continue;
                };

                let mut emit = |path: &[usize]| {
                    record(Cycle::canonical(
                        path.iter().map(|&i| members[i].clone()).collect(),
                    ))
                };
                if circuits_from(start, &adjacency, &in_component, &mut emit).is_break() {
                    break;
                }
            }
        }

        cycles.sort();
        if let Some(t) = truncated {
            warn!(
                scc = scc.min_id().unwrap_or_default(),
                budget = t.budget,
                "cycle enumeration truncated"
            );
        }
        debug!(
            scc = scc.min_id().unwrap_or_default(),
            size = members.len(),
            cycles = cycles.len(),
            "enumerated cycles"
        );

        CycleEnumeration { cycles, truncated }
    }
}

/// Successor lists of the SCC's induced subgraph in local `0..k` indices
///
/// Members are sorted by id and graph node order is id order, so local
/// successor lists stay sorted ascending.
fn local_adjacency(graph: &Graph, members: &[String]) -> Vec<Vec<usize>> {
    let nodes: Vec<NodeIndex> = members
        .iter()
        .filter_map(|id| graph.node_index(id))
        .collect();
    let local: HashMap<NodeIndex, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    nodes
        .iter()
        .map(|&node| {
            graph
                .successors(node)
                .into_iter()
                .filter_map(|succ| local.get(&succ).copied())
                .collect()
        })
        .collect()
}
