use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::core::StronglyConnectedComponent;
use crate::graph::Graph;

/// Detector for strongly connected components
///
/// Runs an iterative Tarjan traversal so that long dependency chains cannot
/// exhaust the native stack. Roots are visited in ascending id order and
/// successors in `(to, injection_kind)` order, which makes the result
/// independent of the order edges were supplied in.
#[derive(Debug, Default, Clone, Copy)]
pub struct SccDetector;

/// Per-node Tarjan bookkeeping
#[derive(Debug, Clone, Copy)]
struct NodeState {
    index: usize,
    low_link: usize,
    on_stack: bool,
}

/// One level of the explicit DFS stack
struct Frame {
    node: usize,
    successors: Vec<usize>,
    next: usize,
}

/// Tarjan's algorithm over a dense `0..n` adjacency list
///
/// Components are returned in the order they complete (reverse topological
/// order), members in the order they were popped.
pub(crate) fn tarjan(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let n = adjacency.len();
    let mut state: Vec<Option<NodeState>> = vec![None; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    let mut next_index = 0;

    for root in 0..n {
        if state[root].is_some() {
            continue;
        }

        let mut frames = vec![visit(root, adjacency, &mut state, &mut stack, &mut next_index)];

        while let Some(frame) = frames.last_mut() {
            if frame.next < frame.successors.len() {
                let w = frame.successors[frame.next];
                frame.next += 1;

                let w_state = state[w];
                match w_state {
                    None => {
                        let child = visit(w, adjacency, &mut state, &mut stack, &mut next_index);
                        frames.push(child);
                    }
                    Some(ws) if ws.on_stack => {
                        let v = frame.node;
                        if let Some(vs) = state[v].as_mut() {
                            vs.low_link = vs.low_link.min(ws.index);
                        }
                    }
                    Some(_) => {}
                }
                continue;
            }

            let v = frame.node;
            frames.pop();

            let Some(vs) = state[v] else {
                continue;
            };

            if let Some(parent) = frames.last() {
                if let Some(ps) = state[parent.node].as_mut() {
                    ps.low_link = ps.low_link.min(vs.low_link);
                }
            }

            if vs.low_link == vs.index {
                let mut component = Vec::new();
                while let Some(w) = stack.pop() {
                    if let Some(ws) = state[w].as_mut() {
                        ws.on_stack = false;
                    }
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    components
}

fn visit(
    node: usize,
    adjacency: &[Vec<usize>],
    state: &mut [Option<NodeState>],
    stack: &mut Vec<usize>,
    next_index: &mut usize,
) -> Frame {
    state[node] = Some(NodeState {
        index: *next_index,
        low_link: *next_index,
        on_stack: true,
    });
    *next_index += 1;
    stack.push(node);

    Frame {
        node,
        successors: adjacency[node].clone(),
        next: 0,
    }
}

impl SccDetector {
    pub fn new() -> Self {
        Self
    }

    /// Partition every component of `graph` into strongly connected components
    ///
    /// The result is sorted by the smallest id each SCC contains; members are
    /// sorted by id. Singleton SCCs are flagged non-trivial when the component
    /// has a self-edge.
    pub fn detect(&self, graph: &Graph) -> Vec<StronglyConnectedComponent> {
        let adjacency: Vec<Vec<usize>> = graph
            .node_indices()
            .map(|idx| {
                graph
                    .successors(idx)
                    .into_iter()
                    .map(|s| s.index())
                    .collect()
            })
            .collect();

        let mut raw = tarjan(&adjacency);
        for members in &mut raw {
            members.sort_unstable();
        }
        // Node index order is id order, so sorting by first member sorts by min id
        raw.sort_unstable_by_key(|members| members[0]);

        let sccs: Vec<StronglyConnectedComponent> = raw
            .into_iter()
            .map(|members| {
                let self_loop =
                    members.len() == 1 && graph.has_self_loop(NodeIndex::new(members[0]));
                let ids = members
                    .into_iter()
                    .map(|m| graph.component(NodeIndex::new(m)).id.clone())
                    .collect();
                StronglyConnectedComponent::new(ids, self_loop)
            })
            .collect();

        debug!(
            sccs = sccs.len(),
            non_trivial = sccs.iter().filter(|s| !s.is_trivial()).count(),
            "strongly connected components detected"
        );

        sccs
    }
}
