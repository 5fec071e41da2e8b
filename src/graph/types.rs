//! The validated, read-only dependency graph

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::core::{Component, DependencyEdge, EdgeKey, InjectionKind};

type Adjacency = Vec<Vec<(NodeIndex, EdgeIndex)>>;

/// Components and dependency edges after validation
///
/// Nodes are stored in ascending id order, so comparing two `NodeIndex`
/// values compares the ids they stand for. Outgoing edges of every node are
/// indexed in `(to, injection_kind)` order for deterministic traversal.
#[derive(Debug, Clone)]
pub struct Graph {
    graph: DiGraph<Component, DependencyEdge>,
    node_indices: HashMap<String, NodeIndex>,
    outgoing: Adjacency,
}

/// Sorted outgoing adjacency for every node of `graph`
fn index_outgoing(graph: &DiGraph<Component, DependencyEdge>) -> Adjacency {
    graph
        .node_indices()
        .map(|node| {
            let mut edges: Vec<(NodeIndex, EdgeIndex)> =
                graph.edges(node).map(|e| (e.target(), e.id())).collect();
            edges.sort_by_key(|&(target, e)| (target, graph[e].injection_kind));
            edges
        })
        .collect()
}

impl Graph {
    /// `graph` must hold its nodes in ascending id order
    pub(super) fn from_parts(
        graph: DiGraph<Component, DependencyEdge>,
        node_indices: HashMap<String, NodeIndex>,
    ) -> Self {
        let outgoing = index_outgoing(&graph);
        Self {
            graph,
            node_indices,
            outgoing,
        }
    }

    /// Underlying petgraph representation, for rendering and interop
    pub fn inner(&self) -> &DiGraph<Component, DependencyEdge> {
        &self.graph
    }

    pub fn component_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    pub fn component(&self, idx: NodeIndex) -> &Component {
        &self.graph[idx]
    }

    pub fn component_by_id(&self, id: &str) -> Option<&Component> {
        self.node_index(id).map(|idx| &self.graph[idx])
    }

    /// Node indices in ascending id order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Components in ascending id order
    pub fn components(&self) -> impl Iterator<Item = &Component> + '_ {
        self.graph.node_weights()
    }

    /// All edges, grouped by source in id order and sorted by
    /// `(to, injection_kind)` within each source
    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> + '_ {
        self.outgoing
            .iter()
            .flat_map(move |list| list.iter().map(move |&(_, e)| &self.graph[e]))
    }

    /// Outgoing edges of `idx` with their target node, sorted by
    /// `(to, injection_kind)`
    pub fn outgoing(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &DependencyEdge)> + '_ {
        self.outgoing[idx.index()]
            .iter()
            .map(move |&(target, e)| (target, &self.graph[e]))
    }

    /// Distinct successors of `idx` in ascending id order
    pub fn successors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut successors: Vec<NodeIndex> = self.outgoing(idx).map(|(to, _)| to).collect();
        successors.dedup();
        successors
    }

    /// Every physical edge `from -> to`, in injection kind order
    pub fn edges_between(&self, from: &str, to: &str) -> Vec<&DependencyEdge> {
        let (Some(from_idx), Some(to_idx)) = (self.node_index(from), self.node_index(to)) else {
            return Vec::new();
        };
        self.outgoing(from_idx)
            .filter(|&(target, _)| target == to_idx)
            .map(|(_, edge)| edge)
            .collect()
    }

    pub fn edge(
        &self,
        from: &str,
        to: &str,
        injection_kind: InjectionKind,
    ) -> Option<&DependencyEdge> {
        self.edges_between(from, to)
            .into_iter()
            .find(|edge| edge.injection_kind == injection_kind)
    }

    pub fn has_self_loop(&self, idx: NodeIndex) -> bool {
        self.outgoing(idx).any(|(to, _)| to == idx)
    }

    /// A copy of this graph without the given physical edges
    pub fn without_edges<'a>(&self, removed: impl IntoIterator<Item = &'a EdgeKey>) -> Graph {
        let removed: HashSet<&EdgeKey> = removed.into_iter().collect();
        let mut graph = self.graph.clone();
        graph.retain_edges(|g, e| !removed.contains(&g[e].key()));

        Graph::from_parts(graph, self.node_indices.clone())
    }
}
