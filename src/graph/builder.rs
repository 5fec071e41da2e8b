use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use super::types::Graph;
use crate::core::{Component, DependencyEdge, EdgeKey};
use crate::error::GraphError;

/// Builder for constructing a validated [`Graph`] from flat lists
///
/// Validation is all-or-nothing: the first duplicate or dangling reference
/// aborts the build and no partial graph is produced.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    components: Vec<Component>,
    edges: Vec<DependencyEdge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_components(mut self, components: impl IntoIterator<Item = Component>) -> Self {
        self.components.extend(components);
        self
    }

    pub fn with_edges(mut self, edges: impl IntoIterator<Item = DependencyEdge>) -> Self {
        self.edges.extend(edges);
        self
    }

    pub fn add_component(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn add_edge(&mut self, edge: DependencyEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    /// Validate the input and build the graph
    ///
    /// Fails with [`GraphError::DuplicateEdge`] on a repeated
    /// `(from, to, injection_kind)` triple, [`GraphError::DanglingReference`]
    /// when an edge names an unknown component and
    /// [`GraphError::DuplicateComponent`] on a repeated component id.
    pub fn build(self) -> Result<Graph, GraphError> {
        let Self {
            mut components,
            edges,
        } = self;

        // Insert nodes in id order so node indices follow id order
        components.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(pair) = components.windows(2).find(|w| w[0].id == w[1].id) {
            return Err(GraphError::DuplicateComponent {
                id: pair[0].id.clone(),
            });
        }

        let mut graph = DiGraph::with_capacity(components.len(), edges.len());
        let mut node_indices: HashMap<String, NodeIndex> = HashMap::with_capacity(components.len());
        for component in components {
            let id = component.id.clone();
            let idx = graph.add_node(component);
            node_indices.insert(id, idx);
        }

        let mut seen: HashSet<EdgeKey> = HashSet::with_capacity(edges.len());
        for edge in edges {
            let Some(&from_idx) = node_indices.get(&edge.from) else {
                return Err(GraphError::DanglingReference {
                    missing: edge.from.clone(),
                    from: edge.from,
                    to: edge.to,
                });
            };
            let Some(&to_idx) = node_indices.get(&edge.to) else {
                return Err(GraphError::DanglingReference {
                    missing: edge.to.clone(),
                    from: edge.from,
                    to: edge.to,
                });
            };

            if !seen.insert(edge.key()) {
                return Err(GraphError::DuplicateEdge {
                    from: edge.from,
                    to: edge.to,
                    injection_kind: edge.injection_kind,
                });
            }

            graph.add_edge(from_idx, to_idx, edge);
        }

        debug!(
            components = graph.node_count(),
            edges = graph.edge_count(),
            "built dependency graph"
        );

        Ok(Graph::from_parts(graph, node_indices))
    }
}

/// Build a graph from an edge list and the components it references
pub fn build_graph(
    edges: Vec<DependencyEdge>,
    components: Vec<Component>,
) -> Result<Graph, GraphError> {
    GraphBuilder::new()
        .with_components(components)
        .with_edges(edges)
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::InjectionKind;

    fn components(ids: &[&str]) -> Vec<Component> {
        ids.iter().map(|id| Component::new(*id)).collect()
    }

    #[test]
    fn test_empty_input_is_valid() {
        let graph = build_graph(vec![], vec![]).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_nodes_follow_id_order_regardless_of_input_order() {
        let graph = build_graph(vec![], components(&["C", "A", "B"])).unwrap();
        let ids: Vec<&str> = graph.components().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(graph.node_index("A").map(|i| i.index()), Some(0));
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let result = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("A", "B", InjectionKind::Field, false),
            ],
            components(&["A", "B"]),
        );

        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateEdge {
                from: "A".to_string(),
                to: "B".to_string(),
                injection_kind: InjectionKind::Field,
            }
        );
    }

    #[test]
    fn test_same_pair_different_kinds_allowed() {
        let graph = build_graph(
            vec![
                DependencyEdge::new("A", "B", InjectionKind::Field, true),
                DependencyEdge::new("A", "B", InjectionKind::Constructor, false),
            ],
            components(&["A", "B"]),
        )
        .unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let result = build_graph(
            vec![DependencyEdge::new("A", "Z", InjectionKind::Setter, true)],
            components(&["A"]),
        );

        assert_eq!(
            result.unwrap_err(),
            GraphError::DanglingReference {
                from: "A".to_string(),
                to: "Z".to_string(),
                missing: "Z".to_string(),
            }
        );
    }

    #[test]
    fn test_dangling_source_rejected() {
        let result = build_graph(
            vec![DependencyEdge::new("Q", "A", InjectionKind::Setter, true)],
            components(&["A"]),
        );

        assert!(matches!(
            result,
            Err(GraphError::DanglingReference { missing, .. }) if missing == "Q"
        ));
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let result = build_graph(vec![], components(&["A", "B", "A"]));
        assert_eq!(
            result.unwrap_err(),
            GraphError::DuplicateComponent {
                id: "A".to_string()
            }
        );
    }

    #[test]
    fn test_self_edge_is_legal() {
        let graph = build_graph(
            vec![DependencyEdge::new("A", "A", InjectionKind::Constructor, false)],
            components(&["A"]),
        )
        .unwrap();
        assert!(graph.has_self_loop(graph.node_index("A").unwrap()));
    }

    #[test]
    fn test_incremental_builder() {
        let mut builder = GraphBuilder::new();
        builder
            .add_component(Component::new("A"))
            .add_component(Component::new("B").with_extractable_surface(true))
            .add_edge(DependencyEdge::new("A", "B", InjectionKind::Field, true));

        let graph = builder.build().unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.component_by_id("B").unwrap().has_extractable_surface);
    }
}
