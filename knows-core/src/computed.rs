//! Node properties derived from the final edge list.

use indexmap::IndexMap;

use crate::{
    graph::{self, Edge, Node, PropertyValue},
    schema::ComputedKind,
};

/// Writes every computed property onto `nodes`, after the sampled ones.
///
/// Must run once all edges exist. Consumes no randomness.
pub(crate) fn apply(
    computed: &IndexMap<String, ComputedKind>,
    nodes: &mut [Node],
    edges: &[Edge],
) {
    if computed.is_empty() {
        return;
    }
    let neighbours = graph::neighbour_sets(nodes.len(), edges);
    for (node, adjacent) in nodes.iter_mut().zip(&neighbours) {
        for (name, kind) in computed {
            let value = match kind {
                ComputedKind::Degree => {
                    PropertyValue::Integer(i64::try_from(adjacent.len()).unwrap_or(i64::MAX))
                }
            };
            node.properties_mut().insert(name.clone(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::{Graph, NodeId};

    fn id(ordinal: usize) -> NodeId {
        NodeId::from_ordinal(ordinal).expect("ordinal must be non-zero")
    }

    fn nodes(count: usize) -> Vec<Node> {
        (1..=count).map(|k| Node::new(id(k), "Node")).collect()
    }

    #[test]
    fn degree_counts_distinct_neighbours_in_both_directions() {
        let edges = [
            Edge::new(id(1), id(2), "edge"),
            Edge::new(id(2), id(3), "edge"),
            Edge::new(id(1), id(3), "edge"),
        ];
        let mut nodes = nodes(4);
        let mut computed = IndexMap::new();
        computed.insert("connectionCount".to_owned(), ComputedKind::Degree);
        apply(&computed, &mut nodes, &edges);

        let degrees: Vec<_> = nodes
            .iter()
            .map(|node| node.property("connectionCount").and_then(PropertyValue::as_integer))
            .collect();
        assert_eq!(degrees, [Some(2), Some(2), Some(2), Some(0)]);
    }

    #[test]
    fn parallel_and_reverse_edges_count_once() {
        let edges = [
            Edge::new(id(1), id(2), "edge"),
            Edge::new(id(1), id(2), "edge"),
            Edge::new(id(2), id(1), "edge"),
        ];
        let mut nodes = nodes(2);
        let mut computed = IndexMap::new();
        computed.insert("links".to_owned(), ComputedKind::Degree);
        apply(&computed, &mut nodes, &edges);
        assert!(
            nodes
                .iter()
                .all(|node| node.property("links").and_then(PropertyValue::as_integer) == Some(1))
        );
    }

    #[test]
    fn no_computed_properties_leaves_nodes_untouched() {
        let mut nodes = nodes(2);
        apply(&IndexMap::new(), &mut nodes, &[Edge::new(id(1), id(2), "edge")]);
        assert!(nodes.iter().all(|node| node.properties().is_empty()));
    }

    #[test]
    fn stored_degrees_match_graph_adjacency() {
        let edges = vec![
            Edge::new(id(1), id(2), "edge"),
            Edge::new(id(3), id(1), "edge"),
            Edge::new(id(1), id(2), "edge"),
            Edge::new(id(4), id(3), "edge"),
        ];
        let mut nodes = nodes(5);
        let mut computed = IndexMap::new();
        computed.insert("degree".to_owned(), ComputedKind::Degree);
        apply(&computed, &mut nodes, &edges);

        let graph = Graph::from_parts("Node", "edge", nodes, edges);
        for node in graph.nodes() {
            let stored = node.property("degree").and_then(PropertyValue::as_integer);
            let expected = i64::try_from(graph.degree(node.id())).ok();
            assert_eq!(stored, expected, "node {}", node.id());
        }
    }
}
