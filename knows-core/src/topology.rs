//! Node set and directed edge skeleton.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::{
    error::{GenerationError, Result},
    graph::NodeId,
    random::RandomSource,
};

/// Node counts drawn when the caller does not request one.
pub const DEFAULT_NODE_RANGE: RangeInclusive<usize> = 2..=100;

/// Node and edge counts of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Counts {
    pub(crate) nodes: usize,
    pub(crate) edges: usize,
}

/// Rejects counts that cannot be realised without self-loops.
pub(crate) fn check_counts(nodes: usize, edges: usize) -> Result<()> {
    if nodes == 0 {
        return Err(GenerationError::NoNodes { requested: nodes });
    }
    if edges > 0 && nodes < 2 {
        return Err(GenerationError::InsufficientNodes { nodes, edges });
    }
    Ok(())
}

/// Default edge counts for `nodes` nodes: `nodes / 2 ..= nodes`, or none when
/// a single node cannot host an edge.
fn default_edge_range(nodes: usize) -> RangeInclusive<usize> {
    if nodes < 2 { 0..=0 } else { nodes / 2..=nodes }
}

/// Fills in missing counts and validates the result.
///
/// Missing counts are drawn node count first, before any entity exists.
pub(crate) fn choose_counts(
    nodes: Option<usize>,
    edges: Option<usize>,
    rng: &mut RandomSource,
) -> Result<Counts> {
    let node_count = nodes.unwrap_or_else(|| rng.usize_in(DEFAULT_NODE_RANGE));
    let edge_count = edges.unwrap_or_else(|| rng.usize_in(default_edge_range(node_count)));
    check_counts(node_count, edge_count)?;
    debug!(
        nodes = node_count,
        edges = edge_count,
        nodes_defaulted = nodes.is_none(),
        edges_defaulted = edges.is_none(),
        "topology counts chosen"
    );
    Ok(Counts {
        nodes: node_count,
        edges: edge_count,
    })
}

/// Draws the endpoints of every edge slot in order.
///
/// Source and target are drawn independently; only the target is redrawn
/// while it equals the source. `counts` must have passed [`check_counts`].
pub(crate) fn draw_endpoints(counts: Counts, rng: &mut RandomSource) -> Vec<(NodeId, NodeId)> {
    let mut endpoints = Vec::with_capacity(counts.edges);
    if counts.nodes < 2 {
        return endpoints;
    }
    for _ in 0..counts.edges {
        let source = rng.index(counts.nodes);
        let mut target = rng.index(counts.nodes);
        while target == source {
            target = rng.index(counts.nodes);
        }
        endpoints.push((NodeId::from_index(source), NodeId::from_index(target)));
    }
    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::GenerationErrorCode;

    #[rstest]
    #[case::no_nodes(0, 0, GenerationErrorCode::NoNodes)]
    #[case::no_nodes_with_edges(0, 3, GenerationErrorCode::NoNodes)]
    #[case::single_node_edge(1, 1, GenerationErrorCode::InsufficientNodes)]
    fn infeasible_counts_are_structural(
        #[case] nodes: usize,
        #[case] edges: usize,
        #[case] code: GenerationErrorCode,
    ) {
        let mut rng = RandomSource::seeded(1);
        let err =
            choose_counts(Some(nodes), Some(edges), &mut rng).expect_err("counts are infeasible");
        assert_eq!(err.code(), code);
        assert!(err.is_structural());
    }

    #[test]
    fn single_node_without_edges_is_allowed() {
        let mut rng = RandomSource::seeded(1);
        let counts = choose_counts(Some(1), Some(0), &mut rng).expect("one isolated node is valid");
        assert_eq!(counts, Counts { nodes: 1, edges: 0 });
        assert!(draw_endpoints(counts, &mut rng).is_empty());
    }

    #[rstest]
    #[case(2, 50)]
    #[case(3, 200)]
    #[case(40, 400)]
    fn edges_never_loop(#[case] nodes: usize, #[case] edges: usize) {
        let mut rng = RandomSource::seeded(17);
        let counts = choose_counts(Some(nodes), Some(edges), &mut rng).expect("feasible counts");
        let endpoints = draw_endpoints(counts, &mut rng);
        assert_eq!(endpoints.len(), edges);
        for (source, target) in endpoints {
            assert_ne!(source, target);
            assert!(source.ordinal() <= nodes && target.ordinal() <= nodes);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(99)]
    fn defaults_fall_in_documented_ranges(#[case] seed: u64) {
        let mut rng = RandomSource::seeded(seed);
        let counts = choose_counts(None, None, &mut rng).expect("defaults are feasible");
        assert!(DEFAULT_NODE_RANGE.contains(&counts.nodes));
        assert!(default_edge_range(counts.nodes).contains(&counts.edges));
    }

    #[test]
    fn endpoint_draws_are_reproducible() {
        let counts = Counts { nodes: 10, edges: 30 };
        let first = draw_endpoints(counts, &mut RandomSource::seeded(5));
        let second = draw_endpoints(counts, &mut RandomSource::seeded(5));
        assert_eq!(first, second);
    }

    #[test]
    fn lone_node_defaults_to_no_edges() {
        let mut rng = RandomSource::seeded(3);
        let counts = choose_counts(Some(1), None, &mut rng).expect("defaults adapt to one node");
        assert_eq!(counts.edges, 0);
    }
}
