//! Benchmark parameter types.

use std::fmt;

/// Node and edge counts of one generation benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateBenchParams {
    /// Number of nodes to generate.
    pub nodes: usize,
    /// Number of edges to generate.
    pub edges: usize,
}

impl GenerateBenchParams {
    /// Parameters with `edges_per_node` edges for every node.
    #[must_use]
    pub const fn with_density(nodes: usize, edges_per_node: usize) -> Self {
        Self {
            nodes,
            edges: nodes.saturating_mul(edges_per_node),
        }
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},e={}", self.nodes, self.edges)
    }
}
