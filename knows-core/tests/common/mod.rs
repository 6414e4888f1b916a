use std::num::NonZeroUsize;

use chrono::{NaiveDate, NaiveDateTime};
use knows_core::{GraphGenerator, GraphGeneratorBuilder, RandomSource, TextKind, TextSource};

/// Returns `<kind>#<n>`, drawing `n` from the run's random stream.
#[derive(Clone, Copy, Debug, Default)]
pub struct Echo;

impl TextSource for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn text(&self, kind: TextKind, _: Option<NonZeroUsize>, rng: &mut RandomSource) -> String {
        format!("{kind}#{}", rng.int_in(0..=9_999))
    }
}

#[must_use]
pub fn reference_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 15)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid reference instant")
}

#[must_use]
pub fn generator(nodes: usize, edges: usize, seed: u64) -> GraphGenerator {
    GraphGeneratorBuilder::new()
        .with_node_count(nodes)
        .with_edge_count(edges)
        .with_seed(seed)
        .with_reference_time(reference_time())
        .build()
        .expect("counts must be feasible")
}
