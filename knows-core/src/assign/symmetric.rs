//! Reverse-pair cache for symmetric edge properties.

use std::collections::HashMap;

use crate::graph::{NodeId, Properties, PropertyValue};

/// Symmetric values fixed by the first edge created between two nodes.
///
/// Keys ignore direction, so `(u, v)`, `(v, u)` and repeated `(u, v)` edges
/// all share one entry. The cache lives for a single generation run.
#[derive(Debug, Default)]
pub(crate) struct SymmetricCache {
    entries: HashMap<(NodeId, NodeId), Properties>,
}

fn pair_key(source: NodeId, target: NodeId) -> (NodeId, NodeId) {
    if source <= target {
        (source, target)
    } else {
        (target, source)
    }
}

impl SymmetricCache {
    /// Value already fixed for `name` between the two endpoints.
    pub(crate) fn lookup(
        &self,
        source: NodeId,
        target: NodeId,
        name: &str,
    ) -> Option<&PropertyValue> {
        self.entries
            .get(&pair_key(source, target))
            .and_then(|values| values.get(name))
    }

    /// Whether an earlier edge already fixed the pair's values.
    pub(crate) fn contains(&self, source: NodeId, target: NodeId) -> bool {
        self.entries.contains_key(&pair_key(source, target))
    }

    /// Records the symmetric values of the first edge between two endpoints.
    ///
    /// Later registrations for the same pair are ignored.
    pub(crate) fn register(&mut self, source: NodeId, target: NodeId, values: Properties) {
        self.entries
            .entry(pair_key(source, target))
            .or_insert(values);
    }

    /// Number of endpoint pairs with fixed values.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(ordinal: usize) -> NodeId {
        NodeId::from_ordinal(ordinal).expect("ordinal must be non-zero")
    }

    fn values(date: &str) -> Properties {
        let mut values = Properties::new();
        values.insert("since".to_owned(), PropertyValue::String(date.to_owned()));
        values
    }

    #[test]
    fn lookup_ignores_direction() {
        let mut cache = SymmetricCache::default();
        cache.register(id(2), id(1), values("2020-01-01"));
        let expected = PropertyValue::String("2020-01-01".to_owned());
        assert_eq!(cache.lookup(id(1), id(2), "since"), Some(&expected));
        assert_eq!(cache.lookup(id(2), id(1), "since"), Some(&expected));
        assert!(cache.lookup(id(1), id(3), "since").is_none());
    }

    #[test]
    fn first_registration_wins() {
        let mut cache = SymmetricCache::default();
        cache.register(id(1), id(2), values("2020-01-01"));
        cache.register(id(2), id(1), values("1999-12-31"));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.lookup(id(1), id(2), "since"),
            Some(&PropertyValue::String("2020-01-01".to_owned()))
        );
    }

    #[test]
    fn contains_tracks_registered_pairs() {
        let mut cache = SymmetricCache::default();
        assert!(!cache.contains(id(3), id(4)));
        cache.register(id(4), id(3), Properties::new());
        assert!(cache.contains(id(3), id(4)));
    }
}
