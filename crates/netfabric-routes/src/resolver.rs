//! Effective-distance resolution
//!
//! Queries here are pure functions over the immutable snapshot; they hold
//! no state and may run concurrently with no coordination. Determinism
//! rules: duplicate `(node, protocol)` entries resolve to the lowest
//! distance, and equal-lowest ties between protocols go to the
//! first-declared entry, so results are reproducible from input ordering.

use std::collections::BTreeMap;

use tracing::debug;

use netfabric_core::{NodeId, Protocol, QueryError, QueryResult};
use netfabric_store::Snapshot;

/// The effective administrative distance per protocol on one node
///
/// Duplicate declarations have already been resolved: each protocol maps
/// to the lowest distance declared for it. A declared node with no
/// entries resolves to an empty map; an unknown node fails with
/// [`QueryError::NotFound`].
pub fn resolve(snapshot: &Snapshot, node: &NodeId) -> QueryResult<BTreeMap<Protocol, u32>> {
    let mut effective: BTreeMap<Protocol, u32> = BTreeMap::new();
    for entry in snapshot.admin_distances_of(node)? {
        effective
            .entry(entry.protocol.clone())
            .and_modify(|d| *d = (*d).min(entry.distance))
            .or_insert(entry.distance);
    }
    Ok(effective)
}

/// The most trusted routing-information source on one node
///
/// Returns the protocol with the globally lowest effective distance.
/// Fails with [`QueryError::NoRouteSource`] when the node has zero
/// administrative-distance entries.
pub fn best_source(snapshot: &Snapshot, node: &NodeId) -> QueryResult<Protocol> {
    let effective = resolve(snapshot, node)?;
    let Some(best) = effective.values().min().copied() else {
        return Err(QueryError::NoRouteSource(node.clone()));
    };

    // First-declared entry among the protocols tied at the lowest
    // effective distance
    let winner = snapshot
        .admin_distances_of(node)?
        .into_iter()
        .find(|entry| effective.get(&entry.protocol) == Some(&best))
        .map(|entry| entry.protocol.clone())
        .ok_or_else(|| QueryError::NoRouteSource(node.clone()))?;

    debug!(%node, protocol = %winner, distance = best, "best route source");
    Ok(winner)
}

/// Effective distances for every declared node
///
/// Diagnostic surface: nodes without entries map to empty tables. The
/// outer map is node-ordered, the inner maps protocol-ordered.
pub fn effective_table(snapshot: &Snapshot) -> BTreeMap<NodeId, BTreeMap<Protocol, u32>> {
    snapshot
        .node_ids()
        .filter_map(|node| Some((node.clone(), resolve(snapshot, node).ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netfabric_core::Fact;
    use netfabric_store::Loader;

    fn snapshot_with(entries: &[(&str, &str, u32)]) -> Snapshot {
        let mut facts = vec![Fact::node("R11"), Fact::node("R12")];
        for (node, protocol, distance) in entries {
            facts.push(Fact::admin_distance(*node, *protocol, *distance));
        }
        Loader::load(facts).unwrap()
    }

    #[test]
    fn test_resolve_lowest_wins() {
        let snapshot = snapshot_with(&[
            ("R11", "static", 1),
            ("R11", "bgp", 2),
            ("R11", "static", 3),
        ]);

        let effective = resolve(&snapshot, &"R11".into()).unwrap();
        assert_eq!(effective.get(&"static".into()), Some(&1));
        assert_eq!(effective.get(&"bgp".into()), Some(&2));
        assert_eq!(effective.len(), 2);
    }

    #[test]
    fn test_resolve_empty_for_node_without_entries() {
        let snapshot = snapshot_with(&[("R11", "static", 1)]);
        assert!(resolve(&snapshot, &"R12".into()).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_unknown_node() {
        let snapshot = snapshot_with(&[]);
        assert!(matches!(
            resolve(&snapshot, &"R99".into()),
            Err(QueryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_best_source_prefers_lowest_distance() {
        let snapshot = snapshot_with(&[
            ("R11", "ospf", 110),
            ("R11", "bgp", 20),
            ("R11", "static", 1),
        ]);

        assert_eq!(
            best_source(&snapshot, &"R11".into()).unwrap(),
            "static".into()
        );
    }

    #[test]
    fn test_best_source_duplicate_entries() {
        // The scenario from the feed's data-quality notes: a duplicate
        // static entry with a worse distance must not displace the winner.
        let snapshot = snapshot_with(&[
            ("R11", "static", 1),
            ("R11", "bgp", 2),
            ("R11", "static", 3),
        ]);

        assert_eq!(
            best_source(&snapshot, &"R11".into()).unwrap(),
            "static".into()
        );
        assert_eq!(snapshot.warnings().len(), 1);
    }

    #[test]
    fn test_best_source_tie_goes_to_first_declared() {
        let snapshot = snapshot_with(&[
            ("R11", "ospf", 110),
            ("R11", "bgp", 20),
            ("R11", "rip", 20),
        ]);

        // bgp and rip tie at 20; bgp was declared first
        assert_eq!(best_source(&snapshot, &"R11".into()).unwrap(), "bgp".into());
    }

    #[test]
    fn test_best_source_no_entries() {
        let snapshot = snapshot_with(&[("R11", "static", 1)]);
        assert!(matches!(
            best_source(&snapshot, &"R12".into()),
            Err(QueryError::NoRouteSource(_))
        ));
    }

    #[test]
    fn test_best_source_deterministic() {
        let snapshot = snapshot_with(&[
            ("R11", "bgp", 20),
            ("R11", "rip", 20),
            ("R11", "ospf", 110),
        ]);

        let first = best_source(&snapshot, &"R11".into()).unwrap();
        for _ in 0..10 {
            assert_eq!(best_source(&snapshot, &"R11".into()).unwrap(), first);
        }
    }

    #[test]
    fn test_effective_table_covers_all_nodes() {
        let snapshot = snapshot_with(&[("R11", "static", 1)]);

        let table = effective_table(&snapshot);
        assert_eq!(table.len(), 2);
        assert_eq!(table[&"R11".into()].len(), 1);
        assert!(table[&"R12".into()].is_empty());
    }
}
