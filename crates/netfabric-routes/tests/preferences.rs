//! Route preference integration tests
//!
//! Exercises duplicate resolution and tie-breaking on loaded feeds, and the
//! lock-free sharing of snapshots across reader threads.

use std::sync::Arc;

use netfabric_core::{Fact, Issue, Protocol, QueryError};
use netfabric_routes::{best_source, effective_table, resolve};
use netfabric_store::Loader;

#[test]
fn test_duplicate_static_entry_resolves_to_lowest() {
    let snapshot = Loader::load([
        Fact::node("R11"),
        Fact::admin_distance("R11", "static", 1),
        Fact::admin_distance("R11", "bgp", 2),
        Fact::admin_distance("R11", "static", 3),
    ])
    .unwrap();

    // The duplicate ("R11", "static") pair is surfaced, never repaired
    // silently
    let duplicates: Vec<_> = snapshot
        .warnings()
        .iter()
        .filter(|i| matches!(i, Issue::DuplicateAdminDistance { .. }))
        .collect();
    assert_eq!(duplicates.len(), 1);

    let node = "R11".into();
    let effective = resolve(&snapshot, &node).unwrap();
    assert_eq!(effective.get(&Protocol::from("static")), Some(&1));
    assert_eq!(effective.get(&Protocol::from("bgp")), Some(&2));

    assert_eq!(best_source(&snapshot, &node).unwrap(), "static".into());
}

#[test]
fn test_per_node_rankings_are_independent() {
    let snapshot = Loader::load([
        Fact::node("R11"),
        Fact::node("R12"),
        Fact::admin_distance("R11", "static", 1),
        Fact::admin_distance("R11", "ospf", 110),
        Fact::admin_distance("R12", "ospf", 5),
        Fact::admin_distance("R12", "static", 10),
    ])
    .unwrap();

    assert_eq!(
        best_source(&snapshot, &"R11".into()).unwrap(),
        "static".into()
    );
    assert_eq!(
        best_source(&snapshot, &"R12".into()).unwrap(),
        "ospf".into()
    );

    let table = effective_table(&snapshot);
    assert_eq!(table.len(), 2);
    assert_eq!(table[&"R11".into()][&"ospf".into()], 110);
    assert_eq!(table[&"R12".into()][&"ospf".into()], 5);
}

#[test]
fn test_no_route_source_is_recoverable() {
    let snapshot = Loader::load([Fact::node("R11"), Fact::node("R12")]).unwrap();

    // The failed query leaves the snapshot fully usable
    assert!(matches!(
        best_source(&snapshot, &"R11".into()),
        Err(QueryError::NoRouteSource(_))
    ));
    assert!(resolve(&snapshot, &"R11".into()).unwrap().is_empty());
    assert_eq!(snapshot.node_count(), 2);
}

#[test]
fn test_concurrent_readers_agree() {
    let snapshot = Arc::new(
        Loader::load([
            Fact::node("R11"),
            Fact::admin_distance("R11", "bgp", 20),
            Fact::admin_distance("R11", "rip", 20),
            Fact::admin_distance("R11", "ospf", 110),
        ])
        .unwrap(),
    );

    let expected = best_source(&snapshot, &"R11".into()).unwrap();
    assert_eq!(expected, "bgp".into());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let snapshot = Arc::clone(&snapshot);
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    assert_eq!(best_source(&snapshot, &"R11".into()).unwrap(), expected);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
