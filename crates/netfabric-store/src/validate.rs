//! Whole-store consistency checks
//!
//! Runs after all facts are declared, as the second phase of the load
//! transaction. Checks run in a fixed order and report within each check in
//! declaration order (identifier order for keyed tables), so an issue list
//! is fully deterministic for a given feed.
//!
//! Checks:
//!
//! 1. every interface's owning node exists (fatal);
//! 2. every link endpoint is a declared interface (fatal);
//! 3. a link with no reciprocal declaration is asymmetric (warning);
//! 4. repeated `(node, protocol)` admin-distance pairs with differing
//!    distances; the lowest wins (warning);
//! 5. a network attached to an unknown node (fatal);
//! 6. a link whose endpoints share a node contributes no adjacency (warning).
//!
//! Declare-phase duplicates ([`Issue::DuplicateFact`]) are recorded by the
//! [`Loader`](crate::Loader) and are not re-derivable from the folded tables,
//! so they do not reappear here.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::debug;

use netfabric_core::{Issue, NodeId, Protocol};

use crate::snapshot::{FactTables, Snapshot};

/// Re-run the whole-store checks on a committed snapshot
///
/// A snapshot produced by [`Loader::commit`](crate::Loader::commit) has
/// already passed the fatal checks; this is the diagnostic surface for
/// re-deriving the warning list.
pub fn validate(snapshot: &Snapshot) -> Vec<Issue> {
    run(snapshot.tables())
}

pub(crate) fn run(tables: &FactTables) -> Vec<Issue> {
    let mut issues = Vec::new();
    check_interface_owners(tables, &mut issues);
    check_link_endpoints(tables, &mut issues);
    check_link_symmetry(tables, &mut issues);
    check_admin_duplicates(tables, &mut issues);
    check_network_owners(tables, &mut issues);
    check_intra_node_links(tables, &mut issues);
    debug!(issues = issues.len(), "validation pass complete");
    issues
}

/// Check 1: every interface's owning node exists
fn check_interface_owners(tables: &FactTables, issues: &mut Vec<Issue>) {
    for (id, record) in &tables.interfaces {
        if !tables.nodes.contains_key(&record.node) {
            issues.push(Issue::OrphanInterface {
                interface: id.clone(),
                node: record.node.clone(),
            });
        }
    }
}

/// Check 2: every link endpoint is a declared interface
fn check_link_endpoints(tables: &FactTables, issues: &mut Vec<Issue>) {
    for link in &tables.links {
        for (endpoint, peer) in [(&link.a, &link.b), (&link.b, &link.a)] {
            if !tables.interfaces.contains_key(endpoint) {
                issues.push(Issue::DanglingLink {
                    interface: endpoint.clone(),
                    peer: peer.clone(),
                });
            }
        }
    }
}

/// Check 3: link symmetry
///
/// For each declared `Link(a, b)`, a missing `Link(b, a)` is a warning,
/// never a failure: real-world feeds are often one-sided.
fn check_link_symmetry(tables: &FactTables, issues: &mut Vec<Issue>) {
    let declared: HashSet<(_, _)> = tables.links.iter().map(|l| (&l.a, &l.b)).collect();
    for link in &tables.links {
        if !declared.contains(&(&link.b, &link.a)) {
            issues.push(Issue::AsymmetricLink {
                a: link.a.clone(),
                b: link.b.clone(),
            });
        }
    }
}

/// Check 4: repeated `(node, protocol)` pairs with differing distances
///
/// The lowest distance wins per the administrative-distance convention
/// (lower = more trusted); every losing declaration is reported.
fn check_admin_duplicates(tables: &FactTables, issues: &mut Vec<Issue>) {
    let mut lowest: BTreeMap<(&NodeId, &Protocol), u32> = BTreeMap::new();
    for entry in &tables.admin_distances {
        lowest
            .entry((&entry.node, &entry.protocol))
            .and_modify(|d| *d = (*d).min(entry.distance))
            .or_insert(entry.distance);
    }
    for entry in &tables.admin_distances {
        let kept = lowest[&(&entry.node, &entry.protocol)];
        if entry.distance > kept {
            issues.push(Issue::DuplicateAdminDistance {
                node: entry.node.clone(),
                protocol: entry.protocol.clone(),
                kept,
                ignored: entry.distance,
            });
        }
    }
}

/// Check 5: every network's owning node exists
fn check_network_owners(tables: &FactTables, issues: &mut Vec<Issue>) {
    for record in &tables.networks {
        if !tables.nodes.contains_key(&record.node) {
            issues.push(Issue::OrphanNetwork {
                network: record.id.clone(),
                node: record.node.clone(),
            });
        }
    }
}

/// Check 6: links whose endpoints share a node
///
/// A simple graph has no self-edges, so these contribute no adjacency.
/// Reported once per interface pair even when declared in both directions.
fn check_intra_node_links(tables: &FactTables, issues: &mut Vec<Issue>) {
    let mut flagged = BTreeSet::new();
    for link in &tables.links {
        let (Some(a_rec), Some(b_rec)) = (
            tables.interfaces.get(&link.a),
            tables.interfaces.get(&link.b),
        ) else {
            continue;
        };
        if a_rec.node != b_rec.node {
            continue;
        }
        let key = if link.a <= link.b {
            (link.a.clone(), link.b.clone())
        } else {
            (link.b.clone(), link.a.clone())
        };
        if flagged.insert(key) {
            issues.push(Issue::IntraNodeLink {
                node: a_rec.node.clone(),
                a: link.a.clone(),
                b: link.b.clone(),
            });
        }
    }
}
