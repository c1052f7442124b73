//! Adjacency derivation from interface links

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use netfabric_core::{InterfaceId, NodeId, QueryError, QueryResult};
use netfabric_store::Snapshot;

/// Annotation on a collapsed logical edge
///
/// Parallel links between the same two nodes fold into one edge; every
/// contributing interface pair is kept, oriented to match the edge's
/// node ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeInfo {
    /// Interface pairs contributing to this edge, `(lower node side, higher node side)`
    pub interface_pairs: BTreeSet<(InterfaceId, InterfaceId)>,
}

impl EdgeInfo {
    /// Number of physical links folded into this edge
    pub fn link_count(&self) -> usize {
        self.interface_pairs.len()
    }
}

/// Undirected simple graph of router adjacency
///
/// Vertices are node identifiers; edges are derived from interface links.
/// Immutable once built — share it freely alongside the snapshot it came
/// from.
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
    edges: BTreeMap<(NodeId, NodeId), EdgeInfo>,
}

impl TopologyGraph {
    /// Derive the adjacency graph from a committed snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut adjacency: BTreeMap<NodeId, BTreeSet<NodeId>> = snapshot
            .node_ids()
            .map(|id| (id.clone(), BTreeSet::new()))
            .collect();
        let mut edges: BTreeMap<(NodeId, NodeId), EdgeInfo> = BTreeMap::new();

        for link in snapshot.links() {
            let (Ok(a_rec), Ok(b_rec)) = (snapshot.interface(&link.a), snapshot.interface(&link.b))
            else {
                continue;
            };
            if a_rec.node == b_rec.node {
                // Intra-node link: a simple graph has no self-edges
                continue;
            }

            // Orient the pair to the edge's node ordering so reciprocal
            // declarations land on the same entry
            let (lo, hi, pair) = if a_rec.node <= b_rec.node {
                (&a_rec.node, &b_rec.node, (link.a.clone(), link.b.clone()))
            } else {
                (&b_rec.node, &a_rec.node, (link.b.clone(), link.a.clone()))
            };

            adjacency
                .entry(lo.clone())
                .or_default()
                .insert(hi.clone());
            adjacency
                .entry(hi.clone())
                .or_default()
                .insert(lo.clone());
            edges
                .entry((lo.clone(), hi.clone()))
                .or_default()
                .interface_pairs
                .insert(pair);
        }

        debug!(
            nodes = adjacency.len(),
            edges = edges.len(),
            "derived adjacency graph"
        );
        Self { adjacency, edges }
    }

    /// Number of vertices
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of collapsed logical edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the node is a vertex of this graph
    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All vertices, in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// The nodes directly adjacent to `node`
    pub fn neighbors(&self, node: &NodeId) -> QueryResult<&BTreeSet<NodeId>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| QueryError::node_not_found(node))
    }

    /// The collapsed edge between two nodes, if one exists
    ///
    /// Order-insensitive: `edge(a, b)` and `edge(b, a)` are the same lookup.
    pub fn edge(&self, a: &NodeId, b: &NodeId) -> Option<&EdgeInfo> {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        self.edges.get(&key)
    }

    /// All collapsed edges, in node-pair order
    pub fn edges(&self) -> impl Iterator<Item = (&(NodeId, NodeId), &EdgeInfo)> {
        self.edges.iter()
    }

    /// Connected components, each a set of node identifiers
    ///
    /// Components are ordered by their smallest member.
    pub fn components(&self) -> Vec<BTreeSet<NodeId>> {
        let mut seen: BTreeSet<&NodeId> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.adjacency.keys() {
            if seen.contains(start) {
                continue;
            }
            let mut component = BTreeSet::new();
            let mut stack = vec![start];
            while let Some(node) = stack.pop() {
                if !seen.insert(node) {
                    continue;
                }
                component.insert(node.clone());
                if let Some(neighbors) = self.adjacency.get(node) {
                    stack.extend(neighbors.iter());
                }
            }
            components.push(component);
        }
        components
    }

    /// Whether every vertex can reach every other vertex
    pub fn is_connected(&self) -> bool {
        self.components().len() <= 1
    }
}
