//! The immutable committed snapshot
//!
//! A [`Snapshot`] is the result of one successful load transaction. It owns
//! every validated record and is read-only from the moment it is built:
//! share it behind `Arc` across any number of readers, no locking needed.
//! Reload means building a new snapshot out-of-place; holders of the old
//! one observe no change.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use netfabric_core::{
    InterfaceId, Issue, NetworkId, NodeId, Protocol, QueryError, QueryResult,
};

/// A declared node and the attachments it owns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Interfaces owned by this node, in declaration order
    pub interfaces: Vec<InterfaceId>,
    /// Networks attached to this node, in declaration order
    pub networks: Vec<NetworkId>,
}

/// A declared interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRecord {
    /// The node this interface belongs to
    pub node: NodeId,
}

/// A declared link, direction as declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub a: InterfaceId,
    pub b: InterfaceId,
}

/// A declared administrative-distance entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminDistanceRecord {
    pub node: NodeId,
    pub protocol: Protocol,
    /// Lower is more trusted
    pub distance: u32,
}

/// A declared locally attached network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub node: NodeId,
    pub id: NetworkId,
}

/// The normalized in-memory fact tables
///
/// Keyed tables are identifier-ordered; list tables keep declaration order,
/// which the resolver's tie-break rules depend on.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct FactTables {
    pub(crate) nodes: BTreeMap<NodeId, NodeRecord>,
    pub(crate) interfaces: BTreeMap<InterfaceId, InterfaceRecord>,
    pub(crate) links: Vec<LinkRecord>,
    pub(crate) admin_distances: Vec<AdminDistanceRecord>,
    pub(crate) networks: Vec<NetworkRecord>,
}

/// An immutable, fully validated topology state
///
/// Produced by [`Loader::commit`](crate::Loader::commit). All queries over a
/// snapshot are pure functions; the warning list from validation stays
/// retrievable for the snapshot's lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Correlates every log line of the load transaction that built this
    load_id: Uuid,
    /// When the load committed
    loaded_at: DateTime<Utc>,
    tables: FactTables,
    warnings: Vec<Issue>,
}

impl Snapshot {
    pub(crate) fn new(tables: FactTables, warnings: Vec<Issue>) -> Self {
        Self {
            load_id: Uuid::new_v4(),
            loaded_at: Utc::now(),
            tables,
            warnings,
        }
    }

    pub(crate) fn tables(&self) -> &FactTables {
        &self.tables
    }

    /// The identifier of the load transaction that built this snapshot
    pub fn load_id(&self) -> Uuid {
        self.load_id
    }

    /// When this snapshot was committed
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Non-fatal issues found while loading, in check order
    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    /// Look up a node record
    pub fn node(&self, id: &NodeId) -> QueryResult<&NodeRecord> {
        self.tables
            .nodes
            .get(id)
            .ok_or_else(|| QueryError::node_not_found(id))
    }

    /// Look up an interface record
    pub fn interface(&self, id: &InterfaceId) -> QueryResult<&InterfaceRecord> {
        self.tables
            .interfaces
            .get(id)
            .ok_or_else(|| QueryError::interface_not_found(id))
    }

    /// Whether a node with this identifier was declared
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.tables.nodes.contains_key(id)
    }

    /// All declared nodes, in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.tables.nodes.iter()
    }

    /// All declared node identifiers, in identifier order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.tables.nodes.keys()
    }

    /// All declared interfaces, in identifier order
    pub fn interfaces(&self) -> impl Iterator<Item = (&InterfaceId, &InterfaceRecord)> {
        self.tables.interfaces.iter()
    }

    /// The interfaces a node owns, in declaration order
    pub fn interfaces_of(&self, node: &NodeId) -> QueryResult<&[InterfaceId]> {
        Ok(&self.node(node)?.interfaces)
    }

    /// The networks attached to a node, in declaration order
    pub fn networks_of(&self, node: &NodeId) -> QueryResult<&[NetworkId]> {
        Ok(&self.node(node)?.networks)
    }

    /// All declared links, in declaration order
    pub fn links(&self) -> &[LinkRecord] {
        &self.tables.links
    }

    /// All administrative-distance entries, in declaration order
    pub fn admin_distances(&self) -> &[AdminDistanceRecord] {
        &self.tables.admin_distances
    }

    /// The administrative-distance entries of one node, in declaration order
    pub fn admin_distances_of(&self, node: &NodeId) -> QueryResult<Vec<&AdminDistanceRecord>> {
        self.node(node)?;
        Ok(self
            .tables
            .admin_distances
            .iter()
            .filter(|e| &e.node == node)
            .collect())
    }

    /// All declared networks, in declaration order
    pub fn networks(&self) -> &[NetworkRecord] {
        &self.tables.networks
    }

    /// Number of declared nodes
    pub fn node_count(&self) -> usize {
        self.tables.nodes.len()
    }

    /// Number of declared interfaces
    pub fn interface_count(&self) -> usize {
        self.tables.interfaces.len()
    }

    /// Number of declared links
    pub fn link_count(&self) -> usize {
        self.tables.links.len()
    }
}
