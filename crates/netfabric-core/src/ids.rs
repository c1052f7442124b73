//! Identifier newtypes for topology facts
//!
//! Every entity in the feed is named by an opaque string identifier. Wrapping
//! each in its own newtype keeps node, interface, network, and protocol names
//! from being mixed up at call sites. All four are ordered so they can key
//! the deterministic `BTreeMap` tables used throughout the stack.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Identifier of a declared router node
#[derive(
    Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new node identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Globally unique identifier of a node's interface
#[derive(
    Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InterfaceId(String);

impl InterfaceId {
    /// Create a new interface identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterfaceId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Opaque identifier of a locally attached address block
#[derive(
    Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Create a new network identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Name of a routing-information source (e.g. `"static"`, `"ospf"`, `"bgp"`)
///
/// Protocol names are opaque and case-preserving; the feed decides the
/// spelling, the resolver only compares them for equality and ordering.
#[derive(
    Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Protocol(String);

impl Protocol {
    /// Create a new protocol name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Protocol {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        let id = NodeId::from("R11");
        assert_eq!(format!("{}", id), "R11");
        assert_eq!(id.as_str(), "R11");
    }

    #[test]
    fn test_ids_order_lexicographically() {
        let mut ids = vec![NodeId::from("R12"), NodeId::from("R2"), NodeId::from("R11")];
        ids.sort();
        assert_eq!(ids, vec!["R11".into(), "R12".into(), "R2".into()]);
    }

    #[test]
    fn test_protocol_preserves_case() {
        let p = Protocol::from("Static");
        assert_eq!(p.as_str(), "Static");
        assert_ne!(p, Protocol::from("static"));
    }

    #[test]
    fn test_ids_serialize_transparent() {
        let id = InterfaceId::from("R11-eth0");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"R11-eth0\"");

        let back: InterfaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
