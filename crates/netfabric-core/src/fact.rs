//! The typed fact feed
//!
//! Raw topology declarations arrive as a sequence of [`Fact`] tuples, already
//! parsed by an external collaborator. The serde representation is a tagged
//! enum, so a feed can also be moved around as JSON lines:
//!
//! ```json
//! {"fact":"node","id":"R11"}
//! {"fact":"interface","node":"R11","id":"R11-eth0"}
//! {"fact":"link","a":"R11-eth0","b":"R12-eth0"}
//! {"fact":"admin_distance","node":"R11","protocol":"static","distance":1}
//! {"fact":"network","node":"R11","id":"N11"}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{InterfaceId, NetworkId, NodeId, Protocol};

/// One typed declaration from the input feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fact", rename_all = "snake_case")]
pub enum Fact {
    /// Declare a router node
    Node {
        /// Unique node identifier
        id: NodeId,
    },

    /// Declare an interface owned by a previously declared node
    Interface {
        /// The owning node
        node: NodeId,
        /// Globally unique interface identifier
        id: InterfaceId,
    },

    /// Declare a physical connection between two declared interfaces
    ///
    /// Links are bidirectional; the declared direction is kept so the
    /// validator can flag feeds that omit the reciprocal declaration.
    Link {
        /// First endpoint, as declared
        a: InterfaceId,
        /// Second endpoint, as declared
        b: InterfaceId,
    },

    /// Declare the trust ranking of a routing-information source on a node
    AdminDistance {
        /// The node the ranking applies to
        node: NodeId,
        /// The routing-information source
        protocol: Protocol,
        /// Administrative distance; lower is more trusted
        distance: u32,
    },

    /// Declare an address block locally attached to a node
    Network {
        /// The owning node
        node: NodeId,
        /// Opaque address-block identifier
        id: NetworkId,
    },
}

impl Fact {
    /// Declare a node
    pub fn node(id: impl Into<NodeId>) -> Self {
        Self::Node { id: id.into() }
    }

    /// Declare an interface on a node
    pub fn interface(node: impl Into<NodeId>, id: impl Into<InterfaceId>) -> Self {
        Self::Interface {
            node: node.into(),
            id: id.into(),
        }
    }

    /// Declare a link between two interfaces
    pub fn link(a: impl Into<InterfaceId>, b: impl Into<InterfaceId>) -> Self {
        Self::Link {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Declare an administrative distance entry
    pub fn admin_distance(
        node: impl Into<NodeId>,
        protocol: impl Into<Protocol>,
        distance: u32,
    ) -> Self {
        Self::AdminDistance {
            node: node.into(),
            protocol: protocol.into(),
            distance,
        }
    }

    /// Declare a locally attached network
    pub fn network(node: impl Into<NodeId>, id: impl Into<NetworkId>) -> Self {
        Self::Network {
            node: node.into(),
            id: id.into(),
        }
    }

    /// The kind of entity this fact declares
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Node { .. } => EntityKind::Node,
            Self::Interface { .. } => EntityKind::Interface,
            Self::Link { .. } => EntityKind::Link,
            Self::AdminDistance { .. } => EntityKind::AdminDistance,
            Self::Network { .. } => EntityKind::Network,
        }
    }
}

/// The five kinds of entity a fact can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Node,
    Interface,
    Link,
    AdminDistance,
    Network,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Node => "node",
            Self::Interface => "interface",
            Self::Link => "link",
            Self::AdminDistance => "admin distance",
            Self::Network => "network",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_constructors() {
        let fact = Fact::interface("R11", "R11-eth0");
        assert_eq!(
            fact,
            Fact::Interface {
                node: NodeId::from("R11"),
                id: InterfaceId::from("R11-eth0"),
            }
        );
        assert_eq!(fact.kind(), EntityKind::Interface);
    }

    #[test]
    fn test_fact_tagged_json() {
        let fact = Fact::admin_distance("R11", "static", 1);
        let json = serde_json::to_string(&fact).unwrap();
        assert_eq!(
            json,
            r#"{"fact":"admin_distance","node":"R11","protocol":"static","distance":1}"#
        );

        let back: Fact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fact);
    }

    #[test]
    fn test_fact_feed_roundtrip() {
        let feed = vec![
            Fact::node("R11"),
            Fact::interface("R11", "R11-eth0"),
            Fact::link("R11-eth0", "R12-eth0"),
            Fact::network("R11", "N11"),
        ];

        let lines: Vec<String> = feed
            .iter()
            .map(|f| serde_json::to_string(f).unwrap())
            .collect();
        let back: Vec<Fact> = lines
            .iter()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(back, feed);
    }

    #[test]
    fn test_entity_kind_display() {
        assert_eq!(format!("{}", EntityKind::Node), "node");
        assert_eq!(format!("{}", EntityKind::AdminDistance), "admin distance");
    }
}
