//! Validation issues
//!
//! The consistency validator reports everything it finds as an [`Issue`].
//! Issues with [`Severity::Error`] reject the whole load; warnings are kept
//! on the committed snapshot so data-quality problems in the feed stay
//! visible. Nothing is ever repaired silently.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fact::Fact;
use crate::ids::{InterfaceId, NetworkId, NodeId, Protocol};

/// How serious a validation finding is
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Surfaced for diagnostics, does not block commit
    Warning,
    /// Rejects the load as a unit
    Error,
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// An interface whose owning node was never declared
    OrphanInterface {
        interface: InterfaceId,
        node: NodeId,
    },

    /// A link endpoint that is not a declared interface
    DanglingLink {
        /// The undeclared endpoint
        interface: InterfaceId,
        /// The other end of the declared link
        peer: InterfaceId,
    },

    /// A link declared in one direction only
    ///
    /// `Link(a, b)` was declared but `Link(b, a)` was not. Real-world feeds
    /// are often one-sided, so this is a warning rather than a failure.
    AsymmetricLink { a: InterfaceId, b: InterfaceId },

    /// The same `(node, protocol)` pair declared with differing distances
    ///
    /// The lowest distance wins; the losing declaration is reported here.
    DuplicateAdminDistance {
        node: NodeId,
        protocol: Protocol,
        /// The effective (lowest) distance
        kept: u32,
        /// The distance of the losing declaration
        ignored: u32,
    },

    /// A network attached to a node that was never declared
    OrphanNetwork { network: NetworkId, node: NodeId },

    /// A link whose endpoints belong to the same node
    ///
    /// Contributes no adjacency edge to the derived graph.
    IntraNodeLink {
        node: NodeId,
        a: InterfaceId,
        b: InterfaceId,
    },

    /// A byte-identical redeclaration of an earlier fact
    DuplicateFact { fact: Fact },
}

impl Issue {
    /// The severity of this finding
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrphanInterface { .. }
            | Self::DanglingLink { .. }
            | Self::OrphanNetwork { .. } => Severity::Error,
            Self::AsymmetricLink { .. }
            | Self::DuplicateAdminDistance { .. }
            | Self::IntraNodeLink { .. }
            | Self::DuplicateFact { .. } => Severity::Warning,
        }
    }

    /// Whether this finding rejects the load
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanInterface { interface, node } => {
                write!(f, "interface {} belongs to undeclared node {}", interface, node)
            }
            Self::DanglingLink { interface, peer } => {
                write!(f, "link endpoint {} (peer of {}) is not a declared interface", interface, peer)
            }
            Self::AsymmetricLink { a, b } => {
                write!(f, "link {} -> {} has no reciprocal declaration", a, b)
            }
            Self::DuplicateAdminDistance {
                node,
                protocol,
                kept,
                ignored,
            } => write!(
                f,
                "duplicate admin distance for ({}, {}): keeping {}, ignoring {}",
                node, protocol, kept, ignored
            ),
            Self::OrphanNetwork { network, node } => {
                write!(f, "network {} attached to undeclared node {}", network, node)
            }
            Self::IntraNodeLink { node, a, b } => {
                write!(f, "link {} -> {} stays within node {}", a, b, node)
            }
            Self::DuplicateFact { fact } => write!(f, "duplicate declaration: {:?}", fact),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_split() {
        let fatal = Issue::OrphanNetwork {
            network: NetworkId::from("N99"),
            node: NodeId::from("R99"),
        };
        assert_eq!(fatal.severity(), Severity::Error);
        assert!(fatal.is_fatal());

        let warning = Issue::AsymmetricLink {
            a: InterfaceId::from("R11-eth0"),
            b: InterfaceId::from("R12-eth0"),
        };
        assert_eq!(warning.severity(), Severity::Warning);
        assert!(!warning.is_fatal());
    }

    #[test]
    fn test_issue_serializes_tagged() {
        let issue = Issue::DuplicateAdminDistance {
            node: NodeId::from("R11"),
            protocol: Protocol::from("static"),
            kept: 1,
            ignored: 3,
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains(r#""kind":"duplicate_admin_distance""#));
        assert!(json.contains(r#""kept":1"#));

        let back: Issue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, issue);
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::AsymmetricLink {
            a: InterfaceId::from("R11-eth0"),
            b: InterfaceId::from("R12-eth0"),
        };
        let msg = format!("{}", issue);
        assert!(msg.contains("R11-eth0"));
        assert!(msg.contains("no reciprocal"));
    }
}
