//! Error types for NetFabric
//!
//! Load-time errors are fatal to the load transaction as a unit; query-time
//! errors are recoverable and never affect store state.

use thiserror::Error;

use crate::fact::EntityKind;
use crate::ids::{InterfaceId, NodeId};
use crate::issue::Issue;

/// Top-level error type for NetFabric
#[derive(Debug, Error)]
pub enum FabricError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}

/// Errors that reject a load transaction
#[derive(Debug, Error)]
pub enum LoadError {
    /// A node or interface identifier redeclared with conflicting attributes
    #[error("{kind} {id:?} redeclared with conflicting attributes")]
    DuplicateKey { kind: EntityKind, id: String },

    /// A fact referencing an entity that was never declared
    #[error("{referrer} references undeclared {kind} {id:?}")]
    UnknownReference {
        /// Description of the referencing fact
        referrer: String,
        /// The kind of the missing entity
        kind: EntityKind,
        /// The missing identifier
        id: String,
    },

    /// A link connecting an interface to itself
    #[error("link connects interface {0} to itself")]
    SelfLink(InterfaceId),

    /// Validation found fatal issues; the whole load is rejected
    #[error("load rejected with {} fatal issue(s)", .issues.iter().filter(|i| i.is_fatal()).count())]
    Rejected {
        /// Every issue found, warnings included, in check order
        issues: Vec<Issue>,
    },
}

/// Recoverable errors returned by queries on a committed snapshot
#[derive(Debug, Error)]
pub enum QueryError {
    /// The named entity does not exist in the snapshot
    #[error("{kind} {id:?} not found")]
    NotFound { kind: EntityKind, id: String },

    /// Both endpoints exist but no path connects them
    #[error("no path from {src} to {dst}")]
    PathNotFound { src: NodeId, dst: NodeId },

    /// The node has no administrative-distance entries at all
    #[error("node {0} has no route source entries")]
    NoRouteSource(NodeId),
}

impl QueryError {
    /// Convenience constructor for a missing node
    pub fn node_not_found(id: &NodeId) -> Self {
        Self::NotFound {
            kind: EntityKind::Node,
            id: id.as_str().to_owned(),
        }
    }

    /// Convenience constructor for a missing interface
    pub fn interface_not_found(id: &InterfaceId) -> Self {
        Self::NotFound {
            kind: EntityKind::Interface,
            id: id.as_str().to_owned(),
        }
    }
}

/// Result type alias for NetFabric operations
pub type FabricResult<T> = Result<T, FabricError>;

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type alias for query operations
pub type QueryResult<T> = Result<T, QueryError>;
