//! # NetFabric Core
//!
//! Core types, facts, validation issues, and errors for the NetFabric stack.
//!
//! This crate defines the vocabulary shared by the fact store, the topology
//! graph, and the route preference resolver: identifier newtypes, the typed
//! fact feed, the validation issue taxonomy, and the error enums.
//!
//! ## Key Types
//!
//! - [`Fact`]: One typed declaration from the input feed
//! - [`NodeId`], [`InterfaceId`], [`NetworkId`], [`Protocol`]: Identifier newtypes
//! - [`Issue`]: A validation finding (warning or fatal error)
//! - [`LoadError`], [`QueryError`]: Load-time and query-time failures

pub mod error;
pub mod fact;
pub mod ids;
pub mod issue;

// Re-export main types
pub use error::*;
pub use fact::*;
pub use ids::*;
pub use issue::*;
