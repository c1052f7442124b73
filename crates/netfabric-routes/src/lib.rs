//! # NetFabric Routes
//!
//! Route preference resolution over a committed snapshot.
//!
//! Administrative distance ranks routing-information sources per node:
//! lower is more trusted. This crate answers which distance is effective
//! for each protocol (duplicates resolved, lowest wins) and which protocol
//! is the best source on a node (globally lowest effective distance,
//! first-declared wins ties).
//!
//! ## Example
//!
//! ```
//! use netfabric_core::Fact;
//! use netfabric_store::Loader;
//! use netfabric_routes::{best_source, resolve};
//!
//! let snapshot = Loader::load([
//!     Fact::node("R11"),
//!     Fact::admin_distance("R11", "static", 1),
//!     Fact::admin_distance("R11", "bgp", 2),
//! ])
//! .unwrap();
//!
//! let node = "R11".into();
//! assert_eq!(resolve(&snapshot, &node).unwrap().len(), 2);
//! assert_eq!(best_source(&snapshot, &node).unwrap(), "static".into());
//! ```

pub mod resolver;

// Re-export main operations
pub use resolver::{best_source, effective_table, resolve};
