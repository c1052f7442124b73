//! # NetFabric Store
//!
//! The fact store: two-phase topology loading, consistency validation, and
//! the immutable committed [`Snapshot`].
//!
//! ## Load Lifecycle
//!
//! ```text
//! Empty -> Loading -> Validated -> Ready
//!             |
//!             +-----> Rejected      (fatal issue found)
//! ```
//!
//! A [`Loader`] accepts typed facts one at a time, checking identity and
//! reference invariants on insert. [`Loader::commit`] runs the whole-store
//! validator and either produces a [`Snapshot`] carrying the warning list,
//! or rejects the load as a unit with every issue found. `Ready` is terminal
//! and immutable; a fresh load always starts a new [`Loader`].
//!
//! ## Example
//!
//! ```
//! use netfabric_core::Fact;
//! use netfabric_store::Loader;
//!
//! let snapshot = Loader::load([
//!     Fact::node("R11"),
//!     Fact::node("R12"),
//!     Fact::interface("R11", "R11-eth0"),
//!     Fact::interface("R12", "R12-eth0"),
//!     Fact::link("R11-eth0", "R12-eth0"),
//!     Fact::link("R12-eth0", "R11-eth0"),
//! ])
//! .unwrap();
//!
//! assert_eq!(snapshot.node_count(), 2);
//! assert!(snapshot.warnings().is_empty());
//! ```

pub mod loader;
pub mod snapshot;
pub mod validate;

// Re-export main types
pub use loader::{LoadState, Loader};
pub use snapshot::{
    AdminDistanceRecord, InterfaceRecord, LinkRecord, NetworkRecord, NodeRecord, Snapshot,
};
pub use validate::validate;
