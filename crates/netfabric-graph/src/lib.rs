//! # NetFabric Graph
//!
//! Derives an undirected simple graph of router adjacency from the
//! interface links in a committed snapshot, and answers reachability
//! queries over it.
//!
//! ## Derivation
//!
//! Every declared node is a vertex, isolated ones included. Each
//! inter-node link maps to the node pair owning its endpoints; parallel
//! links between the same two nodes collapse into one logical edge
//! annotated with the set of contributing interface pairs. Links whose
//! endpoints share a node contribute nothing (the validator flags them).
//!
//! ## Determinism
//!
//! Adjacency is kept in ordered maps, so iteration, BFS expansion, and
//! therefore [`TopologyGraph::shortest_path`] results are fully
//! deterministic: among equal-length paths the lexicographically smallest
//! node sequence wins.
//!
//! ## Example
//!
//! ```
//! use netfabric_core::Fact;
//! use netfabric_store::Loader;
//! use netfabric_graph::TopologyGraph;
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
//! let graph = TopologyGraph::from_snapshot(&snapshot);
//! let path = graph.shortest_path(&"R11".into(), &"R12".into()).unwrap();
//! assert_eq!(path, vec!["R11".into(), "R12".into()]);
//! ```

pub mod graph;
pub mod path;

// Re-export main types
pub use graph::{EdgeInfo, TopologyGraph};
