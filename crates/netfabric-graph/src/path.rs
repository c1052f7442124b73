//! Unweighted shortest paths
//!
//! Breadth-first search over the derived adjacency graph. Neighbor
//! expansion follows identifier order and each node's parent is fixed at
//! first discovery, so among equal-length paths the lexicographically
//! smallest node sequence wins — the tie is broken at the first diverging
//! identifier, making results reproducible across runs.

use std::collections::{BTreeMap, VecDeque};

use tracing::trace;

use netfabric_core::{NodeId, QueryError, QueryResult};

use crate::graph::TopologyGraph;

impl TopologyGraph {
    /// The shortest path from `src` to `dst`, endpoints included
    ///
    /// `shortest_path(src, src)` is the single-element sequence `[src]`.
    /// Unknown endpoints fail with [`QueryError::NotFound`]; a missing
    /// route between known endpoints fails with [`QueryError::PathNotFound`].
    pub fn shortest_path(&self, src: &NodeId, dst: &NodeId) -> QueryResult<Vec<NodeId>> {
        self.neighbors(src)?;
        if !self.contains(dst) {
            return Err(QueryError::node_not_found(dst));
        }
        if src == dst {
            return Ok(vec![src.clone()]);
        }

        let mut parent: BTreeMap<&NodeId, &NodeId> = BTreeMap::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        queue.push_back(src);

        'search: while let Some(current) = queue.pop_front() {
            let Ok(neighbors) = self.neighbors(current) else {
                continue;
            };
            for next in neighbors {
                if next == src || parent.contains_key(next) {
                    continue;
                }
                parent.insert(next, current);
                if next == dst {
                    break 'search;
                }
                queue.push_back(next);
            }
        }

        if !parent.contains_key(dst) {
            return Err(QueryError::PathNotFound {
                src: src.clone(),
                dst: dst.clone(),
            });
        }

        let mut path = vec![dst.clone()];
        let mut cursor = dst;
        while let Some(prev) = parent.get(cursor) {
            path.push((*prev).clone());
            cursor = prev;
        }
        path.reverse();

        trace!(%src, %dst, hops = path.len() - 1, "shortest path found");
        Ok(path)
    }
}
