//! Minimum spanning tree of the undirected projection.
//!
//! # Algorithm
//!
//! Kruskal: sort the projected edges by weight and greedily accept any edge
//! joining two components, tracked with union-find, until n - 1 edges are in
//! the tree.
//!
//! The directed graph is projected to an undirected one first. When both
//! directions of a pair exist with different weights, the projection keeps
//! the minimum of the two; candidates are then processed in ascending
//! `(weight, u, v)` order, so the result is deterministic.

use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// An undirected edge subset connecting all nodes at minimum total weight.
///
/// Edges are normalized to `u < v` and sorted by `(weight, u, v)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    edges: Vec<(NodeId, NodeId, i64)>,
    total_weight: i64,
}

impl SpanningTree {
    /// The tree edges as `(u, v, weight)` triples with `u < v`.
    pub fn edges(&self) -> &[(NodeId, NodeId, i64)] {
        &self.edges
    }

    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Number of tree edges; `node_count - 1` on non-trivial graphs.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Compute a minimum spanning tree of the graph's undirected projection.
///
/// Fails with [`Error::InvalidArgument`] when the projection is
/// disconnected; no partial tree is returned. Graphs with zero or one node
/// yield an empty tree.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    let n = graph.node_count();
    if n <= 1 {
        return Ok(SpanningTree {
            edges: Vec::new(),
            total_weight: 0,
        });
    }

    // Undirected projection: cheaper direction wins when both exist. The
    // BTreeMap keys give a deterministic candidate order before sorting.
    let mut projected: BTreeMap<(NodeId, NodeId), i64> = BTreeMap::new();
    for (from, to, weight) in graph.edges() {
        let key = if from < to { (from, to) } else { (to, from) };
        projected
            .entry(key)
            .and_modify(|w| *w = (*w).min(weight))
            .or_insert(weight);
    }

    let mut candidates: Vec<(NodeId, NodeId, i64)> = projected
        .into_iter()
        .map(|((u, v), w)| (u, v, w))
        .collect();
    candidates.sort_by_key(|&(u, v, w)| (w, u, v));

    let mut components = UnionFind::<NodeId>::new(n);
    let mut edges: Vec<(NodeId, NodeId, i64)> = Vec::with_capacity(n - 1);
    let mut total_weight = 0i64;

    for (u, v, w) in candidates {
        if components.union(u, v) {
            edges.push((u, v, w));
            total_weight += w;
            if edges.len() == n - 1 {
                break;
            }
        }
    }

    if edges.len() != n - 1 {
        return Err(Error::invalid_argument(
            "graph is disconnected; no spanning tree exists",
        ));
    }

    edges.sort_by_key(|&(u, v, w)| (w, u, v));
    Ok(SpanningTree {
        edges,
        total_weight,
    })
}
