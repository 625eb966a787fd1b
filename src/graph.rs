//! In-memory directed weighted graph built interactively by the caller.
//!
//! Nodes are integer ids assigned in creation order and carry a 2D position
//! that is pass-through display data only; no algorithm in this crate reads
//! it. Edges are ordered pairs with an integer weight, at most one per pair,
//! no self-loops. The edit layer owns all mutation; the heuristics take the
//! graph by shared reference and never modify it.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Node identifier, dense in `[0, node_count)`.
pub type NodeId = usize;

/// A directed weighted graph over integer-identified nodes.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Per-node display position, indexed by `NodeId`.
    positions: Vec<(f64, f64)>,
    /// Directed edges keyed by `(from, to)`.
    edges: HashMap<(NodeId, NodeId), i64>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new node and return its id. Ids are sequential and never
    /// reused; this always succeeds.
    pub fn add_node(&mut self, pos: (f64, f64)) -> NodeId {
        let id = self.positions.len();
        self.positions.push(pos);
        id
    }

    /// Insert the directed edge `from -> to`, or overwrite its weight if it
    /// already exists. Returns the previous weight on overwrite so the edit
    /// layer can record it for undo.
    ///
    /// Fails with [`Error::InvalidArgument`] on a self-loop or an unknown
    /// endpoint. Zero and negative weights are accepted.
    pub fn upsert_edge(&mut self, from: NodeId, to: NodeId, weight: i64) -> Result<Option<i64>> {
        if from == to {
            return Err(Error::invalid_argument(format!(
                "self-loop on node {from}"
            )));
        }
        if !self.has_node(from) {
            return Err(Error::invalid_argument(format!("unknown node id {from}")));
        }
        if !self.has_node(to) {
            return Err(Error::invalid_argument(format!("unknown node id {to}")));
        }
        Ok(self.edges.insert((from, to), weight))
    }

    #[inline]
    pub fn has_node(&self, id: NodeId) -> bool {
        id < self.positions.len()
    }

    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains_key(&(from, to))
    }

    /// Weight of the directed edge `from -> to`, if present. `(a, b)` and
    /// `(b, a)` are independent edges.
    #[inline]
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<i64> {
        self.edges.get(&(from, to)).copied()
    }

    /// Display position of a node, if the id is known.
    pub fn position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.positions.get(id).copied()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All node ids in ascending order. This is the fixed iteration order the
    /// heuristics use for their deterministic tie-breaks.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.positions.len()
    }

    /// All directed edges as `(from, to, weight)` triples, in no particular
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, i64)> + '_ {
        self.edges.iter().map(|(&(from, to), &w)| (from, to, w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_sequential_ids() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_node((0.0, 0.0)), 0);
        assert_eq!(graph.add_node((1.0, 2.0)), 1);
        assert_eq!(graph.add_node((3.0, 4.0)), 2);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.position(1), Some((1.0, 2.0)));
        assert_eq!(graph.position(3), None);
    }

    #[test]
    fn test_upsert_inserts_then_overwrites() {
        let mut graph = Graph::new();
        graph.add_node((0.0, 0.0));
        graph.add_node((1.0, 0.0));

        assert_eq!(graph.upsert_edge(0, 1, 7).unwrap(), None);
        assert_eq!(graph.edge_weight(0, 1), Some(7));

        // Overwrite reports the previous weight and does not duplicate.
        assert_eq!(graph.upsert_edge(0, 1, 3).unwrap(), Some(7));
        assert_eq!(graph.edge_weight(0, 1), Some(3));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_upsert_rejects_self_loop_and_unknown_nodes() {
        let mut graph = Graph::new();
        graph.add_node((0.0, 0.0));
        graph.add_node((1.0, 0.0));

        assert!(matches!(
            graph.upsert_edge(0, 0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.upsert_edge(0, 5, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            graph.upsert_edge(5, 0, 1),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut graph = Graph::new();
        graph.add_node((0.0, 0.0));
        graph.add_node((1.0, 0.0));

        graph.upsert_edge(0, 1, 10).unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));

        graph.upsert_edge(1, 0, -4).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(10));
        assert_eq!(graph.edge_weight(1, 0), Some(-4));
    }

    #[test]
    fn test_zero_and_negative_weights_accepted() {
        let mut graph = Graph::new();
        graph.add_node((0.0, 0.0));
        graph.add_node((1.0, 0.0));
        graph.add_node((2.0, 0.0));

        graph.upsert_edge(0, 1, 0).unwrap();
        graph.upsert_edge(1, 2, -100).unwrap();
        assert_eq!(graph.edge_weight(0, 1), Some(0));
        assert_eq!(graph.edge_weight(1, 2), Some(-100));
    }
}
