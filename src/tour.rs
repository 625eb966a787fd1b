//! Tour representation and weight evaluation.
//!
//! A [`Tour`] is an ordering of all graph nodes read as a Hamiltonian cycle:
//! the successor of the last node is the first. Tours are produced by one
//! heuristic call and consumed by the caller; the solver keeps no tour state
//! between calls.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::graph::{Graph, NodeId};

/// An ordered visit of every node, interpreted cyclically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<NodeId>,
}

impl Tour {
    /// Wrap a node sequence as a tour. The sequence is taken as-is; use
    /// [`Tour::is_valid`] to check it against a graph.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Tour { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total weight of the cycle: the sum of the directed edge weights
    /// between consecutive nodes, including the wrap-around edge from the
    /// last node back to the first. Yields `f64::INFINITY` if any required
    /// edge is absent, so an unrealizable tour never wins a minimization.
    pub fn weight(&self, graph: &Graph) -> f64 {
        cycle_weight(graph, &self.nodes)
    }

    /// True when the tour visits every node of `graph` exactly once and every
    /// consecutive pair (including the wrap-around) is an existing directed
    /// edge.
    pub fn is_valid(&self, graph: &Graph) -> bool {
        if self.nodes.len() != graph.node_count() {
            return false;
        }
        let unique: HashSet<NodeId> = self.nodes.iter().copied().collect();
        if unique.len() != self.nodes.len() || !unique.iter().all(|&n| graph.has_node(n)) {
            return false;
        }
        self.weight(graph).is_finite()
    }
}

/// Cycle weight of a raw node sequence; see [`Tour::weight`].
pub(crate) fn cycle_weight(graph: &Graph, nodes: &[NodeId]) -> f64 {
    let mut total = 0.0;
    for i in 0..nodes.len() {
        let from = nodes[i];
        let to = nodes[(i + 1) % nodes.len()];
        match graph.edge_weight(from, to) {
            Some(w) => total += w as f64,
            None => return f64::INFINITY,
        }
    }
    total
}
