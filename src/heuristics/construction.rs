//! Greedy tour construction.
//!
//! # Algorithms
//!
//! - [`nearest_neighbor`]: from a fixed start, repeatedly follow the
//!   cheapest outgoing edge to an unvisited node, then close the cycle.
//! - [`repetitive_nearest_neighbor`]: run nearest-neighbor once from every
//!   node and keep the best closed tour.
//!
//! Both are deterministic for a fixed graph: candidate nodes are scanned in
//! ascending id order, so a weight tie always resolves to the lowest id.
//! Randomized start selection is deliberately the caller's business.

use log::debug;
use ordered_float::OrderedFloat;
use std::collections::HashSet;

use crate::graph::{Graph, NodeId};
use crate::tour::Tour;

/// Build a tour greedily from `start` by always moving to the nearest
/// unvisited node over an existing directed edge.
///
/// Returns `None` when construction gets stuck (no outgoing edge from the
/// current node to any unvisited node) or when the cycle cannot be closed
/// (no edge from the last node back to `start`). Both are ordinary,
/// recoverable outcomes on sparse directed graphs.
///
/// # Complexity
///
/// O(n²) over the unvisited scan.
pub fn nearest_neighbor(graph: &Graph, start: NodeId) -> Option<Tour> {
    let mut path = vec![start];
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut current = start;

    while visited.len() < graph.node_count() {
        let (next, _) = graph
            .node_ids()
            .filter(|n| !visited.contains(n))
            .filter_map(|n| graph.edge_weight(current, n).map(|w| (n, w)))
            .min_by_key(|&(_, w)| w)?;

        path.push(next);
        visited.insert(next);
        current = next;
    }

    if !graph.has_edge(current, start) {
        return None;
    }

    Some(Tour::from_nodes(path))
}

/// Run [`nearest_neighbor`] once per start node and return the cheapest
/// closed tour together with its total weight.
///
/// Starts are tried in ascending id order; a weight tie keeps the
/// first-encountered start. Returns `None` when no start yields a closed
/// tour, including graphs with fewer than two nodes.
///
/// # Complexity
///
/// O(n³): n greedy constructions of O(n²) each.
pub fn repetitive_nearest_neighbor(graph: &Graph) -> Option<(Tour, f64)> {
    let best = graph
        .node_ids()
        .filter_map(|start| {
            let tour = nearest_neighbor(graph, start)?;
            let weight = tour.weight(graph);
            debug!("nearest-neighbor from {start}: weight {weight}");
            Some((tour, weight))
        })
        .min_by_key(|&(_, weight)| OrderedFloat(weight))?;

    debug!("best of all starts: weight {}", best.1);
    Some(best)
}
