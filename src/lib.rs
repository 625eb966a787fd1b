//! ATSP Solver Library
//!
//! Heuristics for the Asymmetric Traveling Salesman Problem over directed
//! weighted graphs built interactively by a caller.
//!
//! # Features
//!
//! - Directed weighted graph model with edit operations (node append,
//!   edge upsert) and pure lookups
//! - Nearest-neighbor tour construction from a fixed start
//! - Repetitive nearest-neighbor (best of all starts)
//! - 2-opt local search refinement
//! - Minimum spanning tree of the undirected projection
//!
//! The heuristics never mutate the graph and never consult a random source;
//! picking a start node at random is the caller's job.
//!
//! # Example
//!
//! ```
//! use atsp_solver::graph::Graph;
//! use atsp_solver::heuristics::{repetitive_nearest_neighbor, two_opt};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node((0.0, 0.0));
//! let b = graph.add_node((100.0, 0.0));
//! let c = graph.add_node((50.0, 80.0));
//! for (from, to, weight) in [(a, b, 4), (b, c, 3), (c, a, 5)] {
//!     graph.upsert_edge(from, to, weight).unwrap();
//!     graph.upsert_edge(to, from, weight).unwrap();
//! }
//!
//! let (tour, weight) = repetitive_nearest_neighbor(&graph).unwrap();
//! assert_eq!(weight, 12.0);
//!
//! let refined = two_opt(&graph, &tour);
//! assert!(refined.weight(&graph) <= weight);
//! ```

pub mod error;
pub mod graph;
pub mod heuristics;
pub mod tour;

pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
pub use tour::Tour;
