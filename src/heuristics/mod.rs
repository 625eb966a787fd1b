//! Heuristics engine: pure functions over a read-only graph snapshot.
//!
//! Every function here takes the graph by shared reference, runs to
//! completion on the calling thread, and returns its result as a value.
//! Failure to construct a tour is an absent result, never a panic.

pub mod construction;
pub mod local_search;
pub mod spanning_tree;

pub use construction::{nearest_neighbor, repetitive_nearest_neighbor};
pub use local_search::two_opt;
pub use spanning_tree::{minimum_spanning_tree, SpanningTree};
