//! The directed graph engine and its searches.
//!
//! - `directed`: storage, mutation and queries
//! - `traversal`: depth-first and breadth-first reachability
//! - `shortest_path`: single-source minimum distances
//! - `vertex`: per-vertex payload and outbound adjacency

pub mod directed;
pub mod shortest_path;
pub mod traversal;
pub mod vertex;

pub use directed::{DirectedGraph, EdgeWeight};
pub use shortest_path::MinPaths;
pub use traversal::BreadthFirst;
pub use vertex::Vertex;
