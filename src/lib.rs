//! # `dirgraph` - Keyed Directed Graphs
//!
//! A directed graph container with vertex and edge mutation, reachability
//! queries and single-source shortest paths over positive edge weights.
//!
//! ## Architecture
//!
//! The crate is split in two layers:
//!
//! 1. **Ordered containers** ([`collections`]): [`Stack`], [`Queue`] and
//!    [`MinPriorityQueue`]. Generic, graph-agnostic, independently tested.
//! 2. **Graph engine** ([`graph`]): [`DirectedGraph`] owns every vertex and its
//!    outbound adjacency, and runs three searches on top of the containers:
//!    - `depth_first_search`: stack-driven, stops at the target
//!    - `breadth_first_search`: queue-driven, always drains the reachable component
//!    - `min_path`: priority-driven uniform-cost search with lazy deletion
//!
//! ### Invariants
//!
//! - No adjacency entry ever names a vertex that is not in the graph: removing
//!   a vertex severs every inbound edge.
//! - Edges of a weighted graph always carry a strictly positive weight; edges of
//!   an unweighted graph never carry one.
//! - A failed operation leaves the graph untouched.
//!
//! ### Known limitation
//!
//! Weighted graphs reject a weight of zero as if no weight had been supplied,
//! so zero-cost edges cannot be represented.
//!
//! ## Logging
//!
//! Mutations emit `tracing` events at `debug` level and search loops at `trace`
//! level. The crate never installs a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use dirgraph::DirectedGraph;
//!
//! let mut graph: DirectedGraph<&str, (), u32> = DirectedGraph::weighted();
//! for id in ["A", "B", "C"] {
//!     graph.add_vertex(id, ());
//! }
//! graph.add_edge(&"A", &"B", Some(1)).unwrap();
//! graph.add_edge(&"B", &"C", Some(2)).unwrap();
//! graph.add_edge(&"A", &"C", Some(5)).unwrap();
//!
//! assert!(graph.depth_first_search(&"A", &"C").unwrap());
//!
//! let paths = graph.min_path(&"A").unwrap();
//! assert_eq!(paths.order(), &["A", "B", "C"]);
//! assert_eq!(paths.distance(&"C"), Some(&3));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{MinPriorityQueue, Queue, Stack};
pub use error::{ErrorKind, GraphError, Result};
pub use graph::{BreadthFirst, DirectedGraph, EdgeWeight, MinPaths, Vertex};
