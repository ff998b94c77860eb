//! Single-source shortest paths over positive edge weights.
//!
//! Uniform-cost search with lazy deletion: instead of lowering a queued
//! vertex's priority in place, every relaxation enqueues a fresh entry and
//! stale entries are discarded when they surface. A vertex is finalized on
//! its first pop, which is always at its minimum distance because the
//! [`MinPriorityQueue`] yields the smallest accumulated distance first and all
//! weights are positive.
//!
//! ### Performance Characteristics
//! \(O((n + m) \log m)\) time and \(O(m)\) queue space, where a vertex may be
//! enqueued once per inbound edge.

use core::fmt;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use super::directed::{DirectedGraph, EdgeWeight};
use crate::collections::MinPriorityQueue;
use crate::error::{GraphError, Result};

/// Distances from one source to every vertex it reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct MinPaths<K: Eq + Hash, W> {
    order: Vec<K>,
    distances: HashMap<K, W>,
}

impl<K: Eq + Hash, W> MinPaths<K, W> {
    /// Reached vertices in the order they were finalized, which is
    /// non-decreasing in distance. The source comes first.
    pub fn order(&self) -> &[K] {
        &self.order
    }

    /// Finalized distance of every reached vertex.
    pub fn distances(&self) -> &HashMap<K, W> {
        &self.distances
    }

    /// Distance to `id`, or `None` if it is unreachable from the source.
    pub fn distance(&self, id: &K) -> Option<&W> {
        self.distances.get(id)
    }

    /// Number of reached vertices, source included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`: the source reaches itself.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Splits into the ordered identifiers and the distance map.
    pub fn into_parts(self) -> (Vec<K>, HashMap<K, W>) {
        (self.order, self.distances)
    }
}

impl<K, V, W> DirectedGraph<K, V, W>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight + fmt::Debug,
{
    /// Computes the minimum total weight from `from` to every reachable vertex.
    ///
    /// Unreachable vertices are absent from the result.
    ///
    /// # Errors
    /// - [`GraphError::Unweighted`] if the graph is unweighted (checked first).
    /// - [`GraphError::VertexNotFound`] if `from` is absent.
    /// - [`GraphError::DistanceOverflow`] if a reachable vertex has no path
    ///   whose total weight fits in `W`.
    pub fn min_path(&self, from: &K) -> Result<MinPaths<K, W>, K> {
        if !self.is_weighted() {
            return Err(GraphError::Unweighted);
        }
        self.require(from)?;

        let mut distances: HashMap<K, W> = HashMap::new();
        let mut order = Vec::new();
        let mut queue = MinPriorityQueue::new();
        queue.enqueue(W::zero(), from);
        // Targets of dropped relaxations whose total did not fit in `W`.
        let mut overflowed: Vec<&K> = Vec::new();

        while let Some((distance, current)) = queue.dequeue() {
            if distances.contains_key(current) {
                // Stale entry; already finalized at a smaller distance.
                continue;
            }
            trace!(vertex = ?current, distance = ?distance, "finalized");
            distances.insert(current.clone(), distance);
            order.push(current.clone());

            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            for (next, weight) in vertex.neighbors() {
                let Some(&weight) = weight else {
                    continue;
                };
                match distance.checked_total(weight) {
                    Some(total) => queue.enqueue(total, next),
                    // Larger than any representable distance; another path may still fit.
                    None => overflowed.push(next),
                }
            }
        }

        if let Some(unreached) = overflowed.into_iter().find(|id| !distances.contains_key(*id)) {
            debug!(from = ?from, vertex = ?unreached, "min_path distance overflow");
            return Err(GraphError::DistanceOverflow(unreached.clone()));
        }

        debug!(from = ?from, reached = order.len(), "min_path finished");
        Ok(MinPaths { order, distances })
    }
}
