//! Reachability searches over a [`DirectedGraph`].
//!
//! Both searches are iterative and drive one of the crate's ordered
//! containers: depth-first uses a [`Stack`], breadth-first a [`Queue`].
//! Sibling order follows the adjacency map and is unspecified.
//!
//! The two searches differ on purpose:
//! - DFS checks `visited` when it pops and stops as soon as it reaches the target.
//! - BFS checks `visited` when it enqueues and always drains the whole
//!   reachable component, even after the target turned up.

use core::fmt;
use std::collections::HashSet;
use std::hash::Hash;

use tracing::{debug, trace};

use super::directed::DirectedGraph;
use crate::collections::{Queue, Stack};
use crate::error::Result;

/// Outcome of [`DirectedGraph::breadth_first_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreadthFirst<K: Eq + Hash> {
    /// No target was requested: every vertex reachable from the source,
    /// source included.
    Reachable(HashSet<K>),
    /// A target was requested.
    Target {
        /// Whether the target is reachable from the source.
        found: bool,
        /// Every vertex reachable from the source, source included.
        reachable: HashSet<K>,
    },
}

impl<K: Eq + Hash> BreadthFirst<K> {
    /// Every vertex reachable from the source.
    pub fn reachable(&self) -> &HashSet<K> {
        match self {
            BreadthFirst::Reachable(reachable) | BreadthFirst::Target { reachable, .. } => {
                reachable
            }
        }
    }

    /// Whether the target was found; `None` if no target was requested.
    pub fn found(&self) -> Option<bool> {
        match self {
            BreadthFirst::Reachable(_) => None,
            BreadthFirst::Target { found, .. } => Some(*found),
        }
    }

    /// Consumes the outcome and returns the reachable set.
    pub fn into_reachable(self) -> HashSet<K> {
        match self {
            BreadthFirst::Reachable(reachable) | BreadthFirst::Target { reachable, .. } => {
                reachable
            }
        }
    }
}

impl<K, V, W> DirectedGraph<K, V, W>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Returns `true` if `to` is reachable from `from` along directed edges.
    ///
    /// A vertex always reaches itself. The search stops at the first visit of
    /// `to`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `from` or `to` is absent (`from` is checked first).
    pub fn depth_first_search(&self, from: &K, to: &K) -> Result<bool, K> {
        self.require(from)?;
        self.require(to)?;

        let mut visited: HashSet<&K> = HashSet::new();
        let mut stack = Stack::new();
        stack.push(from);

        // A vertex may sit on the stack several times; only its first pop counts.
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            trace!(vertex = ?current, "dfs visit");
            if current == to {
                debug!(from = ?from, to = ?to, visited = visited.len(), "dfs reached target");
                return Ok(true);
            }
            if let Some(vertex) = self.vertex(current) {
                stack.extend(vertex.neighbor_ids());
            }
        }

        debug!(from = ?from, to = ?to, visited = visited.len(), "dfs exhausted without target");
        Ok(false)
    }

    /// Collects every vertex reachable from `from` in level order and, when
    /// `target` is given, reports whether it was among them.
    ///
    /// The whole reachable component is explored either way.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`](crate::GraphError::VertexNotFound) if
    /// `from`, or a supplied `target`, is absent.
    pub fn breadth_first_search(&self, from: &K, target: Option<&K>) -> Result<BreadthFirst<K>, K> {
        self.require(from)?;
        if let Some(target) = target {
            self.require(target)?;
        }

        let mut visited: HashSet<&K> = HashSet::new();
        let mut queue = Queue::new();
        queue.enqueue(from);
        let mut found = false;

        while let Some(current) = queue.dequeue() {
            if target == Some(current) {
                found = true;
            }
            // Two parents in the same level can both enqueue a vertex.
            if !visited.insert(current) {
                continue;
            }
            trace!(vertex = ?current, "bfs visit");
            if let Some(vertex) = self.vertex(current) {
                for next in vertex.neighbor_ids() {
                    if !visited.contains(next) {
                        queue.enqueue(next);
                    }
                }
            }
        }

        debug!(from = ?from, reachable = visited.len(), found, "bfs finished");
        let reachable: HashSet<K> = visited.into_iter().cloned().collect();
        Ok(match target {
            Some(_) => BreadthFirst::Target { found, reachable },
            None => BreadthFirst::Reachable(reachable),
        })
    }
}
