//! A keyed directed graph with optional edge weights.
//!
//! Vertices are stored in a hash map keyed by identifier, and each vertex owns
//! a hash map of its outbound edges. There is no reverse index: removing a
//! vertex scans every adjacency map to sever inbound edges.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) expected | Replacement keeps outbound edges |
//! | `remove_vertex` | \(O(n)\) expected | Visits every vertex's adjacency map |
//! | `add_edge` | \(O(1)\) expected | No-op when the edge exists |
//! | `remove_edge` | \(O(1)\) expected | |
//! | `edge_exists` / `vertex_exists` | \(O(1)\) expected | Never fail |
//! | `get_adjacent_vertices` | \(O(\text{out-degree})\) | |
//! | `edge_count` | \(O(n)\) | Sums out-degrees |

use core::fmt;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use num_traits::{CheckedAdd, Zero};
use tracing::debug;

use super::vertex::Vertex;
use crate::error::{GraphError, Result};

/// Numeric edge cost accepted by weighted graphs.
///
/// Implemented for every primitive integer and float.
pub trait EdgeWeight: Copy + PartialOrd + Zero {
    /// Adds two path costs, or returns `None` if the total is not representable.
    ///
    /// Integers fail on overflow; floats fail when the sum is not finite.
    fn checked_total(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn checked_total(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl EdgeWeight for $t {
                #[inline]
                fn checked_total(self, rhs: Self) -> Option<Self> {
                    let total = self + rhs;
                    total.is_finite().then_some(total)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// A directed graph keyed by identifiers of type `K`, holding payloads of type
/// `V` and, when weighted, edge costs of type `W`.
///
/// Whether the graph is weighted is fixed at construction. A weighted graph
/// requires a strictly positive weight on every edge; an unweighted graph
/// discards any weight it is handed.
///
/// The graph is a plain owned value: mutation takes `&mut self`, and callers
/// that share it across threads wrap the whole graph in their own lock.
#[derive(Clone)]
pub struct DirectedGraph<K, V, W = u64> {
    vertices: HashMap<K, Vertex<K, V, W>>,
    size: usize,
    weighted: bool,
}

impl<K, V, W> DirectedGraph<K, V, W> {
    /// Creates an empty graph. `weighted` cannot be changed afterwards.
    pub fn new(weighted: bool) -> Self {
        Self {
            vertices: HashMap::new(),
            size: 0,
            weighted,
        }
    }

    /// Creates an empty weighted graph.
    pub fn weighted() -> Self {
        Self::new(true)
    }

    /// Creates an empty unweighted graph.
    pub fn unweighted() -> Self {
        Self::new(false)
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(weighted: bool, capacity: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(capacity),
            size: 0,
            weighted,
        }
    }

    /// Returns `true` if edges carry weights.
    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    /// Iterates over every vertex identifier in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// Iterates over every `(identifier, value)` pair in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.vertices.iter().map(|(k, v)| (k, v.value()))
    }
}

impl<K: Eq + Hash, V, W> DirectedGraph<K, V, W> {
    /// Returns `true` if a vertex with this identifier exists.
    #[inline]
    pub fn vertex_exists(&self, id: &K) -> bool {
        self.vertices.contains_key(id)
    }

    /// Returns `true` if `from` exists and has an edge to `to`.
    ///
    /// Absent identifiers yield `false`.
    pub fn edge_exists(&self, from: &K, to: &K) -> bool {
        self.vertices.get(from).is_some_and(|v| v.has_edge_to(to))
    }

    /// Returns the vertex with this identifier.
    pub fn vertex(&self, id: &K) -> Option<&Vertex<K, V, W>> {
        self.vertices.get(id)
    }

    /// Returns the payload of the vertex with this identifier.
    pub fn value(&self, id: &K) -> Option<&V> {
        self.vertices.get(id).map(Vertex::value)
    }

    /// Returns the payload of the vertex with this identifier mutably.
    pub fn value_mut(&mut self, id: &K) -> Option<&mut V> {
        self.vertices.get_mut(id).map(Vertex::value_mut)
    }

    /// Returns the weight of the edge `from -> to`.
    ///
    /// `None` if the edge does not exist or the graph is unweighted.
    pub fn edge_weight(&self, from: &K, to: &K) -> Option<W>
    where
        W: Copy,
    {
        self.vertices.get(from).and_then(|v| v.weight_to(to)).copied()
    }
}

impl<K, V, W> DirectedGraph<K, V, W>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Adds a vertex, or replaces the value of an existing one.
    ///
    /// Replacement rebuilds the vertex around the new value and its current
    /// outbound edges; inbound edges stay valid since the identifier persists.
    /// Returns the replaced value, or `None` if the vertex is new.
    pub fn add_vertex(&mut self, id: K, value: V) -> Option<V> {
        match self.vertices.entry(id) {
            Entry::Occupied(mut slot) => {
                let current = slot.get_mut();
                let adjacency = std::mem::take(current.adjacency_mut());
                let id = current.id().clone();
                debug!(vertex = ?id, out_degree = adjacency.len(), "replacing vertex value");
                let replaced =
                    std::mem::replace(current, Vertex::with_adjacency(id, value, adjacency));
                let (_, old_value, _) = replaced.into_parts();
                Some(old_value)
            }
            Entry::Vacant(slot) => {
                let id = slot.key().clone();
                debug!(vertex = ?id, "adding vertex");
                slot.insert(Vertex::new(id, value));
                self.size += 1;
                None
            }
        }
    }

    /// Removes a vertex, every edge pointing at it, and its outbound edges.
    ///
    /// Returns the removed payload.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is absent; the graph is left unchanged.
    pub fn remove_vertex(&mut self, id: &K) -> Result<V, K> {
        let vertex = self
            .vertices
            .remove(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))?;

        // Self-loops left with the vertex itself.
        let mut severed = 0usize;
        for other in self.vertices.values_mut() {
            if other.adjacency_mut().remove(id).is_some() {
                severed += 1;
            }
        }
        self.size -= 1;
        debug_assert_eq!(self.size, self.vertices.len());
        debug!(vertex = ?id, inbound_severed = severed, "removed vertex");

        let (_, value, _) = vertex.into_parts();
        Ok(value)
    }

    /// Removes the edge `from -> to`.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge does not exist, whether because
    /// `from` is absent, `to` is absent, or the two are simply not connected.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<(), K> {
        let removed = self
            .vertices
            .get_mut(from)
            .and_then(|v| v.adjacency_mut().remove(to))
            .is_some();
        if !removed {
            return Err(GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            });
        }
        debug!(from = ?from, to = ?to, "removed edge");
        Ok(())
    }

    /// Returns the identifiers adjacent to `id`, in unspecified order.
    ///
    /// `Ok(None)` marks a vertex with no outbound edges; a returned `Vec` is
    /// never empty.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `id` is absent.
    pub fn get_adjacent_vertices(&self, id: &K) -> Result<Option<Vec<K>>, K> {
        let vertex = self.require(id)?;
        if vertex.out_degree() == 0 {
            return Ok(None);
        }
        Ok(Some(vertex.neighbor_ids().cloned().collect()))
    }

    pub(crate) fn require(&self, id: &K) -> Result<&Vertex<K, V, W>, K> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::VertexNotFound(id.clone()))
    }
}

impl<K, V, W> DirectedGraph<K, V, W>
where
    K: Eq + Hash + Clone + fmt::Debug,
    W: EdgeWeight,
{
    /// Adds the edge `from -> to`.
    ///
    /// An existing edge is left as is, including its weight. On an unweighted
    /// graph any supplied weight is discarded.
    ///
    /// A weight of zero is treated the same as a missing weight and rejected,
    /// so weighted graphs cannot hold zero-cost edges.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if `from` is absent, otherwise if `to` is absent.
    /// - [`GraphError::WeightRequired`] if the graph is weighted and `weight` is
    ///   `None` or not strictly positive.
    pub fn add_edge(&mut self, from: &K, to: &K, weight: Option<W>) -> Result<(), K> {
        let weighted = self.weighted;
        let to_exists = self.vertex_exists(to);
        let source = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::VertexNotFound(from.clone()))?;
        if !to_exists {
            return Err(GraphError::VertexNotFound(to.clone()));
        }
        if source.has_edge_to(to) {
            return Ok(());
        }

        let stored = if weighted {
            match weight {
                Some(w) if w > W::zero() => Some(w),
                _ => return Err(GraphError::WeightRequired),
            }
        } else {
            None
        };

        source.adjacency_mut().insert(to.clone(), stored);
        debug!(from = ?from, to = ?to, weighted, "added edge");
        Ok(())
    }
}

impl<K, V, W> Default for DirectedGraph<K, V, W> {
    fn default() -> Self {
        Self::unweighted()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, W: fmt::Debug> fmt::Debug for DirectedGraph<K, V, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("weighted", &self.weighted)
            .field("size", &self.size)
            .field("vertices", &self.vertices)
            .finish()
    }
}
