//! Graph vertices and their outbound adjacency.

use std::collections::HashMap;
use std::hash::Hash;

/// One vertex of a [`DirectedGraph`](super::DirectedGraph).
///
/// Holds the identifier, the caller's payload and every outbound edge. An edge
/// maps the neighbor's identifier to its weight, which is `Some` exactly when
/// the owning graph is weighted.
#[derive(Debug, Clone)]
pub struct Vertex<K, V, W> {
    id: K,
    value: V,
    adjacency: HashMap<K, Option<W>>,
}

impl<K, V, W> Vertex<K, V, W> {
    pub(crate) fn new(id: K, value: V) -> Self {
        Self::with_adjacency(id, value, HashMap::new())
    }

    pub(crate) fn with_adjacency(id: K, value: V, adjacency: HashMap<K, Option<W>>) -> Self {
        Self {
            id,
            value,
            adjacency,
        }
    }

    /// Returns the vertex identifier.
    #[inline]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Returns the payload.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the payload mutably.
    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Number of outbound edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterates over outbound edges as `(neighbor, weight)` in unspecified order.
    pub fn neighbors(&self) -> impl Iterator<Item = (&K, Option<&W>)> + '_ {
        self.adjacency.iter().map(|(k, w)| (k, w.as_ref()))
    }

    pub(crate) fn neighbor_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.adjacency.keys()
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut HashMap<K, Option<W>> {
        &mut self.adjacency
    }

    pub(crate) fn into_parts(self) -> (K, V, HashMap<K, Option<W>>) {
        (self.id, self.value, self.adjacency)
    }
}

impl<K: Eq + Hash, V, W> Vertex<K, V, W> {
    /// Returns `true` if there is an edge from this vertex to `to`.
    #[inline]
    pub fn has_edge_to(&self, to: &K) -> bool {
        self.adjacency.contains_key(to)
    }

    /// Returns the weight of the edge to `to`, if the edge exists and is weighted.
    pub fn weight_to(&self, to: &K) -> Option<&W> {
        self.adjacency.get(to).and_then(Option::as_ref)
    }
}
