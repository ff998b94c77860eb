//! Error types for graph operations.

use core::fmt;

/// The two failure categories every [`GraphError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex or edge that had to exist does not.
    NotFound,
    /// The call is not valid for the graph's configuration.
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::InvalidArgument => "invalid argument",
        })
    }
}

/// Error returned by fallible [`DirectedGraph`](crate::DirectedGraph) operations.
///
/// A failed operation never leaves the graph partially modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<K> {
    /// No vertex with this identifier exists.
    #[error("no vertex in the graph with identifier {0:?}")]
    VertexNotFound(K),
    /// No edge exists between the two identifiers.
    #[error("no edge from {from:?} to {to:?}")]
    EdgeNotFound {
        /// Identifier the edge would start at.
        from: K,
        /// Identifier the edge would end at.
        to: K,
    },
    /// The graph is weighted and the edge was given no usable weight.
    ///
    /// Zero counts as "no weight", as do negative and NaN weights.
    #[error("graph is weighted: every edge must be supplied with a positive weight")]
    WeightRequired,
    /// Shortest-path distances were requested on an unweighted graph.
    #[error("shortest-path distances require a weighted graph")]
    Unweighted,
    /// The shortest distance to a reachable vertex does not fit in the weight type.
    #[error("distance to {0:?} overflows the edge weight type")]
    DistanceOverflow(K),
}

impl<K> GraphError<K> {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. } => ErrorKind::NotFound,
            GraphError::WeightRequired
            | GraphError::Unweighted
            | GraphError::DistanceOverflow(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Returns `true` if this is a [`ErrorKind::NotFound`] error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Returns `true` if this is a [`ErrorKind::InvalidArgument`] error.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

/// Result alias for graph operations keyed by `K`.
pub type Result<T, K> = core::result::Result<T, GraphError<K>>;
