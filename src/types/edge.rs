//! The edge struct shared by every graph operation.

use serde::{Deserialize, Serialize};

/// A pair of vertices stored in insertion order.
///
/// The graph interprets every edge symmetrically: `(a, b)` makes `a`
/// adjacent to `b` and `b` adjacent to `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T> {
    /// First endpoint as supplied by the caller.
    pub source: T,
    /// Second endpoint as supplied by the caller.
    pub target: T,
}

impl<T> Edge<T> {
    /// Create a new edge.
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Both endpoints, source first.
    pub fn endpoints(&self) -> (&T, &T) {
        (&self.source, &self.target)
    }
}

impl<T: PartialEq> Edge<T> {
    /// True when either endpoint equals `vertex`.
    pub fn touches(&self, vertex: &T) -> bool {
        self.source == *vertex || self.target == *vertex
    }

    /// True when both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Undirected match: the edge is `(a, b)` or `(b, a)`.
    pub fn connects(&self, a: &T, b: &T) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// The endpoint opposite `vertex`, if the edge touches it.
    ///
    /// The source side is checked first, so a self-loop yields its vertex once.
    pub fn opposite(&self, vertex: &T) -> Option<&T> {
        if self.source == *vertex {
            Some(&self.target)
        } else if self.target == *vertex {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl<T> From<(T, T)> for Edge<T> {
    fn from((source, target): (T, T)) -> Self {
        Self::new(source, target)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} - {})", self.source, self.target)
    }
}
