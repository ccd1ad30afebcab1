//! Fluent API for building Graph instances.

use crate::types::Edge;

use super::Graph;

/// Fluent builder collecting edges for a [`Graph`].
pub struct GraphBuilder<T> {
    edges: Vec<Edge<T>>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Create a builder with room for `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, a: T, b: T) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Add every edge from an iterator, keeping its order.
    pub fn extend<I, E>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<T>>,
    {
        self.edges.extend(edges.into_iter().map(Into::into));
        self
    }

    /// Number of edges collected so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        Graph::from_edges(self.edges)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
