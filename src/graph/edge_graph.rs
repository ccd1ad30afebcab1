//! Core graph structure — an edge list with derived vertex queries.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Edge;

use super::traversal::{self, TraversalOrder};

/// An undirected graph stored as the edge list it was built from.
///
/// Vertices are never stored on their own: a vertex exists only while some
/// edge references it, and the vertex set is derived from the edges on
/// demand. Edges keep their insertion order and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T> {
    /// All edges, in the order they were supplied.
    edges: Vec<Edge<T>>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Build a graph from edges, copied in their given order.
    ///
    /// No validation is performed: duplicate edges and self-loops are kept.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<T>>,
    {
        let edges: Vec<Edge<T>> = edges.into_iter().map(Into::into).collect();
        log::debug!("Built graph from {} edges", edges.len());
        Self { edges }
    }

    /// Number of stored edges, duplicates included.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no edges (and therefore no vertices).
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges in storage order.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }
}

impl<T: Clone + Eq + Hash> Graph<T> {
    /// Number of distinct vertices referenced by any edge.
    pub fn order(&self) -> usize {
        let mut seen: HashSet<&T> = HashSet::new();
        for edge in &self.edges {
            seen.insert(&edge.source);
            seen.insert(&edge.target);
        }
        seen.len()
    }

    /// Distinct vertices in order of first appearance.
    ///
    /// Edges are scanned in storage order, source before target, so the
    /// result is the same on every call.
    pub fn vertices(&self) -> Vec<T> {
        let mut seen: HashSet<&T> = HashSet::new();
        let mut vertices = Vec::new();
        for edge in &self.edges {
            for vertex in [&edge.source, &edge.target] {
                if seen.insert(vertex) {
                    vertices.push(vertex.clone());
                }
            }
        }
        vertices
    }

    /// Vertices adjacent to `vertex`, one entry per touching edge in storage order.
    ///
    /// Duplicate edges give duplicate entries. A self-loop `(v, v)` yields `v`
    /// once, since only the source side matches.
    pub fn adjacent_vertices(&self, vertex: &T) -> Vec<T> {
        self.edges
            .iter()
            .filter_map(|edge| edge.opposite(vertex))
            .cloned()
            .collect()
    }

    /// True if some edge is `(a, b)` or `(b, a)`.
    pub fn are_connected(&self, a: &T, b: &T) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }
}

impl<T: Clone + Eq + Hash + Debug> Graph<T> {
    /// Breadth-first visiting order from `start`.
    pub fn bfs(&self, start: &T) -> Vec<T> {
        traversal::bfs(self, start)
    }

    /// Depth-first visiting order from `start`.
    pub fn dfs(&self, start: &T) -> Vec<T> {
        traversal::dfs(self, start)
    }

    /// Visiting order from `start` using the requested strategy.
    pub fn traverse(&self, start: &T, order: TraversalOrder) -> Vec<T> {
        match order {
            TraversalOrder::Breadth => self.bfs(start),
            TraversalOrder::Depth => self.dfs(start),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Edge<T>> for Graph<T> {
    fn from_iter<I: IntoIterator<Item = Edge<T>>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}
