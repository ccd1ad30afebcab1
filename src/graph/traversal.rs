//! Graph traversal algorithms (BFS, DFS).

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use super::Graph;

/// Strategy for visiting the vertices reachable from a start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Breadth-first, FIFO queue.
    Breadth,
    /// Depth-first, LIFO stack.
    Depth,
}

impl TraversalOrder {
    /// Short name used in CLI output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// BFS visiting order from `start`.
///
/// Siblings are enqueued in edge storage order. `start` is always the first
/// element even when no edge touches it.
pub fn bfs<T: Clone + Eq + Hash + Debug>(graph: &Graph<T>, start: &T) -> Vec<T> {
    let mut visited: HashSet<T> = HashSet::new();
    let mut visited_order: Vec<T> = Vec::new();
    let mut queue: VecDeque<T> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(front) = queue.pop_front() {
        log::trace!("bfs: dequeued vertex #{}", visited_order.len());
        for neighbor in graph.adjacent_vertices(&front) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor);
            }
        }
        visited_order.push(front);
    }

    log::debug!(
        "BFS from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    visited_order
}

/// DFS visiting order from `start`, using an explicit stack.
///
/// Vertices are marked visited when pushed, not when popped, so each vertex
/// enters the stack at most once.
pub fn dfs<T: Clone + Eq + Hash + Debug>(graph: &Graph<T>, start: &T) -> Vec<T> {
    let mut visited: HashSet<T> = HashSet::new();
    let mut visited_order: Vec<T> = Vec::new();
    let mut stack: Vec<T> = Vec::new();

    visited.insert(start.clone());
    stack.push(start.clone());

    while let Some(top) = stack.pop() {
        log::trace!("dfs: popped vertex #{}", visited_order.len());
        for neighbor in graph.adjacent_vertices(&top) {
            if visited.insert(neighbor.clone()) {
                stack.push(neighbor);
            }
        }
        visited_order.push(top);
    }

    log::debug!(
        "DFS from {:?} visited {} vertices",
        start,
        visited_order.len()
    );
    visited_order
}
