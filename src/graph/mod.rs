//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod edge_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use edge_graph::Graph;
pub use traversal::{bfs, dfs, TraversalOrder};
