//! edge-graph — a generic in-memory graph built from an edge list.
//!
//! Edges are stored exactly as supplied and read symmetrically. The vertex
//! set, adjacency, and BFS/DFS visiting orders are derived from the edges on
//! demand. Adjacency list and matrix renderings go through a caller-supplied
//! vertex formatter into an injected line sink.

pub mod cli;
pub mod graph;
pub mod render;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{bfs, dfs, Graph, GraphBuilder, TraversalOrder};
pub use render::{FnSink, GraphRenderer, LineSink, LogSink, VertexFormatter, WriteSink};
pub use types::{Edge, GraphError, GraphResult};
