//! Textual rendering of a graph into injected line sinks.

pub mod adjacency;
pub mod sink;

pub use adjacency::{GraphRenderer, VertexFormatter};
pub use sink::{FnSink, LineSink, LogSink, WriteSink};
