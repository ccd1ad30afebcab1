//! Adjacency list and adjacency matrix rendering.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::LineSink;

/// Vertex-to-text conversion used by the renderer.
pub type VertexFormatter<'f, T> = Box<dyn Fn(&T) -> String + 'f>;

/// Renders a graph as text lines through a caller-supplied vertex formatter.
///
/// A renderer starts without a formatter; every render call fails with
/// [`GraphError::MissingFormatter`] until one is bound.
pub struct GraphRenderer<'f, T> {
    formatter: Option<VertexFormatter<'f, T>>,
}

impl<'f, T> GraphRenderer<'f, T> {
    /// Create a renderer with no formatter bound.
    pub fn new() -> Self {
        Self { formatter: None }
    }

    /// Create a renderer using `format` for every vertex.
    pub fn with_formatter<F>(format: F) -> Self
    where
        F: Fn(&T) -> String + 'f,
    {
        Self {
            formatter: Some(Box::new(format)),
        }
    }

    /// Bind or replace the formatter.
    pub fn set_formatter<F>(&mut self, format: F)
    where
        F: Fn(&T) -> String + 'f,
    {
        self.formatter = Some(Box::new(format));
    }

    /// True once a formatter is bound.
    pub fn has_formatter(&self) -> bool {
        self.formatter.is_some()
    }

    fn formatter(&self) -> GraphResult<&VertexFormatter<'f, T>> {
        self.formatter.as_ref().ok_or(GraphError::MissingFormatter)
    }
}

impl<'f, T: Display + 'f> GraphRenderer<'f, T> {
    /// Renderer that formats vertices with their `Display` impl.
    pub fn display() -> Self {
        Self::with_formatter(|v: &T| v.to_string())
    }
}

impl<'f, T: Clone + Eq + Hash> GraphRenderer<'f, T> {
    /// Emit one `(A - B)` line per stored edge, in storage order.
    ///
    /// Returns the number of lines emitted.
    pub fn adjacency_list<S>(&self, graph: &Graph<T>, sink: &mut S) -> GraphResult<usize>
    where
        S: LineSink + ?Sized,
    {
        let fmt_vertex = self.formatter()?;
        for edge in graph.edges() {
            let line = format!(
                "({} - {})",
                fmt_vertex(&edge.source),
                fmt_vertex(&edge.target)
            );
            sink.emit_line(&line)?;
        }
        Ok(graph.size())
    }

    /// Emit the adjacency matrix: a `#` header of vertex labels, then one row
    /// per vertex of `0`/`1` connection flags.
    ///
    /// Vertices appear in [`Graph::vertices`] order. Returns the number of
    /// lines emitted (always `order + 1`).
    pub fn adjacency_matrix<S>(&self, graph: &Graph<T>, sink: &mut S) -> GraphResult<usize>
    where
        S: LineSink + ?Sized,
    {
        let fmt_vertex = self.formatter()?;
        let vertices = graph.vertices();
        let labels: Vec<String> = vertices.iter().map(|v| fmt_vertex(v)).collect();

        // Same answers as Graph::are_connected, without rescanning the edges per cell.
        let index: HashMap<&T, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        let mut connected: HashSet<(usize, usize)> = HashSet::new();
        for edge in graph.edges() {
            let (a, b) = (index[&edge.source], index[&edge.target]);
            connected.insert((a, b));
            connected.insert((b, a));
        }

        let mut header = String::from("#");
        for label in &labels {
            header.push(' ');
            header.push_str(label);
        }
        sink.emit_line(&header)?;

        for (row, label) in labels.iter().enumerate() {
            let mut line = label.clone();
            for col in 0..vertices.len() {
                line.push(' ');
                line.push(if connected.contains(&(row, col)) { '1' } else { '0' });
            }
            sink.emit_line(&line)?;
        }

        Ok(vertices.len() + 1)
    }

    /// Adjacency list collected into owned lines.
    pub fn adjacency_list_lines(&self, graph: &Graph<T>) -> GraphResult<Vec<String>> {
        let mut lines = Vec::with_capacity(graph.size());
        self.adjacency_list(graph, &mut lines)?;
        Ok(lines)
    }

    /// Adjacency matrix collected into owned lines.
    pub fn adjacency_matrix_lines(&self, graph: &Graph<T>) -> GraphResult<Vec<String>> {
        let mut lines = Vec::new();
        self.adjacency_matrix(graph, &mut lines)?;
        Ok(lines)
    }
}

impl<'f, T> Default for GraphRenderer<'f, T> {
    fn default() -> Self {
        Self::new()
    }
}
