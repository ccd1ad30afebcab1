//! CLI command implementations.
//!
//! Every command writes its output to a [`LineSink`], so the binary decides
//! whether lines go to stdout or to the log.

use std::hash::Hash;

use clap::ValueEnum;

use crate::graph::{Graph, GraphBuilder, TraversalOrder};
use crate::render::{GraphRenderer, LineSink};
use crate::types::{Edge, GraphResult};

use super::parse::DEMO_EDGES;

/// Output format selected by the global `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// True for JSON output.
    pub fn is_json(&self) -> bool {
        *self == Self::Json
    }
}

/// Build a graph with string vertices from parsed edges.
pub fn load_graph(edges: Vec<Edge<String>>) -> Graph<String> {
    Graph::from_edges(edges)
}

fn emit_json(out: &mut dyn LineSink, value: &serde_json::Value) -> GraphResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    for line in text.lines() {
        out.emit_line(line)?;
    }
    Ok(())
}

/// Vertices in render order and the 0/1 matrix of `are_connected` between them.
fn connection_matrix<T: Clone + Eq + Hash>(graph: &Graph<T>) -> (Vec<T>, Vec<Vec<u8>>) {
    let vertices = graph.vertices();
    let rows = vertices
        .iter()
        .map(|a| {
            vertices
                .iter()
                .map(|b| u8::from(graph.are_connected(a, b)))
                .collect()
        })
        .collect();
    (vertices, rows)
}

fn join(vertices: &[String]) -> String {
    vertices.join(" ")
}

/// Build the fixed demo graph and report on it.
///
/// Prints the adjacency list, order, size, BFS and DFS from vertex 1, and
/// the adjacency matrix. In JSON mode the same report is one object.
pub fn cmd_demo(out: &mut dyn LineSink, json: bool) -> GraphResult<()> {
    let mut builder = GraphBuilder::with_capacity(DEMO_EDGES.len());
    builder.extend(DEMO_EDGES);
    let graph: Graph<i32> = builder.build();
    let start = 1;

    if json {
        let (vertices, matrix) = connection_matrix(&graph);
        return emit_json(
            out,
            &serde_json::json!({
                "edges": graph.edges(),
                "order": graph.order(),
                "size": graph.size(),
                "start": start,
                "bfs": graph.bfs(&start),
                "dfs": graph.dfs(&start),
                "vertices": vertices,
                "matrix": matrix,
            }),
        );
    }

    let renderer = GraphRenderer::with_formatter(|v: &i32| v.to_string());

    out.emit_line("Printing adjacency list...")?;
    renderer.adjacency_list(&graph, out)?;
    out.emit_line(&format!("Order:{}", graph.order()))?;
    out.emit_line(&format!("Size:{}", graph.size()))?;

    for order in [TraversalOrder::Breadth, TraversalOrder::Depth] {
        out.emit_line(&format!(
            "--- {} for {} ----",
            order.name().to_uppercase(),
            start
        ))?;
        for vertex in graph.traverse(&start, order) {
            out.emit_line(&vertex.to_string())?;
        }
    }

    out.emit_line("Printing adjacency matrix...")?;
    renderer.adjacency_matrix(&graph, out)?;
    Ok(())
}

/// Order, size and vertex list.
pub fn cmd_info(graph: &Graph<String>, out: &mut dyn LineSink, json: bool) -> GraphResult<()> {
    let vertices = graph.vertices();
    if json {
        emit_json(
            out,
            &serde_json::json!({
                "order": graph.order(),
                "size": graph.size(),
                "vertices": vertices,
            }),
        )
    } else {
        out.emit_line(&format!("Order: {}", graph.order()))?;
        out.emit_line(&format!("Size: {}", graph.size()))?;
        out.emit_line(&format!("Vertices: {}", join(&vertices)))
    }
}

/// Vertices adjacent to `vertex`, one per touching edge.
pub fn cmd_adjacent(
    graph: &Graph<String>,
    vertex: &str,
    out: &mut dyn LineSink,
    json: bool,
) -> GraphResult<()> {
    let adjacent = graph.adjacent_vertices(&vertex.to_string());
    if json {
        emit_json(
            out,
            &serde_json::json!({
                "vertex": vertex,
                "adjacent": adjacent,
            }),
        )
    } else {
        out.emit_line(&format!("Adjacent to {}: {}", vertex, join(&adjacent)))
    }
}

/// Traversal order from `start`.
pub fn cmd_traverse(
    graph: &Graph<String>,
    start: &str,
    order: TraversalOrder,
    out: &mut dyn LineSink,
    json: bool,
) -> GraphResult<()> {
    let visited = graph.traverse(&start.to_string(), order);
    if json {
        emit_json(
            out,
            &serde_json::json!({
                "order": order.name(),
                "start": start,
                "visited": visited,
            }),
        )
    } else {
        out.emit_line(&format!(
            "--- {} for {} ----",
            order.name().to_uppercase(),
            start
        ))?;
        for vertex in &visited {
            out.emit_line(vertex)?;
        }
        Ok(())
    }
}

/// One `(A - B)` line per stored edge.
pub fn cmd_list(graph: &Graph<String>, out: &mut dyn LineSink, json: bool) -> GraphResult<()> {
    if json {
        emit_json(out, &serde_json::json!({ "edges": graph.edges() }))
    } else {
        GraphRenderer::display().adjacency_list(graph, out)?;
        Ok(())
    }
}

/// The adjacency matrix.
pub fn cmd_matrix(graph: &Graph<String>, out: &mut dyn LineSink, json: bool) -> GraphResult<()> {
    if json {
        let (vertices, rows) = connection_matrix(graph);
        emit_json(
            out,
            &serde_json::json!({
                "vertices": vertices,
                "matrix": rows,
            }),
        )
    } else {
        GraphRenderer::display().adjacency_matrix(graph, out)?;
        Ok(())
    }
}
