//! Edge-list text parsing for the command line.

use crate::types::{Edge, GraphError, GraphResult};

/// The edge set the demo driver builds.
pub const DEMO_EDGES: [(i32, i32); 7] = [(1, 5), (5, 2), (7, 2), (1, 3), (2, 6), (2, 7), (7, 3)];

/// [`DEMO_EDGES`] in edge-list text form.
pub const DEMO_EDGE_LIST: &str = "1-5,5-2,7-2,1-3,2-6,2-7,7-3";

/// Parse `A-B` (or `A:B`) edges separated by commas or whitespace.
///
/// An edge containing `:` splits at its first `:`, otherwise at its first
/// `-`, so labels starting with `-` need the `:` form (`-1:2`). Labels are
/// trimmed and must be non-empty. An empty input yields no edges.
pub fn parse_edge_list(text: &str) -> GraphResult<Vec<Edge<String>>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_edge)
        .collect()
}

/// Parse a single `A-B` or `A:B` edge.
pub fn parse_edge(token: &str) -> GraphResult<Edge<String>> {
    let separator = if token.contains(':') { ':' } else { '-' };
    let (a, b) = token
        .split_once(separator)
        .ok_or_else(|| GraphError::InvalidEdge(token.to_string()))?;
    Ok(Edge::new(parse_vertex(a)?, parse_vertex(b)?))
}

/// Trim a vertex label, rejecting blanks.
pub fn parse_vertex(label: &str) -> GraphResult<String> {
    let label = label.trim();
    if label.is_empty() {
        return Err(GraphError::EmptyVertex);
    }
    Ok(label.to_string())
}
