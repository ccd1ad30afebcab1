//! Command implementations backing the `egraph` binary.

pub mod commands;
pub mod parse;

pub use commands::OutputFormat;
pub use parse::{parse_edge, parse_edge_list, DEMO_EDGES, DEMO_EDGE_LIST};
