//! Graph construction flags shared by every subcommand

use clap::Args;

use crate::cli::parse::{parse_edge_arg, parse_vertex_arg, EdgeArg, VertexArg};

/// Vertices and edges to build before the subcommand runs.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Add a vertex: LABEL or LABEL@X,Y (repeatable)
    #[arg(long = "vertex", global = true, value_parser = parse_vertex_arg)]
    pub vertices: Vec<VertexArg>,

    /// Add an edge: A-B (undirected) or A>B (directed), with optional
    /// :WEIGHT and #ID suffixes, e.g. A-B:2.5#road (repeatable). The
    /// endpoints split at the first '-' or '>' and labels cannot contain
    /// ':' or '#'; connect such vertices from a script instead
    #[arg(long = "edge", global = true, value_parser = parse_edge_arg)]
    pub edges: Vec<EdgeArg>,
}

impl GraphArgs {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.edges.is_empty()
    }
}
