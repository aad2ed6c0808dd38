//! Subcommands

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the graph's vertices and edges
    Show,

    /// Breadth-first traversal from a vertex
    Bfs {
        /// Start vertex label
        start: String,
    },

    /// Depth-first traversal from a vertex
    Dfs {
        /// Start vertex label
        start: String,
    },

    /// Shortest path between two vertices (Dijkstra)
    Dijkstra {
        /// Start vertex label
        start: String,

        /// End vertex label
        end: String,
    },

    /// Minimum spanning tree of the component containing a vertex (Prim's)
    Mst {
        /// Start vertex label
        start: String,
    },

    /// Apply a script of graph events, one per line
    Script {
        /// Script file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}
