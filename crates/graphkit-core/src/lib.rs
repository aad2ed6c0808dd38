//! Graphkit Core Library
//!
//! In-memory directed/undirected graph engine with incremental mutation,
//! adjacency queries, breadth/depth-first traversal, Dijkstra shortest paths
//! and Prim's minimum spanning tree. Pure data operations: nothing here knows
//! about a display surface or an event loop.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod queue;
pub mod session;

pub use config::EngineConfig;
pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Graph, ShortestPath, Vertex, VertexId, Visit};
pub use queue::PriorityQueue;
pub use session::{Event, Outcome, Session};
