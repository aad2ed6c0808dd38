//! Graph storage and algorithms
//!
//! - `adjacency`: the [`Graph`] type, mutation and queries
//! - `traversal`: BFS/DFS over an edge frontier
//! - `algos`: Dijkstra shortest paths and Prim's spanning tree
//! - `types`: vertices, edge records and handles

mod adjacency;
pub mod algos;
pub mod traversal;
pub mod types;

pub use adjacency::Graph;
pub use algos::ShortestPath;
pub use traversal::TraversalOrder;
pub use types::{Edge, EdgeId, Vertex, VertexId, Visit};
