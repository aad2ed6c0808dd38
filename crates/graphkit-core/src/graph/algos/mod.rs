//! Weighted graph algorithms
//!
//! - `dijkstra`: single-pair shortest path with early stop
//! - `prim`: minimum spanning tree as a derived graph

pub mod dijkstra;
pub mod prim;

pub use dijkstra::ShortestPath;
