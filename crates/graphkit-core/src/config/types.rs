//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Engine configuration
///
/// Every section is optional in the TOML file; missing fields fall back to
/// the hardened defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BFS/DFS behavior
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Prim's MST behavior
    #[serde(default)]
    pub spanning_tree: SpanningTreeConfig,

    /// Edge weight validation
    #[serde(default)]
    pub weights: WeightConfig,
}

/// How BFS/DFS decide which endpoint of a frontier edge is being visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Each frontier edge remembers the vertex that discovered it; the far
    /// endpoint is the edge's target. Follows outgoing records only.
    #[default]
    Discoverer,
    /// The far endpoint is computed against the traversal's start vertex on
    /// every step, and each step rescans the full edge set for incident
    /// records in either direction.
    Reference,
}

/// Skip rule applied to a dequeued edge in Prim's algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanningTreeGuard {
    /// Skip when both endpoints are already in the tree.
    #[default]
    Strict,
    /// Skip only when both endpoints are in the tree and the tree already
    /// stores that exact ordered pair. Can admit cycles.
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default)]
    pub mode: TraversalMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanningTreeConfig {
    #[serde(default)]
    pub guard: SpanningTreeGuard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Accept negative weights at edge creation. Dijkstra and Prim's give
    /// no guarantees on graphs that use them.
    #[serde(default)]
    pub allow_negative: bool,
}
