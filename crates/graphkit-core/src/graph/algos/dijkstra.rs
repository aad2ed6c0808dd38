use crate::graph::types::{Edge, VertexId};
use crate::graph::Graph;
use crate::queue::PriorityQueue;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{trace, warn};

/// Result of a single-pair shortest path query.
///
/// Distances are final for every vertex dequeued before `end`; the search
/// stops as soon as `end` is dequeued, so the rest may still be tentative.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub start: VertexId,
    pub end: VertexId,
    pub distances: HashMap<VertexId, f64>,
    /// Vertices from `start` to `end`. Just `[end]` when `end` is unreachable.
    pub path: Vec<VertexId>,
    /// Records along `path`; `edges[i]` leads from `path[i]` to `path[i + 1]`.
    pub edges: Vec<Edge>,
}

impl ShortestPath {
    pub fn distance_to(&self, vertex: VertexId) -> f64 {
        self.distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Distance from `start` to `end`.
    pub fn total(&self) -> f64 {
        self.distance_to(self.end)
    }

    /// Check this before trusting `path` and `edges`.
    pub fn is_reachable(&self) -> bool {
        self.total().is_finite()
    }
}

/// Predecessor bookkeeping: the vertex and the record that last relaxed a
/// vertex's distance.
struct Predecessor<'g> {
    vertex: VertexId,
    edge: &'g Edge,
}

impl Graph {
    /// Dijkstra's shortest path from `start` to `end` over outgoing records.
    ///
    /// Returns `None` if either vertex is not in the graph. Every vertex is
    /// queued up front at its initial distance (0 for `start`, infinity
    /// otherwise); improved distances are queued again and the stale entries
    /// are reprocessed without effect.
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn dijkstra(&self, start: VertexId, end: VertexId) -> Option<ShortestPath> {
        if !self.contains_vertex(start) || !self.contains_vertex(end) {
            return None;
        }
        if self.has_negative_weights() {
            warn!("graph has negative edge weights; shortest paths may be wrong");
        }

        let started = Instant::now();
        let mut distances: HashMap<VertexId, f64> = HashMap::with_capacity(self.vertex_count());
        let mut previous: HashMap<VertexId, Predecessor<'_>> = HashMap::new();
        let mut queue = PriorityQueue::with_capacity(self.vertex_count());
        // Non-negative weights need at most one successful relaxation per
        // record; anything past V * E means a negative cycle.
        let relax_budget = self.vertex_count().saturating_mul(self.edge_count().max(1));
        let mut relaxations = 0usize;

        for (id, _) in self.vertices() {
            let distance = if id == start { 0.0 } else { f64::INFINITY };
            distances.insert(id, distance);
            queue.enqueue(id, distance);
        }

        'search: while let Some(current) = queue.dequeue() {
            if current == end {
                break;
            }
            let current_distance = distances.get(&current).copied().unwrap_or(f64::INFINITY);

            for edge in self.adjacency(current).unwrap_or_default() {
                let neighbor = edge.to();
                let candidate = current_distance + edge.weight();
                let known = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);

                if candidate < known {
                    relaxations += 1;
                    if relaxations > relax_budget {
                        warn!(relaxations, "relaxation budget exhausted, stopping search");
                        break 'search;
                    }
                    trace!(vertex = %neighbor, distance = candidate, "relax");
                    distances.insert(neighbor, candidate);
                    previous.insert(
                        neighbor,
                        Predecessor {
                            vertex: current,
                            edge,
                        },
                    );
                    queue.enqueue(neighbor, candidate);
                }
            }
        }

        let (path, edges) = reconstruct_path(&previous, end, self.vertex_count());
        crate::trace_time!(started, "dijkstra", hops = edges.len());

        Some(ShortestPath {
            start,
            end,
            distances,
            path,
            edges,
        })
    }
}

/// Walk the predecessor chain from `end` back towards the start.
///
/// The walk is capped at `limit` steps so a predecessor cycle (possible only
/// with negative weights) cannot loop forever.
fn reconstruct_path(
    previous: &HashMap<VertexId, Predecessor<'_>>,
    end: VertexId,
    limit: usize,
) -> (Vec<VertexId>, Vec<Edge>) {
    let mut path = vec![end];
    let mut edges = Vec::new();
    let mut current = end;

    while let Some(step) = previous.get(&current) {
        if edges.len() >= limit {
            break;
        }
        edges.push(step.edge.clone());
        path.push(step.vertex);
        current = step.vertex;
    }

    path.reverse();
    edges.reverse();
    (path, edges)
}
