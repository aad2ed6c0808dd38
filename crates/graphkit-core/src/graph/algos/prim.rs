use crate::config::SpanningTreeGuard;
use crate::graph::types::{Edge, VertexId};
use crate::graph::Graph;
use crate::queue::PriorityQueue;
use std::collections::HashSet;
use std::time::Instant;
use tracing::{trace, warn};

impl Graph {
    /// Prim's minimum spanning tree of the component reachable from `start`.
    ///
    /// Returns a new graph holding the tree's vertices (under the same
    /// handles they have here) and one undirected edge per tree edge, with
    /// the source record's weight and id. The start vertex is always part of
    /// the result, so an isolated start yields a one-vertex graph rather
    /// than an empty one. `None` if `start` is unknown. The
    /// skip rule for dequeued edges comes from
    /// [`SpanningTreeGuard`](crate::config::SpanningTreeGuard).
    #[tracing::instrument(skip(self), fields(vertices = self.vertex_count()))]
    pub fn prims_mst(&self, start: VertexId) -> Option<Graph> {
        let start_vertex = self.vertex(start)?;
        if self.has_directed_edges() {
            warn!("graph has directed edges; spanning tree treats them as undirected links");
        }

        let started = Instant::now();
        let guard = self.config().spanning_tree.guard;
        let mut tree = Graph::with_config(self.config().clone());
        tree.adopt_vertex(start, start_vertex);

        let mut visited: HashSet<VertexId> = HashSet::from([start]);
        let mut queue: PriorityQueue<&Edge> = PriorityQueue::new();
        for edge in self.adjacency(start).unwrap_or_default() {
            queue.enqueue(edge, edge.weight());
        }

        while let Some(edge) = queue.dequeue() {
            let (a, b) = (edge.from(), edge.to());
            let both_visited = visited.contains(&a) && visited.contains(&b);
            let skip = match guard {
                SpanningTreeGuard::Strict => both_visited,
                SpanningTreeGuard::Reference => both_visited && tree.does_edge_exist(a, b),
            };
            if skip {
                continue;
            }

            trace!(edge = %edge.id(), weight = edge.weight(), "tree edge");
            visited.insert(a);
            visited.insert(b);
            for endpoint in [a, b] {
                if let Some(vertex) = self.vertex(endpoint) {
                    tree.adopt_vertex(endpoint, vertex);
                }
            }
            if !tree.does_edge_exist(a, b) {
                tree.insert_edge(a, b, edge.weight(), false, edge.id().clone());
            }

            for endpoint in [a, b] {
                for next in self.adjacency(endpoint).unwrap_or_default() {
                    if !visited.contains(&next.to()) {
                        queue.enqueue(next, next.weight());
                    }
                }
            }
        }

        crate::trace_time!(started, "prims_mst", tree_vertices = tree.vertex_count());
        Some(tree)
    }
}
