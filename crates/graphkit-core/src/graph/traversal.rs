//! Breadth-first and depth-first traversal.
//!
//! Both traversals keep a frontier of edges rather than vertices and differ
//! only in which end of the frontier they take from: BFS pops the front,
//! DFS pops the back. The visitor is called once per newly visited vertex,
//! in discovery order.

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use tracing::trace;

use crate::config::TraversalMode;
use crate::graph::types::{Edge, Vertex, VertexId, Visit};
use crate::graph::Graph;

/// Frontier discipline for [`Graph::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier
    BreadthFirst,
    /// LIFO frontier
    DepthFirst,
}

/// An edge waiting in the frontier together with the vertex that put it
/// there.
#[derive(Clone, Copy)]
struct FrontierEdge<'g> {
    discoverer: VertexId,
    edge: &'g Edge,
}

struct Frontier<'g> {
    order: TraversalOrder,
    items: VecDeque<FrontierEdge<'g>>,
}

impl<'g> Frontier<'g> {
    fn new(order: TraversalOrder) -> Self {
        Self {
            order,
            items: VecDeque::new(),
        }
    }

    fn push(&mut self, discoverer: VertexId, edge: &'g Edge) {
        self.items.push_back(FrontierEdge { discoverer, edge });
    }

    fn pop(&mut self) -> Option<FrontierEdge<'g>> {
        match self.order {
            TraversalOrder::BreadthFirst => self.items.pop_front(),
            TraversalOrder::DepthFirst => self.items.pop_back(),
        }
    }
}

impl Graph {
    /// Breadth-first traversal from `start`.
    pub fn bfs<F>(&self, start: VertexId, visit: F)
    where
        F: FnMut(VertexId, &Vertex, Option<&Edge>),
    {
        self.traverse(start, TraversalOrder::BreadthFirst, visit);
    }

    /// Depth-first traversal from `start`.
    pub fn dfs<F>(&self, start: VertexId, visit: F)
    where
        F: FnMut(VertexId, &Vertex, Option<&Edge>),
    {
        self.traverse(start, TraversalOrder::DepthFirst, visit);
    }

    /// Collect the BFS visitation sequence.
    pub fn bfs_order(&self, start: VertexId) -> Vec<Visit> {
        self.collect_visits(start, TraversalOrder::BreadthFirst)
    }

    /// Collect the DFS visitation sequence.
    pub fn dfs_order(&self, start: VertexId) -> Vec<Visit> {
        self.collect_visits(start, TraversalOrder::DepthFirst)
    }

    fn collect_visits(&self, start: VertexId, order: TraversalOrder) -> Vec<Visit> {
        let mut visits = Vec::new();
        self.traverse(start, order, |vertex, _, via| {
            visits.push(Visit {
                vertex,
                via: via.cloned(),
            });
        });
        visits
    }

    /// Run a traversal with the configured [`TraversalMode`]. An unknown
    /// `start` visits nothing.
    pub fn traverse<F>(&self, start: VertexId, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(VertexId, &Vertex, Option<&Edge>),
    {
        if !self.contains_vertex(start) {
            return;
        }

        let started = Instant::now();
        let mode = self.config().traversal.mode;
        let visited = match mode {
            TraversalMode::Discoverer => self.traverse_from_discoverer(start, order, &mut visit),
            TraversalMode::Reference => self.traverse_from_start(start, order, &mut visit),
        };
        crate::trace_time!(started, "traverse", visited = visited);
    }

    /// Frontier entries are outgoing records of the vertex that discovered
    /// them; the far endpoint is the record's target. O(V + E).
    fn traverse_from_discoverer<F>(&self, start: VertexId, order: TraversalOrder, visit: &mut F) -> usize
    where
        F: FnMut(VertexId, &Vertex, Option<&Edge>),
    {
        let mut visited = HashSet::new();
        let mut frontier = Frontier::new(order);

        if let Some(vertex) = self.vertex(start) {
            visited.insert(start);
            visit(start, vertex, None);
        }
        for edge in self.adjacency(start).unwrap_or_default() {
            frontier.push(start, edge);
        }

        while let Some(FrontierEdge { discoverer, edge }) = frontier.pop() {
            let far = edge.other_endpoint(discoverer);
            if !visited.insert(far) {
                continue;
            }
            let Some(vertex) = self.vertex(far) else {
                continue;
            };
            trace!(vertex = %far, edge = %edge.id(), "visit");
            visit(far, vertex, Some(edge));

            for next in self.adjacency(far).unwrap_or_default() {
                if !visited.contains(&next.to()) {
                    frontier.push(far, next);
                }
            }
        }

        visited.len()
    }

    /// Far endpoints are resolved against the absolute start vertex on every
    /// step, and every step rescans the whole edge set for records incident
    /// to the newly visited vertex, in either direction. O(V * E).
    fn traverse_from_start<F>(&self, start: VertexId, order: TraversalOrder, visit: &mut F) -> usize
    where
        F: FnMut(VertexId, &Vertex, Option<&Edge>),
    {
        let mut visited = HashSet::new();
        let mut frontier = Frontier::new(order);

        for edge in self.edges().filter(|e| e.touches(start)) {
            frontier.push(start, edge);
        }

        while let Some(FrontierEdge { edge: current_edge, .. }) = frontier.pop() {
            let current = if current_edge.from() == start {
                current_edge.to()
            } else {
                current_edge.from()
            };
            if !visited.insert(current) {
                continue;
            }
            let Some(vertex) = self.vertex(current) else {
                continue;
            };
            trace!(vertex = %current, edge = %current_edge.id(), "visit");
            visit(current, vertex, Some(current_edge));

            for edge in self
                .edges()
                .filter(|e| e.touches(current) && !std::ptr::eq(*e, current_edge))
            {
                frontier.push(current, edge);
            }
        }

        visited.len()
    }
}
