use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::types::{Edge, EdgeId, Vertex, VertexId};

/// A vertex together with its outgoing edge records.
#[derive(Debug, Clone)]
struct VertexEntry {
    vertex: Vertex,
    edges: Vec<Edge>,
}

/// In-memory graph: per-vertex adjacency lists of outgoing edge records.
///
/// Invariants:
/// - every vertex has an entry, possibly with no edges;
/// - every record stored under vertex `v` has `from == v`;
/// - at most one record per ordered endpoint pair;
/// - vertex labels are unique.
///
/// Handles are allocated from a monotonically increasing counter and the
/// entries are keyed by handle, so iteration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    entries: BTreeMap<VertexId, VertexEntry>,
    next_id: u64,
    config: EngineConfig,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace the engine configuration. Existing edges are not revalidated.
    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    // Mutation

    /// Insert a vertex. Returns `None` without touching the graph if a
    /// vertex with the same label is already present.
    pub fn add_vertex(&mut self, vertex: Vertex) -> Option<VertexId> {
        if self.vertex_by_label(vertex.label()).is_some() {
            debug!(label = vertex.label(), "duplicate vertex label ignored");
            return None;
        }

        let id = VertexId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            VertexEntry {
                vertex,
                edges: Vec::new(),
            },
        );
        Some(id)
    }

    /// Insert a vertex under a handle allocated by another graph. Used by
    /// algorithms that derive a new graph whose vertices must correlate with
    /// the source graph's.
    pub(crate) fn adopt_vertex(&mut self, id: VertexId, vertex: &Vertex) {
        if self.entries.contains_key(&id) || self.vertex_by_label(vertex.label()).is_some() {
            return;
        }
        self.next_id = self.next_id.max(id.0 + 1);
        self.entries.insert(
            id,
            VertexEntry {
                vertex: vertex.clone(),
                edges: Vec::new(),
            },
        );
    }

    /// Remove a vertex and every edge record that references it, in any
    /// adjacency list.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<Vertex> {
        let entry = self.entries.remove(&id)?;
        for other in self.entries.values_mut() {
            other.edges.retain(|edge| !edge.touches(id));
        }
        Some(entry.vertex)
    }

    /// Add an edge from `a` to `b`.
    ///
    /// Returns `Ok(false)` if a record `a -> b` already exists. A self-loop
    /// is stored as one record; an undirected edge between distinct vertices
    /// is stored as two reciprocal records sharing `id`.
    pub fn add_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
        directed: bool,
        id: impl Into<EdgeId>,
    ) -> Result<bool> {
        let id = id.into();
        if !self.contains_vertex(a) {
            return Err(GraphError::vertex_not_found(a));
        }
        if !self.contains_vertex(b) {
            return Err(GraphError::vertex_not_found(b));
        }
        self.validate_weight(&id, weight)?;

        if self.does_edge_exist(a, b) {
            debug!(edge = %id, from = %a, to = %b, "duplicate edge ignored");
            return Ok(false);
        }

        self.insert_edge(a, b, weight, directed, id);
        Ok(true)
    }

    /// Add an edge with the conventional id derived from the endpoint labels.
    pub fn connect(&mut self, a: VertexId, b: VertexId, weight: f64, directed: bool) -> Result<bool> {
        let id = match (self.label(a), self.label(b)) {
            (Some(from), Some(to)) => EdgeId::between(from, to),
            (None, _) => return Err(GraphError::vertex_not_found(a)),
            (_, None) => return Err(GraphError::vertex_not_found(b)),
        };
        self.add_edge(a, b, weight, directed, id)
    }

    fn validate_weight(&self, id: &EdgeId, weight: f64) -> Result<()> {
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight {
                edge: id.to_string(),
                weight,
            });
        }
        if weight < 0.0 && !self.config.weights.allow_negative {
            return Err(GraphError::NegativeWeight {
                edge: id.to_string(),
                weight,
            });
        }
        Ok(())
    }

    /// Store the record(s) for an edge. Endpoints must exist and `a -> b`
    /// must not. An undirected edge gets no reciprocal record when `b -> a`
    /// is already stored, so each ordered pair keeps a single record.
    pub(crate) fn insert_edge(
        &mut self,
        a: VertexId,
        b: VertexId,
        weight: f64,
        directed: bool,
        id: EdgeId,
    ) {
        if a != b && !directed && !self.does_edge_exist(b, a) {
            if let Some(entry) = self.entries.get_mut(&b) {
                entry.edges.push(Edge::new(b, a, weight, false, id.clone()));
            }
        }
        if let Some(entry) = self.entries.get_mut(&a) {
            entry.edges.push(Edge::new(a, b, weight, directed, id));
        }
    }

    /// Remove the first record `a -> b`. Returns whether a record was
    /// removed; a missing pair is a no-op.
    ///
    /// Only the one direction is removed: an undirected logical edge needs a
    /// second call for `b -> a` (or use [`remove_logical_edge`](Self::remove_logical_edge)).
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        self.remove_record(a, b, None)
    }

    /// Remove the record `a -> b`, restricted to `id` when given.
    fn remove_record(&mut self, a: VertexId, b: VertexId, id: Option<&EdgeId>) -> bool {
        let Some(entry) = self.entries.get_mut(&a) else {
            return false;
        };
        match entry.edges.iter().position(|edge| {
            edge.from() == a && edge.to() == b && id.map_or(true, |id| edge.id() == id)
        }) {
            Some(index) => {
                entry.edges.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the logical edge a record belongs to: the record's own
    /// direction, plus the reciprocal record when it is undirected.
    /// Records are matched on endpoints and id, so an unrelated record for
    /// the reverse pair survives. Returns the number of records removed.
    pub fn remove_logical_edge(&mut self, edge: &Edge) -> usize {
        let (a, b, id) = (edge.from(), edge.to(), Some(edge.id()));
        let mut removed = usize::from(self.remove_record(a, b, id));
        if !edge.is_directed() && !edge.is_self_loop() {
            removed += usize::from(self.remove_record(b, a, id));
        }
        removed
    }

    pub fn does_edge_exist(&self, a: VertexId, b: VertexId) -> bool {
        self.entries
            .get(&a)
            .is_some_and(|entry| entry.edges.iter().any(|e| e.from() == a && e.to() == b))
    }

    /// Reset to an empty graph. Handles issued before the reset stay invalid.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    // Queries

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.entries.iter().map(|(&id, entry)| (id, &entry.vertex))
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.entries.keys().copied().collect()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.entries.get(&id).map(|entry| &entry.vertex)
    }

    /// Mutable access for position updates; the label has no setter.
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.entries.get_mut(&id).map(|entry| &mut entry.vertex)
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::label)
    }

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Linear scan for the vertex carrying `label`.
    pub fn vertex_by_label(&self, label: &str) -> Option<VertexId> {
        self.entries
            .iter()
            .find(|(_, entry)| entry.vertex.label() == label)
            .map(|(&id, _)| id)
    }

    /// Outgoing records of one vertex, in insertion order.
    pub fn adjacency(&self, id: VertexId) -> Option<&[Edge]> {
        self.entries.get(&id).map(|entry| entry.edges.as_slice())
    }

    /// Every edge record: vertices in insertion order, each vertex's records
    /// in insertion order. Undirected logical edges yield both records.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.entries.values().flat_map(|entry| entry.edges.iter())
    }

    /// All records connecting `a` and `b` in either direction.
    pub fn edge(&self, a: VertexId, b: VertexId) -> Option<Vec<&Edge>> {
        let found: Vec<&Edge> = self
            .edges()
            .filter(|e| (e.from() == a && e.to() == b) || (e.from() == b && e.to() == a))
            .collect();
        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of directional records (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.entries.values().map(|entry| entry.edges.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_directed_edges(&self) -> bool {
        self.edges().any(Edge::is_directed)
    }

    pub fn has_negative_weights(&self) -> bool {
        self.edges().any(|e| e.weight() < 0.0)
    }

    /// One record per logical edge, first-seen order. Reciprocal records of
    /// an undirected edge collapse onto the first one stored.
    pub fn logical_edges(&self) -> Vec<&Edge> {
        let mut seen: HashSet<(&EdgeId, VertexId, VertexId)> = HashSet::new();
        self.edges()
            .filter(|e| {
                let key = if e.is_directed() || e.from() <= e.to() {
                    (e.id(), e.from(), e.to())
                } else {
                    (e.id(), e.to(), e.from())
                };
                e.is_directed() || seen.insert(key)
            })
            .collect()
    }

    /// Sum of weights over logical edges.
    pub fn total_weight(&self) -> f64 {
        self.logical_edges().iter().map(|e| e.weight()).sum()
    }
}
