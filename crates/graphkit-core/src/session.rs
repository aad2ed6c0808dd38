//! Label-addressed command surface over a [`Graph`]
//!
//! Callers describe what happened (a vertex was placed, an edge drawn, an
//! algorithm requested) as an [`Event`] and hand it to [`Session::apply`],
//! which dispatches with a single `match` and reports an [`Outcome`].
//! Vertices are addressed by label here; handles stay an engine detail.

use tracing::debug;

use crate::config::EngineConfig;
use crate::error::{GraphError, Result};
use crate::graph::{EdgeId, Graph, ShortestPath, TraversalOrder, Vertex, VertexId, Visit};

/// Something a caller asks the session to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    AddVertex {
        label: String,
        x: f64,
        y: f64,
    },
    MoveVertex {
        label: String,
        x: f64,
        y: f64,
    },
    RemoveVertex {
        label: String,
    },
    /// `id` defaults to `edge-<from>-<to>`.
    AddEdge {
        from: String,
        to: String,
        weight: f64,
        directed: bool,
        id: Option<String>,
    },
    /// Removes the whole logical edge: both records if it is undirected.
    RemoveEdge {
        from: String,
        to: String,
    },
    ClearAll,
    RunBfs {
        start: String,
    },
    RunDfs {
        start: String,
    },
    RunDijkstra {
        start: String,
        end: String,
    },
    RunPrims {
        start: String,
    },
    Show,
}

/// What applying an [`Event`] produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    VertexAdded(VertexId),
    VertexMoved(VertexId),
    VertexRemoved(Vertex),
    EdgeAdded,
    /// Number of records removed (0 when the pair did not exist).
    EdgeRemoved { removed: usize },
    Cleared,
    /// The event was a no-op (duplicate vertex or edge).
    Ignored(String),
    Traversal {
        order: TraversalOrder,
        visits: Vec<Visit>,
    },
    ShortestPath(ShortestPath),
    SpanningTree(Graph),
    /// Nothing changed; read the graph through [`Session::graph`].
    Snapshot,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    graph: Graph,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            graph: Graph::with_config(config),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Handle of the vertex labelled `label`.
    pub fn resolve(&self, label: &str) -> Result<VertexId> {
        self.graph
            .vertex_by_label(label)
            .ok_or_else(|| GraphError::vertex_not_found(label))
    }

    pub fn apply(&mut self, event: Event) -> Result<Outcome> {
        debug!(?event, "apply");
        match event {
            Event::AddVertex { label, x, y } => {
                match self.graph.add_vertex(Vertex::new(label.as_str(), x, y)) {
                    Some(id) => Ok(Outcome::VertexAdded(id)),
                    None => Ok(Outcome::Ignored(format!("vertex {} already exists", label))),
                }
            }
            Event::MoveVertex { label, x, y } => {
                let id = self.resolve(&label)?;
                if let Some(vertex) = self.graph.vertex_mut(id) {
                    vertex.set_position(x, y);
                }
                Ok(Outcome::VertexMoved(id))
            }
            Event::RemoveVertex { label } => {
                let id = self.resolve(&label)?;
                self.graph
                    .remove_vertex(id)
                    .map(Outcome::VertexRemoved)
                    .ok_or_else(|| GraphError::vertex_not_found(label))
            }
            Event::AddEdge {
                from,
                to,
                weight,
                directed,
                id,
            } => {
                let a = self.resolve(&from)?;
                let b = self.resolve(&to)?;
                let id = id.map_or_else(|| EdgeId::between(&from, &to), EdgeId::new);
                if self.graph.add_edge(a, b, weight, directed, id)? {
                    Ok(Outcome::EdgeAdded)
                } else {
                    Ok(Outcome::Ignored(format!("edge {} -> {} already exists", from, to)))
                }
            }
            Event::RemoveEdge { from, to } => {
                let a = self.resolve(&from)?;
                let b = self.resolve(&to)?;
                let record = self
                    .graph
                    .adjacency(a)
                    .and_then(|edges| edges.iter().find(|e| e.to() == b))
                    .cloned();
                let removed = record.map_or(0, |edge| self.graph.remove_logical_edge(&edge));
                Ok(Outcome::EdgeRemoved { removed })
            }
            Event::ClearAll => {
                self.graph.clear_all();
                Ok(Outcome::Cleared)
            }
            Event::RunBfs { start } => {
                let start = self.resolve(&start)?;
                Ok(Outcome::Traversal {
                    order: TraversalOrder::BreadthFirst,
                    visits: self.graph.bfs_order(start),
                })
            }
            Event::RunDfs { start } => {
                let start = self.resolve(&start)?;
                Ok(Outcome::Traversal {
                    order: TraversalOrder::DepthFirst,
                    visits: self.graph.dfs_order(start),
                })
            }
            Event::RunDijkstra { start, end } => {
                let a = self.resolve(&start)?;
                let b = self.resolve(&end)?;
                self.graph
                    .dijkstra(a, b)
                    .map(Outcome::ShortestPath)
                    .ok_or_else(|| GraphError::vertex_not_found(start))
            }
            Event::RunPrims { start } => {
                let id = self.resolve(&start)?;
                self.graph
                    .prims_mst(id)
                    .map(Outcome::SpanningTree)
                    .ok_or_else(|| GraphError::vertex_not_found(start))
            }
            Event::Show => Ok(Outcome::Snapshot),
        }
    }
}
