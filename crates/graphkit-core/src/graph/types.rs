use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a vertex inside one [`Graph`](crate::graph::Graph).
///
/// Handles are allocated by the graph on insertion and never reused by that
/// graph, so a stale handle cannot alias a later vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A labelled node with a 2D position.
///
/// The position is presentational metadata; no algorithm reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    label: String,
    x: f64,
    y: f64,
}

impl Vertex {
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// Identifier shared by the records that make up one logical edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Conventional id for an edge created between two labels: `edge-<a>-<b>`.
    pub fn between(from_label: &str, to_label: &str) -> Self {
        Self(format!("edge-{}-{}", from_label, to_label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One directional edge record, stored in the adjacency list of `from`.
///
/// An undirected logical edge is two reciprocal records sharing `id`; a
/// self-loop is a single record with `from == to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    from: VertexId,
    to: VertexId,
    weight: f64,
    directed: bool,
    id: EdgeId,
}

impl Edge {
    pub(crate) fn new(from: VertexId, to: VertexId, weight: f64, directed: bool, id: EdgeId) -> Self {
        Self {
            from,
            to,
            weight,
            directed,
            id,
        }
    }

    pub fn from(&self) -> VertexId {
        self.from
    }

    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// True if `vertex` is either endpoint.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.from == vertex || self.to == vertex
    }

    /// The endpoint opposite `vertex`: `to` when `vertex` is `from`,
    /// otherwise `from`.
    pub fn other_endpoint(&self, vertex: VertexId) -> VertexId {
        if self.from == vertex {
            self.to
        } else {
            self.from
        }
    }
}

/// One step of a traversal: the vertex reached and the record it was
/// reached through (`None` for the start vertex).
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub vertex: VertexId,
    pub via: Option<Edge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_position_is_mutable() {
        let mut v = Vertex::new("A", 1.0, 2.0);
        v.set_x(10.0);
        assert_eq!((v.x(), v.y()), (10.0, 2.0));
        v.set_y(-3.5);
        assert_eq!((v.x(), v.y()), (10.0, -3.5));
        v.set_position(0.0, 0.0);
        assert_eq!((v.x(), v.y()), (0.0, 0.0));
        assert_eq!(v.label(), "A");
    }

    #[test]
    fn test_edge_id_between() {
        assert_eq!(EdgeId::between("1", "2").as_str(), "edge-1-2");
    }

    #[test]
    fn test_other_endpoint() {
        let a = VertexId(0);
        let b = VertexId(1);
        let edge = Edge::new(a, b, 2.0, false, EdgeId::from("e"));
        assert_eq!(edge.other_endpoint(a), b);
        assert_eq!(edge.other_endpoint(b), a);
        assert!(edge.touches(a) && edge.touches(b));
        assert!(!edge.touches(VertexId(7)));
        assert!(!edge.is_self_loop());

        let lp = Edge::new(a, a, 1.0, true, EdgeId::from("loop"));
        assert!(lp.is_self_loop());
        assert_eq!(lp.other_endpoint(a), a);
    }
}
