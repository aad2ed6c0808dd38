//! Outcome rendering for human and JSON output
//!
//! Human output:
//! - traversals print one visited vertex per line (`B via edge-A-B`)
//! - shortest paths print `path:`, `distance:` and `edges:` lines
//! - graphs (show, mst) list vertices then logical edges
//!
//! Mutations print nothing; ignored mutations warn on stderr.

use graphkit_core::error::Result;
use graphkit_core::format::{format_weight, OutputFormat};
use graphkit_core::graph::TraversalOrder;
use graphkit_core::session::Outcome;
use graphkit_core::{Edge, Graph, ShortestPath, VertexId, Visit};
use serde_json::{json, Value};

/// Print an outcome. `pretty` selects indented JSON; scripts emit one
/// compact JSON document per line instead.
pub fn emit(
    format: OutputFormat,
    graph: &Graph,
    outcome: &Outcome,
    quiet: bool,
    pretty: bool,
) -> Result<()> {
    if let Outcome::Ignored(message) = outcome {
        report_ignored(message, quiet);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            if let Some(text) = human(graph, outcome) {
                println!("{}", text);
            }
        }
        OutputFormat::Json => {
            if let Some(value) = json(graph, outcome) {
                print_json(&value, pretty)?;
            }
        }
    }
    Ok(())
}

/// Print a graph listing.
pub fn emit_graph(format: OutputFormat, graph: &Graph, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Human => println!("{}", graph_human(graph)),
        OutputFormat::Json => print_json(&graph_json(graph), pretty)?,
    }
    Ok(())
}

pub fn report_ignored(message: &str, quiet: bool) {
    tracing::debug!(message, "ignored");
    if !quiet {
        eprintln!("warning: {}", message);
    }
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    if pretty {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", serde_json::to_string(value)?);
    }
    Ok(())
}

/// Human text for an outcome, `None` for silent mutations.
pub fn human(graph: &Graph, outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Traversal { visits, .. } => Some(traversal_human(graph, visits)),
        Outcome::ShortestPath(result) => Some(shortest_path_human(graph, result)),
        Outcome::SpanningTree(tree) => Some(format!(
            "{}\ntotal weight: {}",
            graph_human(tree),
            format_weight(tree.total_weight())
        )),
        Outcome::Snapshot => Some(graph_human(graph)),
        _ => None,
    }
}

/// JSON document for an outcome, `None` for silent mutations.
pub fn json(graph: &Graph, outcome: &Outcome) -> Option<Value> {
    match outcome {
        Outcome::Traversal { order, visits } => Some(traversal_json(graph, *order, visits)),
        Outcome::ShortestPath(result) => Some(shortest_path_json(graph, result)),
        Outcome::SpanningTree(tree) => {
            let mut value = graph_json(tree);
            value["total_weight"] = json!(tree.total_weight());
            Some(value)
        }
        Outcome::Snapshot => Some(graph_json(graph)),
        _ => None,
    }
}

fn label(graph: &Graph, id: VertexId) -> String {
    graph
        .label(id)
        .map_or_else(|| id.to_string(), str::to_string)
}

fn traversal_human(graph: &Graph, visits: &[Visit]) -> String {
    if visits.is_empty() {
        return "(no vertices visited)".to_string();
    }
    visits
        .iter()
        .map(|visit| match &visit.via {
            Some(edge) => format!("{} via {}", label(graph, visit.vertex), edge.id()),
            None => label(graph, visit.vertex),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn traversal_json(graph: &Graph, order: TraversalOrder, visits: &[Visit]) -> Value {
    let order = match order {
        TraversalOrder::BreadthFirst => "bfs",
        TraversalOrder::DepthFirst => "dfs",
    };
    let visits: Vec<Value> = visits
        .iter()
        .map(|visit| {
            json!({
                "vertex": label(graph, visit.vertex),
                "via": visit.via.as_ref().map(|edge| edge.id().to_string()),
            })
        })
        .collect();
    json!({ "order": order, "visits": visits })
}

fn shortest_path_human(graph: &Graph, result: &ShortestPath) -> String {
    if !result.is_reachable() {
        return format!(
            "no path from {} to {}\ndistance: {}",
            label(graph, result.start),
            label(graph, result.end),
            format_weight(result.total())
        );
    }

    let path: Vec<String> = result.path.iter().map(|&id| label(graph, id)).collect();
    let mut lines = vec![
        format!("path: {}", path.join(" -> ")),
        format!("distance: {}", format_weight(result.total())),
    ];
    if !result.edges.is_empty() {
        let edges: Vec<String> = result.edges.iter().map(|e| e.id().to_string()).collect();
        lines.push(format!("edges: {}", edges.join(", ")));
    }
    lines.join("\n")
}

fn shortest_path_json(graph: &Graph, result: &ShortestPath) -> Value {
    let reachable = result.is_reachable();
    let distances: serde_json::Map<String, Value> = graph
        .vertices()
        .map(|(id, vertex)| {
            let distance = result.distance_to(id);
            let value = if distance.is_finite() {
                json!(distance)
            } else {
                Value::Null
            };
            (vertex.label().to_string(), value)
        })
        .collect();

    let (distance, path) = if reachable {
        let path: Vec<String> = result.path.iter().map(|&id| label(graph, id)).collect();
        (json!(result.total()), path)
    } else {
        (Value::Null, Vec::new())
    };
    let edges: Vec<Value> = result.edges.iter().map(|e| edge_json(graph, e)).collect();

    json!({
        "start": label(graph, result.start),
        "end": label(graph, result.end),
        "reachable": reachable,
        "distance": distance,
        "path": path,
        "edges": edges,
        "distances": distances,
    })
}

fn edge_human(graph: &Graph, edge: &Edge) -> String {
    let arrow = if edge.is_directed() { "->" } else { "-" };
    format!(
        "{} {} {} ({}) {}",
        label(graph, edge.from()),
        arrow,
        label(graph, edge.to()),
        format_weight(edge.weight()),
        edge.id()
    )
}

fn edge_json(graph: &Graph, edge: &Edge) -> Value {
    json!({
        "id": edge.id().to_string(),
        "from": label(graph, edge.from()),
        "to": label(graph, edge.to()),
        "weight": edge.weight(),
        "directed": edge.is_directed(),
    })
}

fn graph_human(graph: &Graph) -> String {
    let edges = graph.logical_edges();
    let mut lines = vec![format!("vertices: {}", graph.vertex_count())];
    for (_, vertex) in graph.vertices() {
        lines.push(format!(
            "  {} ({}, {})",
            vertex.label(),
            format_weight(vertex.x()),
            format_weight(vertex.y())
        ));
    }
    lines.push(format!("edges: {}", edges.len()));
    for edge in edges {
        lines.push(format!("  {}", edge_human(graph, edge)));
    }
    lines.join("\n")
}

fn graph_json(graph: &Graph) -> Value {
    let vertices: Vec<Value> = graph
        .vertices()
        .map(|(_, vertex)| json!({ "label": vertex.label(), "x": vertex.x(), "y": vertex.y() }))
        .collect();
    let edges: Vec<Value> = graph
        .logical_edges()
        .into_iter()
        .map(|edge| edge_json(graph, edge))
        .collect();
    json!({ "vertices": vertices, "edges": edges })
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphkit_core::session::{Event, Session};

    fn square() -> Session {
        let mut session = Session::default();
        for label in ["A", "B", "C", "D"] {
            session
                .apply(Event::AddVertex {
                    label: label.into(),
                    x: 0.0,
                    y: 0.0,
                })
                .unwrap();
        }
        for (from, to, weight) in [("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 1.0), ("D", "A", 4.0)] {
            session
                .apply(Event::AddEdge {
                    from: from.into(),
                    to: to.into(),
                    weight,
                    directed: false,
                    id: None,
                })
                .unwrap();
        }
        session
    }

    #[test]
    fn test_shortest_path_human() {
        let mut session = square();
        let outcome = session
            .apply(Event::RunDijkstra {
                start: "A".into(),
                end: "C".into(),
            })
            .unwrap();
        let text = human(session.graph(), &outcome).unwrap();
        assert_eq!(
            text,
            "path: A -> B -> C\ndistance: 3\nedges: edge-A-B, edge-B-C"
        );
    }

    #[test]
    fn test_shortest_path_json_nulls_infinite_distances() {
        let mut session = square();
        session
            .apply(Event::AddVertex {
                label: "Z".into(),
                x: 0.0,
                y: 0.0,
            })
            .unwrap();
        let outcome = session
            .apply(Event::RunDijkstra {
                start: "A".into(),
                end: "Z".into(),
            })
            .unwrap();
        let value = json(session.graph(), &outcome).unwrap();
        assert_eq!(value["reachable"], false);
        assert!(value["distance"].is_null());
        assert!(value["distances"]["Z"].is_null());
        assert_eq!(value["distances"]["A"], 0.0);
        assert_eq!(value["path"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_traversal_human_lists_edges() {
        let mut session = square();
        let outcome = session.apply(Event::RunBfs { start: "A".into() }).unwrap();
        let text = human(session.graph(), &outcome).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "A");
        assert_eq!(lines[1], "B via edge-A-B");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_spanning_tree_json_total() {
        let mut session = square();
        let outcome = session.apply(Event::RunPrims { start: "A".into() }).unwrap();
        let value = json(session.graph(), &outcome).unwrap();
        assert_eq!(value["total_weight"], 4.0);
        assert_eq!(value["edges"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_graph_human_lists_logical_edges() {
        let session = square();
        let text = graph_human(session.graph());
        assert!(text.starts_with("vertices: 4\n  A (0, 0)"));
        assert!(text.contains("edges: 4\n  A - B (1) edge-A-B"));
    }

    #[test]
    fn test_mutations_are_silent() {
        let session = square();
        assert!(human(session.graph(), &Outcome::Cleared).is_none());
        assert!(json(session.graph(), &Outcome::EdgeAdded).is_none());
    }
}
