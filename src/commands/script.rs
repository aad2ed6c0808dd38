//! Line-oriented graph scripts
//!
//! One event per line, whitespace separated; `#` starts a comment:
//!
//! ```text
//! vertex A 0 0
//! edge A B 2          # undirected, id edge-A-B
//! arc B C 1 b-to-c    # directed, explicit id
//! move A 10 5
//! remove-edge A B
//! remove-vertex C
//! clear
//! bfs A | dfs A | dijkstra A C | mst A | show
//! ```

use graphkit_core::error::{GraphError, Result};
use graphkit_core::session::Event;

use crate::cli::parse::{parse_number, DEFAULT_WEIGHT};

/// Parse a whole script. Any malformed line fails the script before any
/// event is applied.
pub fn parse_script(text: &str) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(line).map_err(|e| at_line(index + 1, e))? {
            events.push(event);
        }
    }
    Ok(events)
}

fn at_line(number: usize, err: GraphError) -> GraphError {
    GraphError::UsageError(format!("line {}: {}", number, err))
}

/// Parse one line; blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Event>> {
    let content = line.split('#').next().unwrap_or_default();
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let event = match (keyword, args) {
        ("vertex", [label]) => Event::AddVertex {
            label: label.to_string(),
            x: 0.0,
            y: 0.0,
        },
        ("vertex", [label, x, y]) | ("move", [label, x, y]) => {
            let x = parse_number("x coordinate", x)?;
            let y = parse_number("y coordinate", y)?;
            if keyword == "vertex" {
                Event::AddVertex {
                    label: label.to_string(),
                    x,
                    y,
                }
            } else {
                Event::MoveVertex {
                    label: label.to_string(),
                    x,
                    y,
                }
            }
        }
        ("edge" | "arc", [from, to, rest @ ..]) if rest.len() <= 2 => {
            let weight = match rest.first() {
                Some(w) => parse_number("edge weight", w)?,
                None => DEFAULT_WEIGHT,
            };
            Event::AddEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
                directed: keyword == "arc",
                id: rest.get(1).map(|id| id.to_string()),
            }
        }
        ("remove-vertex", [label]) => Event::RemoveVertex {
            label: label.to_string(),
        },
        ("remove-edge", [from, to]) => Event::RemoveEdge {
            from: from.to_string(),
            to: to.to_string(),
        },
        ("clear", []) => Event::ClearAll,
        ("bfs", [start]) => Event::RunBfs {
            start: start.to_string(),
        },
        ("dfs", [start]) => Event::RunDfs {
            start: start.to_string(),
        },
        ("dijkstra", [start, end]) => Event::RunDijkstra {
            start: start.to_string(),
            end: end.to_string(),
        },
        ("mst", [start]) => Event::RunPrims {
            start: start.to_string(),
        },
        ("show", []) => Event::Show,
        _ => graphkit_core::bail_usage!(format!("unrecognized script line: {}", content.trim())),
    };

    Ok(Some(event))
}
