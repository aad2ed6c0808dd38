use std::sync::OnceLock;

use regex::Regex;

use graphkit_core::error::{GraphError, Result};
use graphkit_core::format::OutputFormat;
use graphkit_core::session::Event;

/// Weight used when an edge flag or script line omits one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

static VERTEX_RE: OnceLock<Regex> = OnceLock::new();
static EDGE_RE: OnceLock<Regex> = OnceLock::new();

/// A `--vertex` value: `LABEL` or `LABEL@X,Y`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexArg {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl VertexArg {
    pub fn into_event(self) -> Event {
        Event::AddVertex {
            label: self.label,
            x: self.x,
            y: self.y,
        }
    }
}

/// An `--edge` value: `A-B` or `A>B`, then optional `:WEIGHT` and `#ID`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeArg {
    pub from: String,
    pub to: String,
    pub weight: f64,
    pub directed: bool,
    pub id: Option<String>,
}

impl EdgeArg {
    pub fn into_event(self) -> Event {
        Event::AddEdge {
            from: self.from,
            to: self.to,
            weight: self.weight,
            directed: self.directed,
            id: self.id,
        }
    }
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a `--vertex` value
pub fn parse_vertex_arg(s: &str) -> std::result::Result<VertexArg, String> {
    vertex_arg(s).map_err(|e| e.to_string())
}

/// Parse an `--edge` value
pub fn parse_edge_arg(s: &str) -> std::result::Result<EdgeArg, String> {
    edge_arg(s).map_err(|e| e.to_string())
}

/// Parse a number, rejecting NaN and infinities.
pub fn parse_number(context: &str, s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => graphkit_core::bail_invalid!(context, s),
    }
}

fn vertex_arg(s: &str) -> Result<VertexArg> {
    let re = compiled(&VERTEX_RE, r"^([^@]+)(?:@([^,]+),(.+))?$")?;
    let Some(caps) = re.captures(s.trim()) else {
        graphkit_core::bail_invalid!("vertex", s);
    };

    let label = caps[1].trim().to_string();
    if label.is_empty() {
        graphkit_core::bail_invalid!("vertex", s);
    }
    let (x, y) = match (caps.get(2), caps.get(3)) {
        (Some(x), Some(y)) => (
            parse_number("x coordinate", x.as_str())?,
            parse_number("y coordinate", y.as_str())?,
        ),
        _ => (0.0, 0.0),
    };

    Ok(VertexArg { label, x, y })
}

fn edge_arg(s: &str) -> Result<EdgeArg> {
    let re = compiled(
        &EDGE_RE,
        r"^([^-><:#]+?)\s*([->])\s*([^:#]+?)\s*(?::\s*([^#]+?))?\s*(?:#(.+))?$",
    )?;
    let Some(caps) = re.captures(s.trim()) else {
        graphkit_core::bail_invalid!("edge", s);
    };

    let weight = match caps.get(4) {
        Some(w) => parse_number("edge weight", w.as_str())?,
        None => DEFAULT_WEIGHT,
    };

    Ok(EdgeArg {
        from: caps[1].trim().to_string(),
        to: caps[3].trim().to_string(),
        weight,
        directed: &caps[2] == ">",
        id: caps.get(5).map(|id| id.as_str().trim().to_string()),
    })
}

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> Result<&'static Regex> {
    if let Some(re) = cell.get() {
        return Ok(re);
    }
    let re = Regex::new(pattern)
        .map_err(|e| GraphError::Other(format!("invalid pattern {}: {}", pattern, e)))?;
    Ok(cell.get_or_init(|| re))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_label_only() {
        let parsed = parse_vertex_arg("A").unwrap();
        assert_eq!(parsed.label, "A");
        assert_eq!((parsed.x, parsed.y), (0.0, 0.0));
    }

    #[test]
    fn test_vertex_with_position() {
        let parsed = parse_vertex_arg("Depot@10,-2.5").unwrap();
        assert_eq!(parsed.label, "Depot");
        assert_eq!((parsed.x, parsed.y), (10.0, -2.5));
    }

    #[test]
    fn test_vertex_bad_position() {
        assert!(parse_vertex_arg("A@x,1").is_err());
        assert!(parse_vertex_arg("@1,2").is_err());
    }

    #[test]
    fn test_undirected_edge_defaults() {
        let parsed = parse_edge_arg("A-B").unwrap();
        assert_eq!(parsed.from, "A");
        assert_eq!(parsed.to, "B");
        assert_eq!(parsed.weight, DEFAULT_WEIGHT);
        assert!(!parsed.directed);
        assert_eq!(parsed.id, None);
    }

    #[test]
    fn test_directed_edge_with_weight_and_id() {
        let parsed = parse_edge_arg("A>B:2.5#road").unwrap();
        assert!(parsed.directed);
        assert_eq!(parsed.weight, 2.5);
        assert_eq!(parsed.id.as_deref(), Some("road"));
    }

    #[test]
    fn test_negative_weight_parses() {
        let parsed = parse_edge_arg("A-B:-3").unwrap();
        assert_eq!(parsed.weight, -3.0);
    }

    #[test]
    fn test_malformed_edges() {
        assert!(parse_edge_arg("AB").is_err());
        assert!(parse_edge_arg("A-B:heavy").is_err());
        assert!(parse_edge_arg("A-B:inf").is_err());
        assert!(parse_edge_arg("-B").is_err());
    }

    #[test]
    fn test_edge_splits_at_first_hyphen() {
        let parsed = parse_edge_arg("north-gate-B").unwrap();
        assert_eq!(parsed.from, "north");
        assert_eq!(parsed.to, "gate-B");
        assert!(parse_vertex_arg("north-gate").is_ok());
    }

    #[test]
    fn test_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("yaml").is_err());
    }
}
