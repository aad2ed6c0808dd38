//! Build a session from the `--vertex`/`--edge` flags

use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use graphkit_core::session::{Event, Outcome, Session};
use tracing::debug;

use crate::cli::GraphArgs;
use crate::commands::render::report_ignored;

/// Apply the declared vertices, then the edges. Edge endpoints that were
/// not declared are created at the origin.
pub fn session_from_args(args: &GraphArgs, config: EngineConfig, quiet: bool) -> Result<Session> {
    let mut session = Session::new(config);

    for arg in &args.vertices {
        apply_reporting(&mut session, arg.clone().into_event(), quiet)?;
    }

    for arg in &args.edges {
        for endpoint in [&arg.from, &arg.to] {
            ensure_vertex(&mut session, endpoint)?;
        }
        apply_reporting(&mut session, arg.clone().into_event(), quiet)?;
    }

    debug!(
        vertices = session.graph().vertex_count(),
        records = session.graph().edge_count(),
        "graph built from flags"
    );
    Ok(session)
}

fn ensure_vertex(session: &mut Session, label: &str) -> Result<()> {
    if session.resolve(label).is_err() {
        debug!(label, "creating undeclared edge endpoint");
        session.apply(Event::AddVertex {
            label: label.to_string(),
            x: 0.0,
            y: 0.0,
        })?;
    }
    Ok(())
}

fn apply_reporting(session: &mut Session, event: Event, quiet: bool) -> Result<()> {
    if let Outcome::Ignored(message) = session.apply(event)? {
        report_ignored(&message, quiet);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::{parse_edge_arg, parse_vertex_arg};

    fn args(vertices: &[&str], edges: &[&str]) -> GraphArgs {
        GraphArgs {
            vertices: vertices
                .iter()
                .map(|v| parse_vertex_arg(v).unwrap())
                .collect(),
            edges: edges.iter().map(|e| parse_edge_arg(e).unwrap()).collect(),
        }
    }

    #[test]
    fn test_undeclared_endpoints_are_created() {
        let session =
            session_from_args(&args(&["A@1,2"], &["A-B:3", "B>C"]), EngineConfig::default(), true)
                .unwrap();
        let graph = session.graph();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);

        let a = session.resolve("A").unwrap();
        assert_eq!(graph.vertex(a).unwrap().x(), 1.0);
    }

    #[test]
    fn test_vertex_order_follows_flags() {
        let session =
            session_from_args(&args(&["C", "A"], &["B-A"]), EngineConfig::default(), true).unwrap();
        let labels: Vec<_> = session
            .graph()
            .vertices()
            .map(|(_, v)| v.label().to_string())
            .collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let err = session_from_args(&args(&[], &["A-B:-1"]), EngineConfig::default(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            graphkit_core::GraphError::NegativeWeight { .. }
        ));
    }
}
