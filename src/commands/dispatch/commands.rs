//! Command implementations for all graphkit subcommands

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use graphkit_core::error::Result;
use graphkit_core::session::Event;
use tracing::debug;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{render, script};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Show => execute_event(ctx, Event::Show),
            Commands::Bfs { start } => execute_event(
                ctx,
                Event::RunBfs {
                    start: start.clone(),
                },
            ),
            Commands::Dfs { start } => execute_event(
                ctx,
                Event::RunDfs {
                    start: start.clone(),
                },
            ),
            Commands::Dijkstra { start, end } => execute_event(
                ctx,
                Event::RunDijkstra {
                    start: start.clone(),
                    end: end.clone(),
                },
            ),
            Commands::Mst { start } => execute_event(
                ctx,
                Event::RunPrims {
                    start: start.clone(),
                },
            ),
            Commands::Script { file } => execute_script(ctx, file.as_deref()),
        }
    }
}

fn execute_event(ctx: &CommandContext, event: Event) -> Result<()> {
    let mut session = ctx.session()?;
    debug!(elapsed = ?ctx.start.elapsed(), "build_graph");

    let outcome = session.apply(event)?;
    debug!(elapsed = ?ctx.start.elapsed(), "execute_command");

    render::emit(ctx.cli.format, session.graph(), &outcome, ctx.cli.quiet, true)
}

fn execute_script(ctx: &CommandContext, file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let events = script::parse_script(&text)?;
    debug!(events = events.len(), elapsed = ?ctx.start.elapsed(), "parse_script");

    let mut session = ctx.session()?;
    for event in events {
        let outcome = session.apply(event)?;
        render::emit(ctx.cli.format, session.graph(), &outcome, ctx.cli.quiet, false)?;
    }
    debug!(elapsed = ?ctx.start.elapsed(), "execute_script");
    Ok(())
}
