//! Command trait and context for dispatching commands

use std::time::Instant;

use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use graphkit_core::session::Session;

use crate::cli::Cli;
use crate::commands::{build, render};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: EngineConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// A session holding the graph described by `--vertex`/`--edge`.
    pub fn session(&self) -> Result<Session> {
        build::session_from_args(&self.cli.graph, self.config.clone(), self.cli.quiet)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: show the graph if one was described, otherwise a banner
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if !ctx.cli.graph.is_empty() {
            let session = ctx.session()?;
            return render::emit_graph(ctx.cli.format, session.graph(), true);
        }

        println!("graphkit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Build in-memory graphs and run BFS, DFS, Dijkstra and Prim's over them.");
        println!();
        println!("Run `graphkit --help` for usage information.");
        Ok(())
    }
}
