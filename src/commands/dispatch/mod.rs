//! Command dispatch logic for graphkit

use std::path::Path;
use std::time::Instant;

use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// An explicit path must exist; otherwise the user config is optional.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::discover(),
    }
}
