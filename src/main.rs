//! graphkit - in-memory graph engine CLI
//!
//! Builds a graph from `--vertex`/`--edge` flags or a line-oriented script
//! and runs traversals, shortest paths and spanning trees over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use graphkit_core::error::{ExitCode as GraphExitCode, GraphError};
use graphkit_core::format::OutputFormat;
use graphkit_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Without a JSON request clap prints its own message and exits 2.
        Err(err) if !json_requested(env::args().skip(1)) => err.exit(),
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            return fail(&parse_failure(&err), OutputFormat::Json, false);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "arguments parsed");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => fail(&e, cli.format, cli.quiet),
    }
}

/// Report `error` on stderr in the requested format and turn it into the
/// process exit code. JSON envelopes are printed even when quiet.
fn fail(error: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
    ExitCode::from(error.exit_code() as u8)
}

/// Classify a clap failure: bad flags and values are usage errors.
fn parse_failure(err: &clap::Error) -> GraphError {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => GraphError::UsageError(message),
        _ => GraphError::Other(message),
    }
}

/// Whether raw arguments ask for JSON output. clap may reject the command
/// line before `Cli.format` exists, so the arguments are scanned directly.
fn json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if value.as_deref() == Some("json") {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_json_requested() {
        assert!(json_requested(args(&["--format", "json", "show"])));
        assert!(json_requested(args(&["show", "--format=json"])));
        assert!(!json_requested(args(&["--format", "human"])));
        assert!(!json_requested(args(&["--formats", "json"])));
        assert!(!json_requested(args(&["--format"])));
    }
}
