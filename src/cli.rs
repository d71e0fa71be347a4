//! Shared argument handling for the ingest binaries.
//!
//! Exit contract (kept uniform across every tool):
//! - wrong or missing arguments print a `Usage:` line on stdout and exit 1
//! - `--help` / `--version` print to stdout and exit 0
//!
//! Clap's default is to report argument errors on stderr with exit code 2.
//! These tools are invoked programmatically by a host process that matches on
//! stdout and a status of 1 for usage failures, so we normalize here instead
//! of scattering the mapping across binaries.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Parse arguments for `T`, applying the usage exit contract on failure.
pub fn parse_or_usage<T: Parser>() -> T {
    match T::try_parse() {
        Ok(params) => params,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Let clap handle help/version output and the success exit.
            err.exit()
        }
        Err(_) => exit_usage::<T>(),
    }
}

/// Print the usage line for `T` on stdout and exit with status 1.
///
/// Also used by binaries that reject otherwise well-formed arguments
/// (for example an empty string where content is required).
pub fn exit_usage<T: CommandFactory>() -> ! {
    let mut cmd = T::command();
    println!("{}", cmd.render_usage());
    std::process::exit(1);
}

/// Treat an empty or whitespace-only argument as a usage error.
pub fn require_non_empty<T: CommandFactory>(value: &str) -> &str {
    if value.trim().is_empty() {
        exit_usage::<T>();
    }
    value
}
