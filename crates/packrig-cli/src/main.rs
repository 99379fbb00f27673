//! packrig CLI - environment-aware bundler configuration resolution.
//!
//! Entry point: parses arguments, initializes logging, dispatches the
//! selected command.

use clap::Parser;
use packrig_cli::{cli, commands, logger};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    }
}
