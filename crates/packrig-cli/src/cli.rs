//! Command-line interface definition for packrig.
//!
//! - `packrig resolve` - resolve and emit the merged bundler configuration
//! - `packrig check` - validate the configuration for an environment

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// packrig - environment-aware bundler configuration resolver
#[derive(Parser, Debug)]
#[command(
    name = "packrig",
    version,
    about = "Resolve environment-aware bundler configuration",
    long_about = "packrig selects an environment profile, discovers the dev server\n\
                  host address, merges the base configuration template with the\n\
                  environment overlay, and emits the merged configuration JSON the\n\
                  bundler consumes."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the merged bundler configuration and emit it as JSON
    Resolve(ResolveArgs),

    /// Validate the configuration for an environment without emitting it
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Project root containing packrig.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Build mode flag; exactly "production" selects production, anything
    /// else falls back to development
    #[arg(long)]
    pub mode: Option<String>,

    /// Dev server host override (takes precedence over interface discovery)
    #[arg(long)]
    pub host: Option<String>,

    /// Dev server port (1-65535, default 8080)
    #[arg(long)]
    pub port: Option<u32>,

    /// Network interface to discover the dev host address from
    #[arg(long)]
    pub interface: Option<String>,

    /// Write the merged configuration to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root containing packrig.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Environment name to check; must be exactly "development" or
    /// "production"
    #[arg(long, default_value = "development")]
    pub env: String,
}
