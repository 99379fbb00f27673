//! `packrig resolve` - resolve and emit the merged configuration.

use std::fs;

use anyhow::Context;
use owo_colors::OwoColorize;
use tracing::{debug, info};

use packrig_config::{resolve, validate_schema, ResolveOptions};

use crate::cli::ResolveArgs;

pub fn resolve_execute(args: ResolveArgs) -> anyhow::Result<()> {
    let mut options = ResolveOptions::load(&args.root)
        .with_context(|| format!("failed to load overrides from {}", args.root.display()))?;

    // Command-line flags beat both the override file and the environment.
    if args.mode.is_some() {
        options.mode = args.mode;
    }
    if args.host.is_some() {
        options.host = args.host;
    }
    if args.port.is_some() {
        options.port = args.port;
    }
    if args.interface.is_some() {
        options.interface = args.interface;
    }

    let environment = options.environment();
    debug!(%environment, "resolving configuration");

    let merged = resolve(&options).context("configuration resolution failed")?;
    validate_schema(&merged).context("resolved configuration failed validation")?;

    let json = serde_json::to_string_pretty(&merged)?;

    match args.output {
        Some(path) => {
            fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "merged configuration written");
            eprintln!(
                "{} resolved {} configuration ({} entries, {} plugins)",
                "✓".green(),
                environment.as_str().bold(),
                merged.entry.len(),
                merged.plugins.len()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
