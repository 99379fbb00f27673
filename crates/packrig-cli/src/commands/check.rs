//! `packrig check` - validate configuration without emitting it.

use anyhow::Context;
use console::style;

use packrig_config::{resolve, validate_schema, BuildEnvironment, ResolveOptions};

use crate::cli::CheckArgs;

pub fn check_execute(args: CheckArgs) -> anyhow::Result<()> {
    // Strict here: `check` names an environment explicitly, so unknown
    // names are an error rather than the mode-flag fallback.
    let environment: BuildEnvironment = args.env.parse()?;

    let mut options = ResolveOptions::load(&args.root)
        .with_context(|| format!("failed to load overrides from {}", args.root.display()))?;
    options.mode = Some(environment.as_str().to_string());

    let merged = resolve(&options).context("configuration resolution failed")?;
    validate_schema(&merged).context("resolved configuration failed validation")?;

    println!(
        "{} {} configuration ok ({} entries, {} rules, {} plugins)",
        style("✓").green(),
        environment,
        merged.entry.len(),
        merged.module.rules.len(),
        merged.plugins.len()
    );

    Ok(())
}
