//! End-to-end configuration resolution.
//!
//! The pipeline runs once per build invocation: select the environment,
//! pick its profile, discover the dev host address (development only),
//! fold the overlay onto the base template, and attach the dev server
//! block. No state survives between passes.

use crate::bundle::MergedConfiguration;
use crate::dev_server::DevServerBuilder;
use crate::discovery::ResolveOptions;
use crate::environment::BuildEnvironment;
use crate::error::Result;
use crate::merge::merge;
use crate::network;
use crate::profile::EnvironmentProfile;
use crate::template::{ConfigTemplate, EnvironmentOverlay};

/// Resolve the standard template with the given options.
pub fn resolve(options: &ResolveOptions) -> Result<MergedConfiguration> {
    resolve_with(options, &ConfigTemplate::standard())
}

/// Resolve an explicit base template with the given options.
pub fn resolve_with(
    options: &ResolveOptions,
    base: &ConfigTemplate,
) -> Result<MergedConfiguration> {
    let env = options.environment();
    let profile = EnvironmentProfile::select(env);
    tracing::debug!(environment = %env, "resolving bundler configuration");

    match env {
        BuildEnvironment::Production => {
            let overlay = EnvironmentOverlay::production(&profile);
            merge(base, &profile, Some(&overlay))
        }
        BuildEnvironment::Development => {
            let address = network::resolve(options.interface.as_deref());
            tracing::debug!(ipv4 = %address.ipv4, "dev server address resolved");

            let (dev_server, wrapped) = DevServerBuilder::new(&address, &profile)
                .host_override(options.host.clone())
                .port(options.port)
                .build(&base.entries)?;

            let overlay = EnvironmentOverlay::development(address, dev_server.port);
            let mut merged = merge(base, &profile, Some(&overlay))?;
            merged.entry = wrapped;
            merged.dev_server = Some(dev_server);
            Ok(merged)
        }
    }
}
