//! Dev server parameter derivation and entry point wrapping.

use indexmap::IndexMap;

use crate::bundle::{DevServerOptions, EntryPointSet, OverlaySettings};
use crate::error::{ConfigError, Result};
use crate::network::NetworkAddress;
use crate::profile::EnvironmentProfile;

pub const DEFAULT_PORT: u16 = 8080;

/// Derives dev server connection parameters from the discovered network
/// address and the selected profile.
///
/// An explicit host override always wins over the discovered address;
/// that ordering is part of the external contract.
pub struct DevServerBuilder<'a> {
    address: &'a NetworkAddress,
    profile: &'a EnvironmentProfile,
    host_override: Option<String>,
    port: Option<u32>,
}

impl<'a> DevServerBuilder<'a> {
    pub fn new(address: &'a NetworkAddress, profile: &'a EnvironmentProfile) -> Self {
        Self {
            address,
            profile,
            host_override: None,
            port: None,
        }
    }

    pub fn host_override(mut self, host: Option<String>) -> Self {
        self.host_override = host;
        self
    }

    /// Raw port value from process configuration; validated in `build`.
    pub fn port(mut self, port: Option<u32>) -> Self {
        self.port = port;
        self
    }

    /// Produce the dev server options and the live-reload-wrapped entry
    /// point set.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPort` when a supplied port is outside 1-65535.
    pub fn build(
        self,
        entries: &EntryPointSet,
    ) -> Result<(DevServerOptions, IndexMap<String, Vec<String>>)> {
        let port = validate_port(self.port)?;
        let host = self
            .host_override
            .unwrap_or_else(|| self.address.ipv4.to_string());

        let wrapped = wrap_entries(entries, &host, port);

        let options = DevServerOptions {
            host,
            port,
            content_base: "./dist".to_string(),
            history_api_fallback: true,
            inline: true,
            hot: true,
            open: false,
            client_log_level: "warning".to_string(),
            overlay: OverlaySettings {
                warnings: false,
                errors: true,
            },
            public_path: self.profile.public_path_base.clone(),
            headers: [("Access-Control-Allow-Origin".to_string(), "*".to_string())]
                .into_iter()
                .collect(),
        };

        Ok((options, wrapped))
    }
}

fn validate_port(port: Option<u32>) -> Result<u16> {
    match port {
        None => Ok(DEFAULT_PORT),
        Some(raw) if (1..=65535).contains(&raw) => Ok(raw as u16),
        Some(raw) => Err(ConfigError::InvalidPort(raw)),
    }
}

/// Prepend the live-reload client bootstrap to every reloadable entry.
///
/// The bootstrap embeds the resolved host and port so the live-reload
/// transport can locate its server; the original module paths are
/// preserved last, in order.
pub fn wrap_entries(
    entries: &EntryPointSet,
    host: &str,
    port: u16,
) -> IndexMap<String, Vec<String>> {
    let bootstrap = format!("ws://{host}:{port}/client");

    entries
        .iter()
        .map(|(name, entry)| {
            let mut modules = Vec::with_capacity(entry.modules.len() + 1);
            if entry.reloadable {
                modules.push(bootstrap.clone());
            }
            modules.extend(entry.modules.iter().cloned());
            (name.clone(), modules)
        })
        .collect()
}
