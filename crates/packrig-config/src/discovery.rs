//! Override discovery: `packrig.toml` file plus `PACKRIG_`-prefixed
//! environment variables.
//!
//! Precedence, lowest to highest: built-in defaults, the override file,
//! the process environment. All ambient lookups happen here, once; the
//! rest of the crate takes the resulting [`ResolveOptions`] value as a
//! parameter instead of reading the environment.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::environment::BuildEnvironment;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "packrig.toml";
pub const ENV_PREFIX: &str = "PACKRIG_";

/// Process-level inputs to a configuration resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Mode flag; exactly `"production"` selects production, anything
    /// else falls back to development.
    #[serde(default)]
    pub mode: Option<String>,

    /// Explicit dev server host; takes precedence over interface
    /// discovery.
    #[serde(default)]
    pub host: Option<String>,

    /// Raw dev server port; validated against the TCP range when the dev
    /// server config is built.
    #[serde(default)]
    pub port: Option<u32>,

    /// Network interface to discover the dev host address from. Interface
    /// names are hardware-specific, so there is no built-in default; unset
    /// means the `0.0.0.0` fallback.
    #[serde(default)]
    pub interface: Option<String>,
}

impl ResolveOptions {
    /// Load options for a project root, layering `packrig.toml` under the
    /// process environment.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(root.as_ref().join(CONFIG_FILE)))
            .merge(Env::prefixed(ENV_PREFIX));

        figment
            .extract()
            .map_err(|err| ConfigError::InvalidValue(err.to_string()))
    }

    pub fn environment(&self) -> BuildEnvironment {
        BuildEnvironment::from_mode_flag(self.mode.as_deref())
    }
}
