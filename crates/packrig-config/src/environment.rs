//! Build environment selection.
//!
//! Two entry points exist on purpose. `BuildEnvironment::from_str` is
//! strict and rejects anything that is not a named environment. The
//! process mode flag instead goes through [`BuildEnvironment::from_mode_flag`],
//! where only the exact string `"production"` selects production and
//! everything else falls back to development. The surrounding tooling
//! relies on that fallback, so it is preserved as-is.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildEnvironment {
    #[default]
    Development,
    Production,
}

impl BuildEnvironment {
    /// Lenient conversion for the process mode flag.
    ///
    /// Exactly `"production"` (case-sensitive) selects production; any
    /// other value, including an absent one, selects development.
    pub fn from_mode_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl FromStr for BuildEnvironment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for BuildEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
