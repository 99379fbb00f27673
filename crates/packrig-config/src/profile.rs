//! Per-environment output settings.
//!
//! Exactly two profiles exist. They are static data, selected at
//! resolution time and never mutated: development favors unhashed
//! filenames and source maps, production favors content-hashed filenames
//! with source maps off.

use serde::{Deserialize, Serialize};

use crate::environment::BuildEnvironment;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    /// Output filename pattern for emitted bundles.
    pub filename_pattern: String,

    /// URL prefix under which emitted assets are served.
    pub public_path_base: String,

    /// Subdirectory prefix for asset output paths. Empty in production,
    /// where assets land directly in the output root.
    pub assets_subdirectory: String,

    /// Whether source maps are generated.
    pub source_map: bool,

    /// Filename pattern for extracted CSS.
    pub css_filename_pattern: String,
}

impl EnvironmentProfile {
    pub fn development() -> Self {
        Self {
            filename_pattern: "[name]-bundle.js".into(),
            public_path_base: "/static/dist/".into(),
            assets_subdirectory: "static".into(),
            source_map: true,
            css_filename_pattern: "[name].css".into(),
        }
    }

    pub fn production() -> Self {
        Self {
            filename_pattern: "[name]-bundle-[hash].js".into(),
            public_path_base: "/static/dist/".into(),
            assets_subdirectory: String::new(),
            source_map: false,
            css_filename_pattern: "[name]-bundle-[hash].css".into(),
        }
    }

    /// Select the profile for an already-validated environment.
    pub fn select(env: BuildEnvironment) -> Self {
        match env {
            BuildEnvironment::Development => Self::development(),
            BuildEnvironment::Production => Self::production(),
        }
    }

    /// Select a profile by environment name.
    ///
    /// Strict: anything other than `"development"` or `"production"` is
    /// `ConfigError::UnknownEnvironment`, never a silent default.
    pub fn select_by_name(name: &str) -> Result<Self> {
        let env: BuildEnvironment = name.parse()?;
        Ok(Self::select(env))
    }
}
