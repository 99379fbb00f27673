//! Asset output path resolution.

use crate::error::{ConfigError, Result};
use crate::profile::EnvironmentProfile;

/// Join `relative` onto the profile's assets subdirectory.
///
/// Bundler output paths are always POSIX-style forward-slash paths,
/// regardless of host OS. An empty subdirectory yields the relative path
/// unchanged, with no leading slash introduced.
///
/// # Errors
///
/// `ConfigError::InvalidPath` when `relative` is empty or absolute;
/// absolute asset paths would escape the output subtree.
pub fn asset_path(relative: &str, profile: &EnvironmentProfile) -> Result<String> {
    if relative.is_empty() {
        return Err(ConfigError::InvalidPath {
            message: "asset path cannot be empty".to_string(),
            hint: None,
        });
    }

    if relative.starts_with('/') {
        return Err(ConfigError::InvalidPath {
            message: format!("asset path must be relative: {relative}"),
            hint: Some("Remove the leading slash".to_string()),
        });
    }

    let subdirectory = profile.assets_subdirectory.trim_end_matches('/');
    if subdirectory.is_empty() {
        return Ok(relative.to_string());
    }

    Ok(format!("{subdirectory}/{relative}"))
}
