//! Tests for environment profile selection.

use packrig_config::{BuildEnvironment, ConfigError, EnvironmentProfile};

#[test]
fn development_profile_matches_documented_table() {
    let profile = EnvironmentProfile::select(BuildEnvironment::Development);
    assert_eq!(profile.filename_pattern, "[name]-bundle.js");
    assert_eq!(profile.public_path_base, "/static/dist/");
    assert_eq!(profile.assets_subdirectory, "static");
    assert!(profile.source_map);
    assert_eq!(profile.css_filename_pattern, "[name].css");
}

#[test]
fn production_profile_matches_documented_table() {
    let profile = EnvironmentProfile::select(BuildEnvironment::Production);
    assert_eq!(profile.filename_pattern, "[name]-bundle-[hash].js");
    assert_eq!(profile.public_path_base, "/static/dist/");
    assert_eq!(profile.assets_subdirectory, "");
    assert!(!profile.source_map);
    assert_eq!(profile.css_filename_pattern, "[name]-bundle-[hash].css");
}

#[test]
fn select_by_name_accepts_both_environments() {
    assert!(EnvironmentProfile::select_by_name("development").is_ok());
    assert!(EnvironmentProfile::select_by_name("production").is_ok());
}

#[test]
fn select_by_name_never_silently_defaults() {
    for bad in ["staging", "prod", "Production", "", "dev"] {
        let result = EnvironmentProfile::select_by_name(bad);
        assert!(
            matches!(result, Err(ConfigError::UnknownEnvironment(_))),
            "expected UnknownEnvironment for {bad:?}"
        );
    }
}

#[test]
fn mode_flag_fallback_is_development() {
    // The surrounding tooling relies on non-"production" values falling
    // back to development rather than erroring.
    assert_eq!(
        BuildEnvironment::from_mode_flag(Some("staging")),
        BuildEnvironment::Development
    );
    assert_eq!(
        BuildEnvironment::from_mode_flag(Some("production")),
        BuildEnvironment::Production
    );
}
