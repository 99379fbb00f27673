//! Typed merge of base template, profile, and environment overlay.
//!
//! This replaces a duck-typed recursive deep merge with explicit per-field
//! rules over a closed set of configuration fields: profile scalars
//! override the base unconditionally, sequences concatenate base-first
//! with relative order preserved. A misordered loader chain silently
//! changes bundler output, so sequence order is a correctness requirement
//! here, not a style preference.

use serde_json::Value;

use crate::assets::asset_path;
use crate::bundle::{MergedConfiguration, ModuleSection, OutputOptions, PluginSpec, Rule};
use crate::error::{ConfigError, Result};
use crate::profile::EnvironmentProfile;
use crate::template::{ConfigTemplate, EnvironmentOverlay};

/// Merge the base template with a profile and an optional overlay.
///
/// Non-destructive: inputs are borrowed and a fresh `MergedConfiguration`
/// is allocated on every call. Merging the same profile twice yields the
/// same scalars as merging it once.
///
/// # Errors
///
/// `ConfigError::MergeConflict` when the overlay claims a plugin identity
/// the base already holds with different options. Identical duplicates
/// are deduplicated silently.
pub fn merge(
    base: &ConfigTemplate,
    profile: &EnvironmentProfile,
    overlay: Option<&EnvironmentOverlay>,
) -> Result<MergedConfiguration> {
    let entry = base
        .entries
        .iter()
        .map(|(name, entry)| (name.clone(), entry.modules.clone()))
        .collect();

    // Dev public path embeds the resolved serve endpoint; otherwise the
    // profile base is used verbatim.
    let public_path = match overlay.and_then(|o| o.serve.as_ref()) {
        Some(serve) => format!(
            "http://{}:{}{}",
            serve.address.ipv4, serve.port, profile.public_path_base
        ),
        None => profile.public_path_base.clone(),
    };

    let mut rules = base.rules.clone();
    if let Some(overlay) = overlay {
        rules.extend(overlay.rules.iter().cloned());
    }
    apply_asset_paths(&mut rules, profile)?;

    let extra = overlay.map(|o| o.plugins.as_slice()).unwrap_or(&[]);
    let mut plugins = concat_plugins(&base.plugins, extra)?;
    apply_css_filename(&mut plugins, profile);

    Ok(MergedConfiguration {
        entry,
        output: OutputOptions {
            filename: profile.filename_pattern.clone(),
            path: base.output_dir.clone(),
            public_path,
        },
        module: ModuleSection { rules },
        plugins,
        devtool: overlay.and_then(|o| o.devtool.clone()),
        dev_server: None,
    })
}

/// Concatenate plugin lists, base entries first.
///
/// A plugin identity is its name; two entries with the same identity must
/// carry identical options or the merge fails.
fn concat_plugins(base: &[PluginSpec], extra: &[PluginSpec]) -> Result<Vec<PluginSpec>> {
    let mut merged: Vec<PluginSpec> = base.to_vec();

    for plugin in extra {
        match merged.iter().find(|existing| existing.name == plugin.name) {
            Some(existing) if existing.options == plugin.options => {}
            Some(_) => {
                return Err(ConfigError::MergeConflict {
                    plugin: plugin.name.clone(),
                })
            }
            None => merged.push(plugin.clone()),
        }
    }

    Ok(merged)
}

/// Join file-loader output names onto the profile's assets subdirectory.
///
/// Base rules carry relative names; re-merging from the same base never
/// prefixes twice.
fn apply_asset_paths(rules: &mut [Rule], profile: &EnvironmentProfile) -> Result<()> {
    for rule in rules {
        for loader in &mut rule.loaders {
            if loader.loader != "file-loader" {
                continue;
            }
            let Some(options) = loader.options.as_object_mut() else {
                continue;
            };
            if let Some(Value::String(name)) = options.get("name") {
                let joined = asset_path(name, profile)?;
                options.insert("name".to_string(), Value::String(joined));
            }
        }
    }
    Ok(())
}

/// The css-extract plugin's filename follows the profile.
fn apply_css_filename(plugins: &mut [PluginSpec], profile: &EnvironmentProfile) {
    for plugin in plugins {
        if plugin.name != "css-extract" {
            continue;
        }
        if let Some(options) = plugin.options.as_object_mut() {
            options.insert(
                "filename".to_string(),
                Value::String(profile.css_filename_pattern.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::LoaderSpec;
    use crate::network::NetworkAddress;
    use crate::template::ServeEndpoint;
    use serde_json::json;
    use std::net::Ipv4Addr;

    fn overlay_with_rules(rules: Vec<Rule>) -> EnvironmentOverlay {
        EnvironmentOverlay {
            rules,
            ..EnvironmentOverlay::default()
        }
    }

    #[test]
    fn profile_scalars_override_base() {
        let base = ConfigTemplate::standard();
        let profile = EnvironmentProfile::production();
        let merged = merge(&base, &profile, None).unwrap();
        assert_eq!(merged.output.filename, "[name]-bundle-[hash].js");
        assert_eq!(merged.output.public_path, "/static/dist/");
        assert_eq!(merged.output.path, "dist");
    }

    #[test]
    fn merge_is_idempotent_on_scalars() {
        let base = ConfigTemplate::standard();
        let profile = EnvironmentProfile::production();
        let once = merge(&base, &profile, None).unwrap();
        let twice = merge(&base, &profile, None).unwrap();
        assert_eq!(once.output, twice.output);
    }

    #[test]
    fn rule_concatenation_preserves_order() {
        let mut base = ConfigTemplate::standard();
        base.rules = vec![
            Rule {
                test: "a".to_string(),
                loaders: vec![LoaderSpec::bare("loader-a")],
                exclude: None,
            },
            Rule {
                test: "b".to_string(),
                loaders: vec![LoaderSpec::bare("loader-b")],
                exclude: None,
            },
        ];
        let overlay = overlay_with_rules(vec![Rule {
            test: "c".to_string(),
            loaders: vec![LoaderSpec::bare("loader-c")],
            exclude: None,
        }]);

        let merged = merge(&base, &EnvironmentProfile::development(), Some(&overlay)).unwrap();
        let tests: Vec<&str> = merged.module.rules.iter().map(|r| r.test.as_str()).collect();
        assert_eq!(tests, vec!["a", "b", "c"]);
    }

    #[test]
    fn inputs_are_not_mutated() {
        let base = ConfigTemplate::standard();
        let snapshot = base.clone();
        let overlay = EnvironmentOverlay::production(&EnvironmentProfile::production());
        merge(&base, &EnvironmentProfile::production(), Some(&overlay)).unwrap();
        assert_eq!(base, snapshot);
    }

    #[test]
    fn duplicate_plugin_with_identical_options_is_deduplicated() {
        let base = ConfigTemplate::standard();
        let mut overlay = EnvironmentOverlay::default();
        overlay
            .plugins
            .push(PluginSpec::with_options("banner", json!({"banner": "built with packrig"})));

        let merged = merge(&base, &EnvironmentProfile::development(), Some(&overlay)).unwrap();
        let banners = merged.plugins.iter().filter(|p| p.name == "banner").count();
        assert_eq!(banners, 1);
    }

    #[test]
    fn duplicate_plugin_with_different_options_is_a_conflict() {
        let base = ConfigTemplate::standard();
        let mut overlay = EnvironmentOverlay::default();
        overlay
            .plugins
            .push(PluginSpec::with_options("banner", json!({"banner": "other"})));

        let result = merge(&base, &EnvironmentProfile::development(), Some(&overlay));
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MergeConflict { plugin } if plugin == "banner"
        ));
    }

    #[test]
    fn css_extract_filename_follows_profile() {
        let base = ConfigTemplate::standard();
        let merged = merge(&base, &EnvironmentProfile::production(), None).unwrap();
        let css = merged.plugins.iter().find(|p| p.name == "css-extract").unwrap();
        assert_eq!(css.options["filename"], json!("[name]-bundle-[hash].css"));
        // Untouched sibling option survives.
        assert_eq!(css.options["chunkFilename"], json!("[id].css"));
    }

    #[test]
    fn file_loader_names_follow_profile_subdirectory() {
        let base = ConfigTemplate::standard();
        let dev = merge(&base, &EnvironmentProfile::development(), None).unwrap();
        let prod = merge(&base, &EnvironmentProfile::production(), None).unwrap();

        let name_of = |merged: &MergedConfiguration, test: &str| {
            merged
                .module
                .rules
                .iter()
                .find(|r| r.test.contains(test))
                .unwrap()
                .loaders[0]
                .options["name"]
                .clone()
        };

        assert_eq!(
            name_of(&dev, "png"),
            json!("static/img/[name].[hash:7].[ext]")
        );
        // Empty production subdirectory leaves the name untouched.
        assert_eq!(name_of(&prod, "png"), json!("img/[name].[hash:7].[ext]"));
        assert_eq!(
            name_of(&dev, "woff"),
            json!("static/fonts/[name].[hash:7].[ext]")
        );
    }

    #[test]
    fn serve_endpoint_builds_dev_public_path() {
        let base = ConfigTemplate::standard();
        let overlay = EnvironmentOverlay {
            serve: Some(ServeEndpoint {
                address: NetworkAddress {
                    interface_name: Some("wlan0".to_string()),
                    ipv4: Ipv4Addr::new(192, 168, 1, 5),
                },
                port: 8080,
            }),
            ..EnvironmentOverlay::default()
        };

        let merged = merge(&base, &EnvironmentProfile::development(), Some(&overlay)).unwrap();
        assert_eq!(
            merged.output.public_path,
            "http://192.168.1.5:8080/static/dist/"
        );
    }
}
