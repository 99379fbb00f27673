//! Environment-invariant base template and per-environment overlays.
//!
//! The base template holds everything that does not change between
//! development and production: entry points, the loader rule chains, and
//! the always-on plugin list. Overlays add the environment-specific
//! plugins and devtool on top during merge.

use serde_json::{json, Value};

use crate::bundle::{EntryPoint, EntryPointSet, LoaderSpec, PluginSpec, Rule};
use crate::network::NetworkAddress;
use crate::profile::EnvironmentProfile;

/// Base configuration shared by every environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTemplate {
    pub entries: EntryPointSet,
    pub output_dir: String,
    pub rules: Vec<Rule>,
    pub plugins: Vec<PluginSpec>,
}

impl ConfigTemplate {
    /// The canonical base template: JS, CSS, LESS, image and font rule
    /// chains in that order, plus banner / bundle-tracker / css-extract
    /// plugins.
    pub fn standard() -> Self {
        Self {
            entries: [
                ("main".to_string(), EntryPoint::single("./src/js/main.js")),
                (
                    "profile".to_string(),
                    EntryPoint::single("./src/js/profile.js"),
                ),
            ]
            .into_iter()
            .collect(),
            output_dir: "dist".to_string(),
            rules: standard_rules(),
            plugins: standard_plugins(),
        }
    }
}

fn standard_rules() -> Vec<Rule> {
    vec![
        Rule {
            test: r"(\.jsx|\.js)$".to_string(),
            loaders: vec![LoaderSpec::bare("babel-loader")],
            exclude: Some("node_modules".to_string()),
        },
        Rule {
            test: r"\.css$".to_string(),
            loaders: vec![
                LoaderSpec::bare("css-extract-loader"),
                LoaderSpec::with_options(
                    "css-loader",
                    json!({
                        "modules": true,
                        "localIdentName": "[name]_[local]_[hash:base64:6]",
                    }),
                ),
            ],
            exclude: None,
        },
        Rule {
            test: r"\.less$".to_string(),
            loaders: vec![
                LoaderSpec::bare("css-extract-loader"),
                LoaderSpec::bare("css-loader"),
                LoaderSpec::with_options(
                    "less-loader",
                    json!({
                        "sourceMap": true,
                        "precision": 8,
                    }),
                ),
            ],
            exclude: None,
        },
        // file-loader names are relative; merge joins them onto the
        // profile's assets subdirectory.
        Rule {
            test: r"\.(png|svg|jpg|gif)$".to_string(),
            loaders: vec![LoaderSpec::with_options(
                "file-loader",
                json!({"name": "img/[name].[hash:7].[ext]"}),
            )],
            exclude: None,
        },
        Rule {
            test: r"\.(woff|woff2|eot|ttf|otf)$".to_string(),
            loaders: vec![LoaderSpec::with_options(
                "file-loader",
                json!({"name": "fonts/[name].[hash:7].[ext]"}),
            )],
            exclude: None,
        },
    ]
}

fn standard_plugins() -> Vec<PluginSpec> {
    vec![
        PluginSpec::with_options("banner", json!({"banner": "built with packrig"})),
        // The stats record maps logical entry names to emitted asset
        // filenames; the server-side templating layer reads it.
        PluginSpec::with_options("bundle-tracker", json!({"filename": "./webpack-stats.json"})),
        PluginSpec::with_options(
            "css-extract",
            json!({
                "filename": "[name].css",
                "chunkFilename": "[id].css",
            }),
        ),
    ]
}

/// Where the dev server is reachable; feeds the dev public path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeEndpoint {
    pub address: NetworkAddress,
    pub port: u16,
}

/// Environment-specific additions folded onto the base during merge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvironmentOverlay {
    pub rules: Vec<Rule>,
    pub plugins: Vec<PluginSpec>,
    pub devtool: Option<String>,

    /// Present only in development: the resolved dev server endpoint.
    pub serve: Option<ServeEndpoint>,
}

impl EnvironmentOverlay {
    /// Development overlay: hot-reload plumbing plus eval source maps.
    pub fn development(address: NetworkAddress, port: u16) -> Self {
        Self {
            rules: Vec::new(),
            plugins: vec![
                define_env_plugin("development"),
                PluginSpec::bare("named-modules"),
                PluginSpec::bare("hot-module-replacement"),
                PluginSpec::bare("no-emit-on-errors"),
            ],
            devtool: Some("eval-source-map".to_string()),
            serve: Some(ServeEndpoint { address, port }),
        }
    }

    /// Production overlay: minification and CSS optimization keyed off
    /// the profile's source map setting.
    pub fn production(profile: &EnvironmentProfile) -> Self {
        let css_processor_options: Value = if profile.source_map {
            json!({"safe": true, "map": {"inline": false}})
        } else {
            json!({"safe": true})
        };

        Self {
            rules: Vec::new(),
            plugins: vec![
                define_env_plugin("production"),
                PluginSpec::with_options(
                    "uglify",
                    json!({
                        "sourceMap": profile.source_map,
                        "parallel": true,
                    }),
                ),
                PluginSpec::with_options(
                    "optimize-css",
                    json!({"cssProcessorOptions": css_processor_options}),
                ),
                PluginSpec::bare("hashed-module-ids"),
            ],
            devtool: None,
            serve: None,
        }
    }
}

fn define_env_plugin(env: &str) -> PluginSpec {
    PluginSpec::with_options("define-env", json!({"process.env.NODE_ENV": env}))
}
