//! Bundler-facing configuration schema.
//!
//! Field names and nesting here are a fixed external contract: the
//! bundler expects `entry` / `output` / `module.rules` / `plugins` /
//! `devServer` exactly as serialized below, camelCase included. Loader
//! order inside a rule is significant (loaders apply right-to-left), so
//! every type in this module preserves sequence order bit-exactly.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping from logical bundle name to its source modules.
///
/// Insertion order defines build order; keys are unique.
pub type EntryPointSet = IndexMap<String, EntryPoint>;

/// A logical entry point before dev-server wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPoint {
    /// One or more source module paths.
    pub modules: Vec<String>,

    /// Entries marked non-reloadable never receive the live-reload
    /// bootstrap prefix.
    #[serde(default = "default_true")]
    pub reloadable: bool,
}

impl EntryPoint {
    pub fn single(module: impl Into<String>) -> Self {
        Self {
            modules: vec![module.into()],
            reloadable: true,
        }
    }

    pub fn non_reloadable(module: impl Into<String>) -> Self {
        Self {
            modules: vec![module.into()],
            reloadable: false,
        }
    }
}

/// One content transformation in a loader chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSpec {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderSpec {
    pub fn bare(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// A module rule: files matching `test` run through the loader chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Source file match pattern (a regex, in the bundler's syntax).
    pub test: String,

    /// Ordered loader chain; order must survive merging unchanged.
    #[serde(rename = "use")]
    pub loaders: Vec<LoaderSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

/// A plugin invocation. `name` is the plugin identity used for conflict
/// detection during merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginSpec {
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub filename: String,
    pub path: String,
    pub public_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSection {
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    pub warnings: bool,
    pub errors: bool,
}

/// Dev server connection parameters, in the shape the bundler's dev
/// server expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerOptions {
    pub host: String,
    pub port: u16,
    pub content_base: String,
    pub history_api_fallback: bool,
    pub inline: bool,
    pub hot: bool,
    pub open: bool,
    pub client_log_level: String,
    pub overlay: OverlaySettings,
    pub public_path: String,
    pub headers: IndexMap<String, String>,
}

/// The final output artifact, produced fresh on every resolution call and
/// consumed exactly once by the bundler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedConfiguration {
    pub entry: IndexMap<String, Vec<String>>,
    pub output: OutputOptions,
    pub module: ModuleSection,
    pub plugins: Vec<PluginSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rule_serializes_loader_chain_under_use() {
        let rule = Rule {
            test: r"\.css$".to_string(),
            loaders: vec![
                LoaderSpec::bare("style-loader"),
                LoaderSpec::with_options("css-loader", json!({"modules": true})),
            ],
            exclude: None,
        };

        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["use"][0]["loader"], json!("style-loader"));
        assert_eq!(value["use"][1]["options"]["modules"], json!(true));
        assert!(value.get("exclude").is_none());
    }

    #[test]
    fn merged_configuration_uses_bundler_field_names() {
        let config = MergedConfiguration {
            entry: [("main".to_string(), vec!["./src/main.js".to_string()])]
                .into_iter()
                .collect(),
            output: OutputOptions {
                filename: "[name]-bundle.js".to_string(),
                path: "dist".to_string(),
                public_path: "/static/dist/".to_string(),
            },
            module: ModuleSection { rules: vec![] },
            plugins: vec![PluginSpec::bare("banner")],
            devtool: Some("eval-source-map".to_string()),
            dev_server: None,
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["output"]["publicPath"], json!("/static/dist/"));
        assert_eq!(value["entry"]["main"][0], json!("./src/main.js"));
        assert!(value.get("devServer").is_none());
    }

    #[test]
    fn dev_server_options_serialize_camel_case() {
        let options = DevServerOptions {
            host: "0.0.0.0".to_string(),
            port: 8080,
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
            public_path: "/static/dist/".to_string(),
            headers: IndexMap::new(),
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["historyApiFallback"], json!(true));
        assert_eq!(value["clientLogLevel"], json!("warning"));
        assert_eq!(value["publicPath"], json!("/static/dist/"));
    }
}
