pub mod assets;
pub mod bundle;
pub mod dev_server;
pub mod discovery;
pub mod environment;
pub mod error;
pub mod merge;
pub mod network;
pub mod profile;
pub mod resolve;
pub mod template;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use environment::BuildEnvironment;
pub use error::{ConfigError, Result};
pub use network::NetworkAddress;
pub use profile::EnvironmentProfile;
pub use template::{ConfigTemplate, EnvironmentOverlay, ServeEndpoint};

// Re-export the resolution pipeline and validation
pub use assets::asset_path;
pub use dev_server::{DevServerBuilder, DEFAULT_PORT};
pub use discovery::ResolveOptions;
pub use merge::merge;
pub use resolve::{resolve, resolve_with};
pub use validation::{validate_schema, ConfigValidator, SchemaValidator};
