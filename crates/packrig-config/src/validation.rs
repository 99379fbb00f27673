//! Pluggable validation for resolved configurations.

use crate::bundle::MergedConfiguration;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &MergedConfiguration) -> Result<()>;
}

/// Schema-only validation of a merged configuration.
///
/// Checks the structural invariants the bundler relies on without
/// touching the filesystem.
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &MergedConfiguration) -> Result<()> {
        if config.entry.is_empty() {
            return Err(ConfigError::NoEntries);
        }

        for (name, modules) in &config.entry {
            if modules.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "entry '{name}' has no source modules"
                )));
            }
        }

        for rule in &config.module.rules {
            if rule.test.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "module rule with empty test pattern".to_string(),
                ));
            }
            if rule.loaders.is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "module rule '{}' has an empty loader chain",
                    rule.test
                )));
            }
        }

        for plugin in &config.plugins {
            if plugin.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "plugin name cannot be empty".to_string(),
                ));
            }
        }

        if let Some(dev) = &config.dev_server {
            if dev.port == 0 {
                return Err(ConfigError::InvalidPort(0));
            }
        }

        Ok(())
    }
}

/// Convenience function for schema validation
pub fn validate_schema(config: &MergedConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}
