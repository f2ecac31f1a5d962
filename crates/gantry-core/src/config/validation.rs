//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::{Config, Platform};

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_project(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_project(config: &Config) -> Result<()> {
    let project = &config.project;

    if project.version_file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "project.version_file".to_string(),
            message: "version file path cannot be empty".to_string(),
        }
        .into());
    }

    if project.flavors.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "project.flavors".to_string(),
            message: "at least one flavor is required".to_string(),
        }
        .into());
    }

    for (i, flavor) in project.flavors.iter().enumerate() {
        if flavor.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "project.flavors".to_string(),
                message: "flavor names cannot be empty".to_string(),
            }
            .into());
        }
        if project.flavors[..i].contains(flavor) {
            return Err(ConfigError::InvalidValue {
                field: "project.flavors".to_string(),
                message: format!("duplicate flavor: {}", flavor),
            }
            .into());
        }
    }

    // xcconfig files carry a single version entry, not flavor blocks
    if project.platform == Platform::Ios && project.flavors.len() > 1 {
        return Err(ConfigError::InvalidValue {
            field: "project.flavors".to_string(),
            message: "ios projects track a single version entry".to_string(),
        }
        .into());
    }

    Ok(())
}
