//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for Gantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name
    pub name: Option<String>,

    /// Project configuration
    pub project: ProjectConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            project: ProjectConfig::default(),
        }
    }
}

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Target platform
    pub platform: Platform,

    /// Path to the file carrying version assignments, relative to the
    /// project root (build.gradle for Android, a .xcconfig for iOS/Mac)
    pub version_file: PathBuf,

    /// Build flavors to manage, in the order they should be reported
    pub flavors: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Android,
            version_file: PathBuf::from("app/build.gradle"),
            flavors: vec!["defaultConfig".to_string()],
        }
    }
}

/// Supported project platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android project (Gradle build files)
    Android,
    /// iOS or Mac project (xcconfig build settings)
    Ios,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.project.platform, Platform::Android);
        assert_eq!(config.project.flavors, vec!["defaultConfig"]);
    }

    #[test]
    fn test_deserialize_yaml() {
        let yaml = r#"
name: newsreader
project:
  platform: android
  version_file: app/build.gradle
  flavors:
    - defaultConfig
    - vanilla
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.name.as_deref(), Some("newsreader"));
        assert_eq!(config.project.flavors.len(), 2);
    }

    #[test]
    fn test_deserialize_toml() {
        let toml = r#"
[project]
platform = "ios"
version_file = "config/Version.xcconfig"
flavors = ["app"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.project.platform, Platform::Ios);
    }
}
