//! Gantry Core - Core library for release version management
//!
//! This crate provides the error taxonomy and configuration system shared by
//! the Gantry version-management tool.

pub mod config;
pub mod error;

pub use config::{Config, Platform, ProjectConfig};
pub use error::{AdapterError, ConfigError, GantryError, Result, VersionError};
