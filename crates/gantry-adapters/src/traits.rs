//! Version-file adapter trait

use std::path::Path;

use gantry_core::config::{Platform, ProjectConfig};
use gantry_core::error::Result;
use gantry_versions::VersionSet;

use crate::gradle::GradleVersionFile;
use crate::xcconfig::XcconfigVersionFile;

/// A file format carrying per-flavor version assignments.
///
/// Implementations scan and patch build-configuration text without a full
/// parser; everything they do not explicitly rewrite is preserved
/// byte-for-byte.
pub trait VersionFile {
    /// Identifier of the file format
    fn format(&self) -> &'static str;

    /// Read all managed flavors that carry version data, in the order they
    /// are declared in the file
    fn read(&self, path: &Path) -> Result<VersionSet>;

    /// Surgically rewrite the version assignments of the flavors present
    /// in `set`, leaving every other line untouched. The whole replacement
    /// is computed before a single write, so an error never leaves the
    /// file partially rewritten.
    fn apply(&self, path: &Path, set: &VersionSet) -> Result<()>;
}

/// Build the adapter matching the configured platform
pub fn adapter_for(project: &ProjectConfig) -> Box<dyn VersionFile> {
    match project.platform {
        Platform::Android => Box::new(GradleVersionFile::new(project.flavors.clone())),
        Platform::Ios => {
            let flavor = project
                .flavors
                .first()
                .cloned()
                .unwrap_or_else(|| "app".to_string());
            Box::new(XcconfigVersionFile::new(flavor))
        }
    }
}
