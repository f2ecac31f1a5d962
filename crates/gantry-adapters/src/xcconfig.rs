//! Xcconfig version adapter
//!
//! The iOS/Mac mirror of the Gradle adapter, working against
//! `KEY = value` build-settings files: `VERSION_LONG` carries the version
//! name and `BUILD_NUMBER` the build code. An xcconfig has no flavor
//! blocks, so the single entry is keyed by the configured flavor name.

use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use gantry_core::error::{AdapterError, Result};
use gantry_versions::{Version, VersionSet};

use crate::traits::VersionFile;

/// Version-name key in the xcconfig
pub const VERSION_LONG_KEY: &str = "VERSION_LONG";

/// Build-code key in the xcconfig
pub const BUILD_NUMBER_KEY: &str = "BUILD_NUMBER";

/// Version adapter for `.xcconfig` build-settings files
pub struct XcconfigVersionFile {
    /// Name the single version entry is keyed by
    flavor: String,
}

impl XcconfigVersionFile {
    /// Create an adapter keying its entry by `flavor`
    pub fn new(flavor: impl Into<String>) -> Self {
        Self {
            flavor: flavor.into(),
        }
    }
}

impl VersionFile for XcconfigVersionFile {
    fn format(&self) -> &'static str {
        "xcconfig"
    }

    fn read(&self, path: &Path) -> Result<VersionSet> {
        let content = read_file(path)?;

        let mut name = None;
        let mut code = None;
        let name_re = key_regex(VERSION_LONG_KEY);
        let code_re = key_regex(BUILD_NUMBER_KEY);

        for line in content.lines() {
            if let Some(caps) = name_re.captures(line) {
                name = Some(caps[2].trim().to_string());
            } else if let Some(caps) = code_re.captures(line) {
                code = Some(caps[2].trim().to_string());
            }
        }

        let mut set = VersionSet::new();
        if let Some(name) = name {
            let version = Version::parse(&name, code.as_deref())?;
            set.insert(self.flavor.clone(), version);
        }
        debug!(path = %path.display(), flavors = set.len(), "read xcconfig versions");
        Ok(set)
    }

    fn apply(&self, path: &Path, set: &VersionSet) -> Result<()> {
        let Some(version) = set.get(&self.flavor) else {
            warn!(
                path = %path.display(),
                flavor = %self.flavor,
                "set does not contain the managed entry, nothing to apply"
            );
            return Ok(());
        };

        let content = read_file(path)?;
        let name_re = key_regex(VERSION_LONG_KEY);
        let code_re = key_regex(BUILD_NUMBER_KEY);

        let mut out = String::with_capacity(content.len());
        for segment in content.split_inclusive('\n') {
            let (body, ending) = split_line_ending(segment);

            if let Some(caps) = name_re.captures(body) {
                out.push_str(&format!("{}{}", &caps[1], version.name));
            } else if let Some(caps) = code_re.captures(body) {
                match version.code {
                    Some(code) => out.push_str(&format!("{}{}", &caps[1], code)),
                    None => out.push_str(body),
                }
            } else {
                out.push_str(body);
            }
            out.push_str(ending);
        }

        std::fs::write(path, out)?;
        debug!(path = %path.display(), "applied xcconfig versions");
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AdapterError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Regex for a `KEY = value` assignment line, capturing everything up to
/// the value as the prefix so spacing is preserved on rewrite
fn key_regex(key: &str) -> Regex {
    Regex::new(&format!(r"^(\s*{}\s*=\s*)(.*)$", key)).unwrap()
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(body) = segment.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = segment.strip_suffix('\n') {
        (body, "\n")
    } else {
        (segment, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE_XCCONFIG: &str = r#"// Version numbers, patched by the release toolchain
VERSION_SHORT = 16.8
VERSION_LONG = 16.8-rc-1
BUILD_NUMBER = 1003
OTHER_SETTING = untouched
"#;

    fn write_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Version.xcconfig");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read() {
        let (_dir, path) = write_fixture(SAMPLE_XCCONFIG);
        let adapter = XcconfigVersionFile::new("app");

        let set = adapter.read(&path).unwrap();
        let version = set.get("app").unwrap();
        assert_eq!(version.name.to_string(), "16.8-rc-1");
        assert_eq!(version.code, Some(1003));
    }

    #[test]
    fn test_read_without_version_keys() {
        let (_dir, path) = write_fixture("OTHER_SETTING = 1\n");
        let adapter = XcconfigVersionFile::new("app");

        let set = adapter.read(&path).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_apply_patches_only_managed_keys() {
        let (_dir, path) = write_fixture(SAMPLE_XCCONFIG);
        let adapter = XcconfigVersionFile::new("app");

        let mut set = VersionSet::new();
        set.insert("app", Version::parse("16.8-rc-3", Some("1010")).unwrap());
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("VERSION_LONG = 16.8-rc-3"));
        assert!(updated.contains("BUILD_NUMBER = 1010"));
        // untouched lines survive byte-for-byte
        assert!(updated.contains("// Version numbers, patched by the release toolchain"));
        assert!(updated.contains("VERSION_SHORT = 16.8"));
        assert!(updated.contains("OTHER_SETTING = untouched"));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (_dir, path) = write_fixture(SAMPLE_XCCONFIG);
        let adapter = XcconfigVersionFile::new("app");

        let mut set = VersionSet::new();
        set.insert("app", Version::parse("16.9", Some("1020")).unwrap());

        adapter.apply(&path, &set).unwrap();
        let once = std::fs::read_to_string(&path).unwrap();
        adapter.apply(&path, &set).unwrap();
        let twice = std::fs::read_to_string(&path).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_with_foreign_set_is_noop() {
        let (_dir, path) = write_fixture(SAMPLE_XCCONFIG);
        let adapter = XcconfigVersionFile::new("app");

        let mut set = VersionSet::new();
        set.insert("vanilla", Version::parse("16.9", Some("1")).unwrap());
        adapter.apply(&path, &set).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), SAMPLE_XCCONFIG);
    }
}
