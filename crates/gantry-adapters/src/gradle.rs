//! Gradle build-file version adapter
//!
//! Locates `versionName` / `versionCode` assignments inside flavor blocks
//! of a `build.gradle` (Groovy or Kotlin DSL) by line-oriented scanning:
//! the current flavor scope is tracked through brace depth, so no real
//! Groovy parser is needed. This is inherently fragile to exotic
//! formatting (assignments split across lines, braces inside strings); it
//! handles the layouts Android projects actually use.

use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use gantry_core::error::{AdapterError, Result};
use gantry_versions::{Version, VersionSet};

use crate::traits::VersionFile;

/// Flavor-aware version adapter for `build.gradle` files
pub struct GradleVersionFile {
    /// Flavor blocks to manage (e.g. `defaultConfig`, `vanilla`)
    flavors: Vec<String>,
}

/// One flavor block encountered during a scan, with the raw value tokens
/// of any version assignments it contains
struct FlavorScan {
    flavor: String,
    name: Option<String>,
    code: Option<String>,
}

impl GradleVersionFile {
    /// Create an adapter managing the given flavors
    pub fn new(flavors: Vec<String>) -> Self {
        Self { flavors }
    }

    /// Read a single flavor's version info.
    ///
    /// Returns `Ok(None)` when the flavor is absent or carries no version
    /// name; that is not an error.
    pub fn read_flavor(&self, path: &Path, flavor: &str) -> Result<Option<Version>> {
        let content = read_file(path)?;
        let requested = [flavor.to_string()];
        let set = scan_versions(&content, &requested)?;
        Ok(set.get(flavor).copied())
    }
}

impl VersionFile for GradleVersionFile {
    fn format(&self) -> &'static str {
        "gradle"
    }

    fn read(&self, path: &Path) -> Result<VersionSet> {
        let content = read_file(path)?;
        let set = scan_versions(&content, &self.flavors)?;
        debug!(path = %path.display(), flavors = set.len(), "read gradle versions");
        Ok(set)
    }

    fn apply(&self, path: &Path, set: &VersionSet) -> Result<()> {
        let content = read_file(path)?;
        let patched = patch_versions(&content, set);

        for flavor in set.flavor_names() {
            if !patched.touched.iter().any(|f| f.as_str() == flavor) {
                warn!(
                    path = %path.display(),
                    flavor,
                    "flavor has no version assignments in file, left unchanged"
                );
            }
        }

        std::fs::write(path, patched.content)?;
        debug!(path = %path.display(), "applied gradle versions");
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AdapterError::FileNotFound(path.to_path_buf()).into());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Regex for a line opening a named block, e.g. `vanilla {`
fn block_header_regex() -> Regex {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*\{").unwrap()
}

/// Regex capturing the value of a `versionName` assignment (Groovy
/// `versionName "x"` or Kotlin `versionName = "x"`)
fn version_name_regex() -> Regex {
    Regex::new(r#"^(\s*versionName\s*=?\s*)(["'])([^"']*)["'](.*)$"#).unwrap()
}

/// Regex capturing the value of a `versionCode` assignment
fn version_code_regex() -> Regex {
    Regex::new(r"^(\s*versionCode\s*=?\s*)(\d+)(.*)$").unwrap()
}

/// Signed brace balance of a line (string/comment contents not excluded;
/// part of the documented line-scanning limitation)
fn brace_balance(line: &str) -> i32 {
    line.chars().fold(0, |acc, c| match c {
        '{' => acc + 1,
        '}' => acc - 1,
        _ => acc,
    })
}

/// Scan flavor blocks for version assignments.
///
/// Only the requested flavors are inspected, and only those that carry a
/// `versionName` end up in the returned set, keyed in declaration order.
fn scan_versions(content: &str, flavors: &[String]) -> Result<VersionSet> {
    let header_re = block_header_regex();
    let name_re = version_name_regex();
    let code_re = version_code_regex();

    let mut found: Vec<FlavorScan> = Vec::new();
    // (index into `found`, brace depth just before the block opened)
    let mut current: Option<(usize, i32)> = None;
    let mut depth: i32 = 0;

    for line in content.lines() {
        match current {
            Some((idx, _)) => {
                if let Some(caps) = name_re.captures(line) {
                    found[idx].name = Some(caps[3].to_string());
                } else if let Some(caps) = code_re.captures(line) {
                    found[idx].code = Some(caps[2].to_string());
                }
            }
            None => {
                if let Some(caps) = header_re.captures(line) {
                    let ident = &caps[1];
                    if flavors.iter().any(|f| f.as_str() == ident) {
                        found.push(FlavorScan {
                            flavor: ident.to_string(),
                            name: None,
                            code: None,
                        });
                        current = Some((found.len() - 1, depth));
                    }
                }
            }
        }

        depth += brace_balance(line);
        if let Some((_, entry_depth)) = current {
            if depth <= entry_depth {
                current = None;
            }
        }
    }

    let mut set = VersionSet::new();
    for scan in found {
        if let Some(name) = scan.name {
            let version = Version::parse(&name, scan.code.as_deref())?;
            set.insert(scan.flavor, version);
        }
    }
    Ok(set)
}

/// Result of computing a patched file body
struct Patched {
    content: String,
    /// Flavors whose assignments were actually rewritten
    touched: Vec<String>,
}

/// Rewrite version assignments for the flavors in `set`, replacing only the
/// value tokens and keeping indentation, quoting, trailing text, and line
/// endings of every line intact
fn patch_versions(content: &str, set: &VersionSet) -> Patched {
    let header_re = block_header_regex();
    let name_re = version_name_regex();
    let code_re = version_code_regex();

    let flavors: Vec<&str> = set.flavor_names().collect();
    let mut out = String::with_capacity(content.len());
    let mut touched: Vec<String> = Vec::new();
    // (flavor name, brace depth just before the block opened)
    let mut current: Option<(String, i32)> = None;
    let mut depth: i32 = 0;

    for segment in content.split_inclusive('\n') {
        let (body, ending) = split_line_ending(segment);
        let mut patched_body = None;

        match &current {
            Some((flavor, _)) => {
                let version = set.get(flavor);
                if let (Some(version), Some(caps)) = (version, name_re.captures(body)) {
                    patched_body = Some(format!(
                        "{}{}{}{}{}",
                        &caps[1],
                        &caps[2],
                        version.name,
                        &caps[2],
                        &caps[4]
                    ));
                    record_touched(&mut touched, flavor);
                } else if let (Some(version), Some(caps)) = (version, code_re.captures(body)) {
                    if let Some(code) = version.code {
                        patched_body = Some(format!("{}{}{}", &caps[1], code, &caps[3]));
                        record_touched(&mut touched, flavor);
                    }
                }
            }
            None => {
                if let Some(caps) = header_re.captures(body) {
                    let ident = &caps[1];
                    if flavors.contains(&ident) {
                        current = Some((ident.to_string(), depth));
                    }
                }
            }
        }

        out.push_str(patched_body.as_deref().unwrap_or(body));
        out.push_str(ending);

        depth += brace_balance(body);
        if let Some((_, entry_depth)) = &current {
            if depth <= *entry_depth {
                current = None;
            }
        }
    }

    Patched {
        content: out,
        touched,
    }
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

fn record_touched(touched: &mut Vec<String>, flavor: &str) {
    if !touched.iter().any(|f| f.as_str() == flavor) {
        touched.push(flavor.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_versions::VersionName;
    use tempfile::tempdir;

    const TWO_FLAVOR_GRADLE: &str = r#"// Auto-generated by the release toolchain, do not edit by hand
android {
    compileSdkVersion 29

    defaultConfig {
        applicationId "com.example.newsreader"
        versionName "alpha-278"
        versionCode 1004
        minSdkVersion 21
    }

    productFlavors {
        vanilla {
            dimension "buildType"
            versionName "16.8-rc-1"
            versionCode 1003
        }

        wasabi {
            dimension "buildType"
        }
    }
}
"#;

    fn flavors(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn write_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("build.gradle");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_two_flavors() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig", "vanilla"]));

        let set = adapter.read(&path).unwrap();
        assert_eq!(set.len(), 2);

        let default = set.get("defaultConfig").unwrap();
        assert_eq!(default.name.to_string(), "alpha-278");
        assert_eq!(default.code, Some(1004));

        let vanilla = set.get("vanilla").unwrap();
        assert_eq!(vanilla.name.to_string(), "16.8-rc-1");
        assert_eq!(vanilla.code, Some(1003));
    }

    #[test]
    fn test_read_declaration_order() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        // requested in reverse of declaration order
        let adapter = GradleVersionFile::new(flavors(&["vanilla", "defaultConfig"]));

        let set = adapter.read(&path).unwrap();
        let names: Vec<&str> = set.flavor_names().collect();
        assert_eq!(names, vec!["defaultConfig", "vanilla"]);
    }

    #[test]
    fn test_read_flavor_without_version_fields_is_none() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig", "wasabi"]));

        let set = adapter.read(&path).unwrap();
        assert!(set.get("wasabi").is_none());
        let names: Vec<&str> = set.flavor_names().collect();
        assert_eq!(names, vec!["defaultConfig"]);

        assert_eq!(adapter.read_flavor(&path, "wasabi").unwrap(), None);
    }

    #[test]
    fn test_read_missing_flavor_is_none() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["chocolate"]));

        let set = adapter.read(&path).unwrap();
        assert!(set.is_empty());
        assert_eq!(adapter.read_flavor(&path, "chocolate").unwrap(), None);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig"]));
        assert!(adapter.read(&dir.path().join("absent.gradle")).is_err());
    }

    #[test]
    fn test_read_kotlin_dsl_assignments() {
        let kts = r#"android {
    defaultConfig {
        versionCode = 42
        versionName = "1.2.3"
    }
}
"#;
        let (_dir, path) = write_fixture(kts);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig"]));

        let version = adapter.read_flavor(&path, "defaultConfig").unwrap().unwrap();
        assert_eq!(version.name, VersionName::new_final(1, 2, Some(3)));
        assert_eq!(version.code, Some(42));
    }

    #[test]
    fn test_version_name_suffix_not_confused() {
        let gradle = r#"android {
    defaultConfig {
        versionNameSuffix "-dev"
        versionName "1.2"
        versionCode 7
    }
}
"#;
        let (_dir, path) = write_fixture(gradle);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig"]));

        let version = adapter.read_flavor(&path, "defaultConfig").unwrap().unwrap();
        assert_eq!(version.name.to_string(), "1.2");
    }

    #[test]
    fn test_apply_selective_patch() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig", "vanilla"]));

        let mut set = VersionSet::new();
        set.insert(
            "vanilla",
            Version::parse("16.8-rc-3", Some("1010")).unwrap(),
        );
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        let expected = TWO_FLAVOR_GRADLE
            .replace("versionName \"16.8-rc-1\"", "versionName \"16.8-rc-3\"")
            .replace("versionCode 1003", "versionCode 1010");
        assert_eq!(updated, expected);

        // defaultConfig block is byte-for-byte unchanged
        assert!(updated.contains("versionName \"alpha-278\""));
        assert!(updated.contains("versionCode 1004"));
    }

    #[test]
    fn test_apply_preserves_untouched_lines() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig"]));

        let mut set = VersionSet::new();
        set.insert(
            "defaultConfig",
            Version::parse("alpha-279", Some("1005")).unwrap(),
        );
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        for (before, after) in TWO_FLAVOR_GRADLE.lines().zip(updated.lines()) {
            if !before.contains("alpha-278") && !before.contains("1004") {
                assert_eq!(before, after);
            }
        }
        assert_eq!(TWO_FLAVOR_GRADLE.lines().count(), updated.lines().count());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig", "vanilla"]));

        let mut set = VersionSet::new();
        set.insert(
            "vanilla",
            Version::parse("16.8-rc-3", Some("1010")).unwrap(),
        );

        adapter.apply(&path, &set).unwrap();
        let once = std::fs::read_to_string(&path).unwrap();
        adapter.apply(&path, &set).unwrap();
        let twice = std::fs::read_to_string(&path).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_does_not_insert_missing_assignments() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["wasabi"]));

        let mut set = VersionSet::new();
        set.insert("wasabi", Version::parse("16.9", Some("1")).unwrap());
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert_eq!(updated, TWO_FLAVOR_GRADLE);
    }

    #[test]
    fn test_apply_preserves_indentation_and_quoting() {
        let gradle = "android {\n    defaultConfig {\n\t\tversionName 'alpha-278'\n\t\tversionCode 1004 // build counter\n    }\n}\n";
        let (_dir, path) = write_fixture(gradle);
        let adapter = GradleVersionFile::new(flavors(&["defaultConfig"]));

        let mut set = VersionSet::new();
        set.insert(
            "defaultConfig",
            Version::parse("alpha-279", Some("1005")).unwrap(),
        );
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("\t\tversionName 'alpha-279'"));
        assert!(updated.contains("\t\tversionCode 1005 // build counter"));
    }

    #[test]
    fn test_apply_without_code_leaves_code_line() {
        let (_dir, path) = write_fixture(TWO_FLAVOR_GRADLE);
        let adapter = GradleVersionFile::new(flavors(&["vanilla"]));

        let mut set = VersionSet::new();
        set.insert("vanilla", Version::parse("16.8-rc-3", None).unwrap());
        adapter.apply(&path, &set).unwrap();

        let updated = std::fs::read_to_string(&path).unwrap();
        assert!(updated.contains("versionName \"16.8-rc-3\""));
        assert!(updated.contains("versionCode 1003"));
    }
}
