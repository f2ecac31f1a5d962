//! A version name paired with a numeric build code

use std::fmt;

use serde::{Deserialize, Serialize};

use gantry_core::error::{Result, VersionError};

use crate::name::VersionName;

/// A flavor's full version info: semantic name plus monotonic build code.
///
/// The code is `None` when the flavor carries no build number in its
/// version file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Semantic version name
    pub name: VersionName,
    /// Monotonic build number, distinct from the name
    pub code: Option<u64>,
}

impl Version {
    /// Create a new version
    pub fn new(name: VersionName, code: Option<u64>) -> Self {
        Self { name, code }
    }

    /// Parse a version from file tokens: a name string and an optional
    /// build-code token
    pub fn parse(name: &str, code: Option<&str>) -> Result<Self> {
        let name: VersionName = name.parse()?;
        let code = code.map(parse_code).transpose()?;
        Ok(Self { name, code })
    }

    /// The build code the next release of this flavor would carry
    pub fn next_code(&self) -> Option<u64> {
        self.code.map(|c| c + 1)
    }
}

/// Coerce a build-code token from a version file into an integer
pub fn parse_code(token: &str) -> Result<u64> {
    token.trim().parse::<u64>().map_err(|_| {
        VersionError::InvalidArgument(format!("invalid build code: '{}'", token)).into()
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} ({})", self.name, code),
            None => write!(f, "{}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_code() {
        let version = Version::parse("16.8-rc-1", Some("1003")).unwrap();
        assert_eq!(version.name, VersionName::new_beta(16, 8, None, 1));
        assert_eq!(version.code, Some(1003));
    }

    #[test]
    fn test_parse_without_code() {
        let version = Version::parse("alpha-278", None).unwrap();
        assert_eq!(version.name, VersionName::new_alpha(278));
        assert_eq!(version.code, None);
    }

    #[test]
    fn test_parse_bad_code() {
        assert!(Version::parse("16.8", Some("12a")).is_err());
    }

    #[test]
    fn test_parse_code_trims_whitespace() {
        assert_eq!(parse_code(" 1004 ").unwrap(), 1004);
    }

    #[test]
    fn test_next_code() {
        let version = Version::parse("16.8", Some("1003")).unwrap();
        assert_eq!(version.next_code(), Some(1004));

        let no_code = Version::parse("16.8", None).unwrap();
        assert_eq!(no_code.next_code(), None);
    }

    #[test]
    fn test_display() {
        let version = Version::parse("16.8-rc-1", Some("1003")).unwrap();
        assert_eq!(version.to_string(), "16.8-rc-1 (1003)");

        let no_code = Version::parse("16.8", None).unwrap();
        assert_eq!(no_code.to_string(), "16.8");
    }
}
