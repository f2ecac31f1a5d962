//! Version name model
//!
//! A release version name is one of three variants: an alpha build
//! (`alpha-42`), a beta / release candidate (`1.2-rc-3`, `1.2.1-rc-3`), or a
//! final release (`1.2`, `1.2.1`). The optional third component is the
//! hotfix number; a hotfix of zero is the same as no hotfix and is
//! normalized away at construction time.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use gantry_core::error::{GantryError, Result, VersionError};

/// A semantic version name for a mobile release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionName {
    /// Alpha build, identified only by its independent build counter
    Alpha {
        /// Alpha build counter
        number: u32,
    },
    /// Beta / release candidate build
    Beta {
        /// Major version
        major: u32,
        /// Minor version
        minor: u32,
        /// Hotfix number, never `Some(0)`
        hotfix: Option<u32>,
        /// Release candidate counter
        rc: u32,
    },
    /// Final release
    Final {
        /// Major version
        major: u32,
        /// Minor version
        minor: u32,
        /// Hotfix number, never `Some(0)`
        hotfix: Option<u32>,
    },
}

/// A hotfix of zero means "not a hotfix"
fn normalize_hotfix(hotfix: Option<u32>) -> Option<u32> {
    hotfix.filter(|h| *h != 0)
}

impl VersionName {
    /// Create an alpha version name
    pub fn new_alpha(number: u32) -> Self {
        Self::Alpha { number }
    }

    /// Create a beta version name
    pub fn new_beta(major: u32, minor: u32, hotfix: Option<u32>, rc: u32) -> Self {
        Self::Beta {
            major,
            minor,
            hotfix: normalize_hotfix(hotfix),
            rc,
        }
    }

    /// Create a final version name
    pub fn new_final(major: u32, minor: u32, hotfix: Option<u32>) -> Self {
        Self::Final {
            major,
            minor,
            hotfix: normalize_hotfix(hotfix),
        }
    }

    /// Whether this is an alpha build
    pub fn is_alpha(&self) -> bool {
        matches!(self, Self::Alpha { .. })
    }

    /// Whether this is a beta / release candidate build
    pub fn is_beta(&self) -> bool {
        matches!(self, Self::Beta { .. })
    }

    /// Whether this is a final release
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final { .. })
    }

    /// Whether this version carries a hotfix component
    pub fn is_hotfix(&self) -> bool {
        matches!(
            self,
            Self::Beta { hotfix: Some(_), .. } | Self::Final { hotfix: Some(_), .. }
        )
    }

    /// Project this version name onto its final release form.
    ///
    /// A beta drops its release candidate counter; a final returns an equal
    /// copy. An alpha has no meaningful final form and fails.
    pub fn to_final(&self) -> Result<VersionName> {
        match *self {
            Self::Alpha { number } => Err(VersionError::UnsupportedOperation(format!(
                "alpha-{} has no final release form",
                number
            ))
            .into()),
            Self::Beta {
                major,
                minor,
                hotfix,
                ..
            } => Ok(Self::Final {
                major,
                minor,
                hotfix,
            }),
            Self::Final { .. } => Ok(*self),
        }
    }
}

impl fmt::Display for VersionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Alpha { number } => write!(f, "alpha-{}", number),
            Self::Beta {
                major,
                minor,
                hotfix: Some(hotfix),
                rc,
            } => write!(f, "{}.{}.{}-rc-{}", major, minor, hotfix, rc),
            Self::Beta {
                major,
                minor,
                hotfix: None,
                rc,
            } => write!(f, "{}.{}-rc-{}", major, minor, rc),
            Self::Final {
                major,
                minor,
                hotfix: Some(hotfix),
            } => write!(f, "{}.{}.{}", major, minor, hotfix),
            Self::Final {
                major,
                minor,
                hotfix: None,
            } => write!(f, "{}.{}", major, minor),
        }
    }
}

impl FromStr for VersionName {
    type Err = GantryError;

    fn from_str(s: &str) -> Result<Self> {
        let alpha_re = Regex::new(r"^alpha-(\d+)$").unwrap();
        let beta_re = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?-rc-(\d+)$").unwrap();
        let final_re = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?$").unwrap();

        let num = |text: &str| -> Result<u32> {
            text.parse::<u32>()
                .map_err(|_| VersionError::InvalidFormat(s.to_string()).into())
        };

        if let Some(caps) = alpha_re.captures(s) {
            return Ok(Self::new_alpha(num(&caps[1])?));
        }

        if let Some(caps) = beta_re.captures(s) {
            let hotfix = caps.get(3).map(|m| num(m.as_str())).transpose()?;
            return Ok(Self::new_beta(
                num(&caps[1])?,
                num(&caps[2])?,
                hotfix,
                num(&caps[4])?,
            ));
        }

        if let Some(caps) = final_re.captures(s) {
            let hotfix = caps.get(3).map(|m| num(m.as_str())).transpose()?;
            return Ok(Self::new_final(num(&caps[1])?, num(&caps[2])?, hotfix));
        }

        Err(VersionError::InvalidFormat(s.to_string()).into())
    }
}

impl Serialize for VersionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for VersionName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
