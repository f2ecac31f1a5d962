//! Release transition calculator
//!
//! Pure functions computing the next version name for each step of the
//! release process. Nothing here touches the filesystem; callers read the
//! current versions through an adapter, compute the transition, and apply
//! the result back.

use tracing::debug;

use gantry_core::error::{Result, VersionError};

use crate::name::VersionName;

/// Compute the next beta version.
///
/// A final `M.N` cuts the first release candidate of the next minor,
/// `M.(N+1)-rc-1` (the code-freeze step; any hotfix component is left
/// behind). A beta increments its release candidate counter. An alpha has
/// no major/minor to work with and fails.
pub fn next_beta(current: &VersionName) -> Result<VersionName> {
    let next = match *current {
        VersionName::Alpha { number } => {
            return Err(VersionError::UnsupportedOperation(format!(
                "cannot derive a beta from alpha-{}",
                number
            ))
            .into());
        }
        VersionName::Beta {
            major,
            minor,
            hotfix,
            rc,
        } => VersionName::new_beta(major, minor, hotfix, rc + 1),
        VersionName::Final { major, minor, .. } => VersionName::new_beta(major, minor + 1, None, 1),
    };
    debug!(current = %current, next = %next, "computed next beta");
    Ok(next)
}

/// Compute the next alpha version by bumping its independent counter.
///
/// Only alphas have that counter; every other variant fails.
pub fn next_alpha(current: &VersionName) -> Result<VersionName> {
    match *current {
        VersionName::Alpha { number } => {
            let next = VersionName::new_alpha(number + 1);
            debug!(current = %current, next = %next, "computed next alpha");
            Ok(next)
        }
        _ => Err(VersionError::UnsupportedOperation(format!(
            "cannot bump '{}' as an alpha",
            current
        ))
        .into()),
    }
}

/// Project the current version onto its final release form
pub fn finalize(current: &VersionName) -> Result<VersionName> {
    let next = current.to_final()?;
    debug!(current = %current, next = %next, "computed final release");
    Ok(next)
}

/// Validate an operator-supplied hotfix version.
///
/// The hotfix number is input, never inferred: `short_version` must parse
/// as `major.minor.hotfix` with a non-zero hotfix, and must patch the same
/// `major.minor` line as `previous`. Returns the parsed final version.
pub fn next_hotfix(short_version: &str, previous: &VersionName) -> Result<VersionName> {
    let next: VersionName = short_version.parse()?;

    let (major, minor) = match next {
        VersionName::Final {
            major,
            minor,
            hotfix: Some(_),
        } => (major, minor),
        _ => {
            return Err(VersionError::InvalidArgument(format!(
                "hotfix version must have the form major.minor.hotfix, got '{}'",
                short_version
            ))
            .into());
        }
    };

    let (prev_major, prev_minor) = match *previous {
        VersionName::Alpha { number } => {
            return Err(VersionError::UnsupportedOperation(format!(
                "cannot hotfix alpha-{}",
                number
            ))
            .into());
        }
        VersionName::Beta { major, minor, .. } | VersionName::Final { major, minor, .. } => {
            (major, minor)
        }
    };

    if (major, minor) != (prev_major, prev_minor) {
        return Err(VersionError::InvalidArgument(format!(
            "hotfix '{}' does not patch previous release '{}'",
            short_version, previous
        ))
        .into());
    }

    debug!(previous = %previous, next = %next, "validated hotfix version");
    Ok(next)
}
