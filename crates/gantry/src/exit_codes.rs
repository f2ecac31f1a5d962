//! Exit codes for the CLI

use gantry_core::error::GantryError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Version error
pub const VERSION_ERROR: i32 = 3;

/// Version-file adapter error
pub const ADAPTER_ERROR: i32 = 4;

/// Map an error to the exit code reported to the shell
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GantryError>() {
        Some(GantryError::Config(_)) => CONFIG_ERROR,
        Some(GantryError::Version(_)) => VERSION_ERROR,
        Some(GantryError::Adapter(_)) => ADAPTER_ERROR,
        _ => ERROR,
    }
}
