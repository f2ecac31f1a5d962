//! Gantry Adapters - Version-file adapters
//!
//! Adapters that read and surgically patch the per-flavor version
//! assignments of platform build files: `build.gradle` for Android and
//! `.xcconfig` build settings for iOS/Mac.

mod gradle;
mod traits;
mod xcconfig;

pub use gradle::GradleVersionFile;
pub use traits::{adapter_for, VersionFile};
pub use xcconfig::{XcconfigVersionFile, BUILD_NUMBER_KEY, VERSION_LONG_KEY};
