//! Working out which Java version the application asked for

mod manifest;
mod version;

pub use manifest::Manifest;
pub use version::{extract_major_version, JvmVersion, VersionSource, BP_JVM_VERSION};
