//! ubi-java-extension - a Cloud Native Buildpacks image extension for Java on UBI
//!
//! During detection the extension offers to provide `jdk` and `jre`. During
//! generation it works out the requested Java version, maps it to a UBI
//! OpenJDK package and a matching Paketo run image, and renders
//! `build.Dockerfile` and `run.Dockerfile` for the lifecycle to apply.
//!
//! # Project Structure
//!
//! - [`phases`]: detection and generation
//! - [`runtime`]: supported Java versions and their packages and run images
//! - [`dockerfile`]: template props and rendering
//! - [`jvm`]: requested version resolution
//! - [`plan`]: build plan types and plan entry resolution
//! - [`extension`]: `extension.toml` and `BP_*` configuration
//! - [`lifecycle`]: environment, files and exit codes expected by the lifecycle

pub mod cli;
pub mod config;
pub mod dockerfile;
pub mod error;
pub mod extension;
pub mod jvm;
pub mod lifecycle;
pub mod output;
pub mod phases;
pub mod plan;
pub mod runtime;
pub mod util;

pub use config::{ConfigError, Environment, ExtensionConfig};
pub use error::{ExtensionError, Result};
pub use phases::{DetectContext, DetectResult, Extension, GenerateContext, GenerateResult, UbiJavaExtension};
pub use runtime::UbiJavaRuntime;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");
