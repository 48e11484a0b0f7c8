//! `extension.toml` and the build configuration it declares

mod configuration;
mod descriptor;

pub use configuration::{ConfigurationResolver, ResolvedConfiguration};
pub use descriptor::{
    ConfigurationDescriptor, ExtensionDescriptor, ExtensionInfo, ExtensionLicense,
    ExtensionMetadata, EXTENSION_DESCRIPTOR_NAME,
};
