use crate::error::{ExtensionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub const EXTENSION_DESCRIPTOR_NAME: &str = "extension.toml";

/// Contents of `extension.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionDescriptor {
    #[serde(default)]
    pub api: String,
    #[serde(default, rename = "extension")]
    pub info: ExtensionInfo,
    #[serde(default)]
    pub metadata: ExtensionMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<ExtensionLicense>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionLicense {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtensionMetadata {
    #[serde(default)]
    pub configurations: Vec<ConfigurationDescriptor>,
    /// Any other `[metadata]` keys, kept verbatim.
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// One `[[metadata.configurations]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationDescriptor {
    pub name: String,
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub build: bool,
    #[serde(default)]
    pub launch: bool,
}

impl ExtensionDescriptor {
    /// Reads `<cnb_path>/extension.toml`. A missing file is not an error and
    /// yields an empty descriptor.
    pub fn load(cnb_path: &Path) -> Result<Self> {
        let path = cnb_path.join(EXTENSION_DESCRIPTOR_NAME);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let descriptor = Self::parse(&content).map_err(|e| ExtensionError::decode(&path, e))?;
                debug!(path = %path.display(), id = %descriptor.info.id, "loaded extension descriptor");
                Ok(descriptor)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no extension descriptor, using empty metadata");
                Ok(Self::default())
            }
            Err(e) => Err(ExtensionError::io(path, e)),
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn configuration(&self, name: &str) -> Option<&ConfigurationDescriptor> {
        self.metadata.configurations.iter().find(|c| c.name == name)
    }
}
