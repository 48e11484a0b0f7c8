use crate::config::ConfigError;
use crate::dockerfile::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unable to encode {what}: {source}")]
    Encode {
        what: String,
        #[source]
        source: toml::ser::Error,
    },

    #[error("error during resolution of {name} plan entry: {reason}")]
    PlanMerge { name: String, reason: String },

    #[error("jdk/jre no longer requested by build plan")]
    NotRequested,

    #[error("Unable to map requested Java version of {0} to a UBI supported runtime")]
    UnsupportedJavaVersion(String),

    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ExtensionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtensionError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        ExtensionError::Decode {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ExtensionError> = std::result::Result<T, E>;
