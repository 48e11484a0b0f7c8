use super::Manifest;
use crate::error::Result;
use crate::extension::ConfigurationResolver;
use crate::output::BuildLogger;
use regex::Regex;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

pub const BP_JVM_VERSION: &str = "BP_JVM_VERSION";

/// Manifest attributes that record the JDK an application was built with,
/// highest precedence first.
const MANIFEST_JDK_ATTRIBUTES: &[&str] = &["Build-Jdk", "Build-Jdk-Spec"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSource {
    Configuration,
    Manifest,
    Default,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::Configuration => write!(f, "{}", BP_JVM_VERSION),
            VersionSource::Manifest => write!(f, "MANIFEST.MF"),
            VersionSource::Default => write!(f, "buildpack default"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmVersion {
    pub version: String,
    pub source: VersionSource,
}

impl JvmVersion {
    /// Picks the requested Java version: an explicit `BP_JVM_VERSION` first,
    /// then the JDK recorded in the application's manifest, then the
    /// configured default.
    pub fn resolve<W: Write>(
        app_dir: &Path,
        configuration: &ConfigurationResolver,
        logger: &mut BuildLogger<W>,
    ) -> Result<Self> {
        let (version, explicit) = configuration.resolve(BP_JVM_VERSION);
        if explicit {
            logger.body(&format!("Using Java version {version} from {BP_JVM_VERSION}"));
            return Ok(Self {
                version,
                source: VersionSource::Configuration,
            });
        }

        let manifest = Manifest::from_app_dir(app_dir)?;
        let recorded = MANIFEST_JDK_ATTRIBUTES
            .iter()
            .find_map(|attr| manifest.get(attr).map(|v| (*attr, v)));

        if let Some((attribute, raw)) = recorded {
            match extract_major_version(raw) {
                Some(major) => {
                    debug!(attribute, raw, major = %major, "java version from manifest");
                    logger.body(&format!(
                        "Using Java version {major} extracted from MANIFEST.MF"
                    ));
                    return Ok(Self {
                        version: major,
                        source: VersionSource::Manifest,
                    });
                }
                None => warn!(attribute, raw, "unrecognised JDK version in manifest, ignoring"),
            }
        }

        logger.body(&format!("Using buildpack default Java version {version}"));
        Ok(Self {
            version,
            source: VersionSource::Default,
        })
    }
}

/// Major version of a JDK version string: `1.8.0_292` is `8`, `17.0.2` is
/// `17`.
pub fn extract_major_version(version: &str) -> Option<String> {
    static MAJOR: OnceLock<Regex> = OnceLock::new();
    let re = MAJOR.get_or_init(|| Regex::new(r"^\s*(?:1\.)?(\d+)").expect("valid regex"));
    re.captures(version).map(|c| c[1].to_string())
}
