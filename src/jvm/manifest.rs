use crate::error::{ExtensionError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Main section attributes of a JAR manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    attributes: HashMap<String, String>,
}

impl Manifest {
    /// Reads `<app_dir>/META-INF/MANIFEST.MF`. Source applications have no
    /// manifest, which yields an empty one.
    pub fn from_app_dir(app_dir: &Path) -> Result<Self> {
        let path = app_dir.join(MANIFEST_PATH);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ExtensionError::io(path, e)),
        }
    }

    /// Parses the main section. Lines starting with a single space continue
    /// the previous value; the first blank line ends the section.
    pub fn parse(content: &str) -> Self {
        let mut attributes = HashMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);

            if let Some(continuation) = line.strip_prefix(' ') {
                if let Some((_, value)) = current.as_mut() {
                    value.push_str(continuation);
                }
                continue;
            }

            if let Some((key, value)) = current.take() {
                attributes.insert(key, value);
            }

            if line.trim().is_empty() {
                break;
            }

            if let Some((key, value)) = line.split_once(':') {
                current = Some((key.trim().to_string(), value.trim_start().to_string()));
            }
        }

        if let Some((key, value)) = current {
            attributes.insert(key, value);
        }

        Self { attributes }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
