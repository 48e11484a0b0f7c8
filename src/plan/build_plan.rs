use crate::error::{ExtensionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildPlanProvide {
    pub name: String,
}

impl BuildPlanProvide {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlanRequire {
    pub name: String,
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub metadata: toml::Table,
}

/// One `[[or]]` alternative of a build plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPlanAlternative {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<BuildPlanProvide>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<BuildPlanRequire>,
}

/// The plan written to `CNB_BUILD_PLAN_PATH` during detection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub provides: Vec<BuildPlanProvide>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<BuildPlanRequire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub or: Vec<BuildPlanAlternative>,
}

impl BuildPlan {
    pub fn providing<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            provides: names.into_iter().map(BuildPlanProvide::new).collect(),
            ..Default::default()
        }
    }

    /// Folds a primary plan and its fallbacks into a single plan with `[[or]]`
    /// alternatives, the shape the lifecycle reads.
    pub fn with_alternatives(mut primary: BuildPlan, alternatives: Vec<BuildPlan>) -> Self {
        primary.or.extend(alternatives.into_iter().map(|plan| BuildPlanAlternative {
            provides: plan.provides,
            requires: plan.requires,
        }));
        primary
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|source| ExtensionError::Encode {
            what: "build plan".to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildpackPlanEntry {
    pub name: String,
    #[serde(default)]
    pub metadata: toml::Table,
}

impl BuildpackPlanEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata: toml::Table::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// The plan read from `CNB_BP_PLAN_PATH` during generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildpackPlan {
    #[serde(default)]
    pub entries: Vec<BuildpackPlanEntry>,
}

impl BuildpackPlan {
    pub fn new(entries: Vec<BuildpackPlanEntry>) -> Self {
        Self { entries }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ExtensionError::io(path, e))?;
        toml::from_str(&content).map_err(|e| ExtensionError::decode(path, e))
    }
}
