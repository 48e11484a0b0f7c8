use super::{BuildpackPlan, BuildpackPlanEntry};
use crate::error::{ExtensionError, Result};
use toml::Value;
use tracing::debug;

/// Looks up entries of a [`BuildpackPlan`] by name, merging duplicates.
///
/// Several buildpacks may require the same dependency, so the plan can hold
/// more than one entry per name. They are merged left to right: missing keys
/// are filled in, nested tables merge, arrays append and for any other value
/// the earliest entry wins.
#[derive(Debug, Clone, Copy)]
pub struct PlanEntryResolver<'a> {
    plan: &'a BuildpackPlan,
}

impl<'a> PlanEntryResolver<'a> {
    pub fn new(plan: &'a BuildpackPlan) -> Self {
        Self { plan }
    }

    pub fn resolve(&self, name: &str) -> Result<Option<BuildpackPlanEntry>> {
        let mut matching = self.plan.entries.iter().filter(|e| e.name == name);

        let Some(first) = matching.next() else {
            debug!(entry = name, "plan entry not present");
            return Ok(None);
        };

        let mut merged = first.clone();
        for entry in matching {
            merge_tables(&mut merged.metadata, &entry.metadata, "").map_err(|reason| {
                ExtensionError::PlanMerge {
                    name: name.to_string(),
                    reason,
                }
            })?;
        }

        debug!(entry = name, metadata = ?merged.metadata, "resolved plan entry");
        Ok(Some(merged))
    }

    pub fn is_requested(&self, name: &str) -> Result<bool> {
        Ok(self.resolve(name)?.is_some())
    }
}

fn merge_tables(dst: &mut toml::Table, src: &toml::Table, prefix: &str) -> Result<(), String> {
    for (key, incoming) in src {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match dst.get_mut(key) {
            None => {
                dst.insert(key.clone(), incoming.clone());
            }
            Some(Value::Table(existing)) => match incoming {
                Value::Table(incoming) => merge_tables(existing, incoming, &path)?,
                Value::Array(_) => {
                    return Err(format!("cannot merge array into table at '{path}'"))
                }
                _ => {}
            },
            Some(Value::Array(existing)) => match incoming {
                Value::Array(incoming) => existing.extend(incoming.iter().cloned()),
                other => {
                    return Err(format!(
                        "cannot merge {} into array at '{path}'",
                        other.type_str()
                    ))
                }
            },
            Some(existing) => {
                if incoming.is_array() {
                    return Err(format!(
                        "cannot merge array into {} at '{path}'",
                        existing.type_str()
                    ));
                }
            }
        }
    }
    Ok(())
}
