use super::ExtensionDescriptor;
use crate::config::Environment;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A configuration value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    pub name: String,
    pub value: String,
    pub description: String,
    /// True when the user supplied the value, false for descriptor defaults.
    pub explicit: bool,
}

/// Resolves the `BP_*` settings declared in `[[metadata.configurations]]`.
///
/// Lookup order: process environment, then `<platform>/env/<NAME>`, then the
/// descriptor default. A variable that is set counts as explicit even when
/// empty.
#[derive(Debug, Clone)]
pub struct ConfigurationResolver {
    descriptor: ExtensionDescriptor,
    environment: Environment,
    platform_env_dir: Option<PathBuf>,
}

impl ConfigurationResolver {
    pub fn new(
        descriptor: &ExtensionDescriptor,
        environment: Environment,
        platform_dir: Option<&Path>,
    ) -> Self {
        Self {
            descriptor: descriptor.clone(),
            environment,
            platform_env_dir: platform_dir.map(|p| p.join("env")),
        }
    }

    pub fn resolve(&self, name: &str) -> (String, bool) {
        if let Some(value) = self.environment.get(name) {
            debug!(name, value, "configuration from environment");
            return (value.to_string(), true);
        }

        if let Some(value) = self.platform_value(name) {
            debug!(name, value = %value, "configuration from platform env");
            return (value, true);
        }

        match self.descriptor.configuration(name) {
            Some(c) => (c.default.clone(), false),
            None => (String::new(), false),
        }
    }

    /// Effective values of every `build = true` configuration, in declaration
    /// order.
    pub fn build_configurations(&self) -> Vec<ResolvedConfiguration> {
        self.descriptor
            .metadata
            .configurations
            .iter()
            .filter(|c| c.build)
            .map(|c| {
                let (value, explicit) = self.resolve(&c.name);
                ResolvedConfiguration {
                    name: c.name.clone(),
                    value,
                    description: c.description.clone(),
                    explicit,
                }
            })
            .collect()
    }

    fn platform_value(&self, name: &str) -> Option<String> {
        let path = self.platform_env_dir.as_ref()?.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content.trim_end_matches(['\n', '\r']).to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unable to read platform env file, ignoring");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn descriptor() -> ExtensionDescriptor {
        ExtensionDescriptor::parse(
            r#"
[[metadata.configurations]]
name = "BP_JVM_VERSION"
default = "17"
description = "The Java version"
build = true

[[metadata.configurations]]
name = "BP_JVM_TYPE"
default = "JRE"
description = "The JVM type"
launch = true
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_is_not_explicit() {
        let resolver = ConfigurationResolver::new(&descriptor(), Environment::default(), None);
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), ("17".to_string(), false));
    }

    #[test]
    fn test_environment_is_explicit() {
        let env = Environment::from_pairs([("BP_JVM_VERSION", "11")]);
        let resolver = ConfigurationResolver::new(&descriptor(), env, None);
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), ("11".to_string(), true));
    }

    #[test]
    fn test_empty_environment_value_is_explicit() {
        let env = Environment::from_pairs([("BP_JVM_VERSION", "")]);
        let resolver = ConfigurationResolver::new(&descriptor(), env, None);
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), (String::new(), true));
    }

    #[test]
    fn test_undeclared_configuration() {
        let resolver = ConfigurationResolver::new(&descriptor(), Environment::default(), None);
        assert_eq!(resolver.resolve("BP_UNKNOWN"), (String::new(), false));
    }

    #[test]
    fn test_platform_env_file() {
        let platform = TempDir::new().unwrap();
        fs::create_dir_all(platform.path().join("env")).unwrap();
        fs::write(platform.path().join("env/BP_JVM_VERSION"), "8\n").unwrap();

        let resolver =
            ConfigurationResolver::new(&descriptor(), Environment::default(), Some(platform.path()));
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), ("8".to_string(), true));

        let env = Environment::from_pairs([("BP_JVM_VERSION", "11")]);
        let resolver = ConfigurationResolver::new(&descriptor(), env, Some(platform.path()));
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), ("11".to_string(), true));
    }

    #[test]
    fn test_unreadable_platform_env_falls_back_to_default() {
        let platform = TempDir::new().unwrap();
        fs::create_dir_all(platform.path().join("env/BP_JVM_VERSION")).unwrap();

        let resolver =
            ConfigurationResolver::new(&descriptor(), Environment::default(), Some(platform.path()));
        assert_eq!(resolver.resolve("BP_JVM_VERSION"), ("17".to_string(), false));
    }

    #[test]
    fn test_build_configurations_only_build_entries() {
        let env = Environment::from_pairs([("BP_JVM_VERSION", "11")]);
        let resolver = ConfigurationResolver::new(&descriptor(), env, None);
        let build = resolver.build_configurations();
        assert_eq!(build.len(), 1);
        assert_eq!(build[0].name, "BP_JVM_VERSION");
        assert_eq!(build[0].value, "11");
        assert!(build[0].explicit);
    }
}
