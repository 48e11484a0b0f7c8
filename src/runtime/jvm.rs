use crate::error::{ExtensionError, Result};
use std::fmt;

/// A Java runtime that can be installed from UBI 8 repositories and has a
/// matching Paketo run image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UbiJavaRuntime {
    Java8,
    Java11,
    Java17,
}

impl UbiJavaRuntime {
    /// Maps a requested version string onto a runtime. Only exact spellings
    /// listed here are accepted.
    pub fn from_requested(version: &str) -> Option<Self> {
        match version.trim() {
            "8" | "1.8" | "1.8.0" => Some(Self::Java8),
            "11" => Some(Self::Java11),
            "17" => Some(Self::Java17),
            _ => None,
        }
    }

    pub fn package(&self) -> &'static str {
        match self {
            Self::Java8 => "java-1.8.0-openjdk-devel",
            Self::Java11 => "java-11-openjdk-devel",
            Self::Java17 => "java-17-openjdk-devel",
        }
    }

    pub fn run_image(&self) -> &'static str {
        match self {
            Self::Java8 => "paketo-buildpacks/ubi8-paketo-run-java-8",
            Self::Java11 => "paketo-buildpacks/ubi8-paketo-run-java-11",
            Self::Java17 => "paketo-buildpacks/ubi8-paketo-run-java-17",
        }
    }

    pub fn major_version(&self) -> u32 {
        match self {
            Self::Java8 => 8,
            Self::Java11 => 11,
            Self::Java17 => 17,
        }
    }

    pub fn all_variants() -> &'static [Self] {
        &[Self::Java8, Self::Java11, Self::Java17]
    }
}

impl fmt::Display for UbiJavaRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Java {}", self.major_version())
    }
}

/// Resolves the package and run image for `requested_version`.
pub fn lookup(requested_version: &str) -> Result<UbiJavaRuntime> {
    UbiJavaRuntime::from_requested(requested_version)
        .ok_or_else(|| ExtensionError::UnsupportedJavaVersion(requested_version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java8_aliases() {
        for requested in ["8", "1.8", "1.8.0"] {
            let runtime = lookup(requested).unwrap();
            assert_eq!(runtime, UbiJavaRuntime::Java8);
            assert_eq!(runtime.package(), "java-1.8.0-openjdk-devel");
            assert_eq!(
                runtime.run_image(),
                "paketo-buildpacks/ubi8-paketo-run-java-8"
            );
        }
    }

    #[test]
    fn test_java11() {
        let runtime = lookup("11").unwrap();
        assert_eq!(runtime.package(), "java-11-openjdk-devel");
        assert_eq!(
            runtime.run_image(),
            "paketo-buildpacks/ubi8-paketo-run-java-11"
        );
    }

    #[test]
    fn test_java17() {
        let runtime = lookup("17").unwrap();
        assert_eq!(runtime.package(), "java-17-openjdk-devel");
        assert_eq!(
            runtime.run_image(),
            "paketo-buildpacks/ubi8-paketo-run-java-17"
        );
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(lookup(" 11\n").unwrap(), UbiJavaRuntime::Java11);
    }

    #[test]
    fn test_unsupported_versions() {
        for requested in ["16", "1.9.10", "x", "", "1.8.0_292", "21", "17.0.1"] {
            match lookup(requested) {
                Err(ExtensionError::UnsupportedJavaVersion(v)) => assert_eq!(v, requested),
                other => panic!("Expected UnsupportedJavaVersion for {requested:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for runtime in UbiJavaRuntime::all_variants() {
            let requested = runtime.major_version().to_string();
            assert_eq!(lookup(&requested).unwrap(), *runtime);
            assert_eq!(lookup(&requested).unwrap(), lookup(&requested).unwrap());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(UbiJavaRuntime::Java17.to_string(), "Java 17");
    }
}
