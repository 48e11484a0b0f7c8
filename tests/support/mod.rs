//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use ubi_java_extension::plan::{BuildpackPlan, BuildpackPlanEntry};

pub const STACK_ID: &str = "ubi8-paketo";

/// Writes an `extension.toml` whose `BP_JVM_VERSION` default is
/// `default_java_version`.
pub fn write_extension_toml(dir: &Path, default_java_version: &str) {
    let content = format!(
        r#"
api = "0.9"

[extension]
id = "redhat-runtimes/java"
name = "RedHat Runtimes Java Dependency Extension"
version = "0.0.1"
description = "This extension installs the appropriate java runtime via dnf"

[metadata]

  [[metadata.configurations]]
    build = true
    default = "{default_java_version}"
    description = "The Default Java version (testcase)"
    name = "BP_JVM_VERSION"
"#
    );
    fs::write(dir.join("extension.toml"), content).expect("Failed to write extension.toml");
}

/// Writes `META-INF/MANIFEST.MF` into an application directory.
pub fn write_manifest(app_dir: &Path, content: &str) {
    let meta_inf = app_dir.join("META-INF");
    fs::create_dir_all(&meta_inf).expect("Failed to create META-INF");
    fs::write(meta_inf.join("MANIFEST.MF"), content).expect("Failed to write MANIFEST.MF");
}

/// A buildpack plan with a single `jdk` entry carrying the given metadata.
pub fn jdk_plan(metadata: &[(&str, &str)]) -> BuildpackPlan {
    let entry = metadata
        .iter()
        .fold(BuildpackPlanEntry::new("jdk"), |entry, (key, value)| {
            entry.with_metadata(key, *value)
        });
    BuildpackPlan::new(vec![entry])
}

pub fn expected_build_dockerfile(package: &str, user_id: u32, group_id: u32, stack: &str) -> String {
    format!(
        "ARG base_image\n\
         FROM ${{base_image}}\n\
         \n\
         USER root\n\
         \n\
         ARG build_id=0\n\
         RUN echo ${{build_id}}\n\
         \n\
         RUN microdnf --setopt=install_weak_deps=0 --setopt=tsflags=nodocs install -y openssl-devel {package} nss_wrapper which && microdnf clean all\n\
         \n\
         RUN echo uid:gid \"{user_id}:{group_id}\"\n\
         USER {user_id}:{group_id}\n\
         \n\
         RUN echo \"CNB_STACK_ID: {stack}\""
    )
}

pub fn expected_run_dockerfile(run_image: &str) -> String {
    format!("FROM {run_image}")
}

/// Extension root, application and output directories for one test.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        for dir in ["cnb", "app", "platform", "out"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create workspace dir");
        }
        Self { root }
    }

    pub fn cnb_dir(&self) -> PathBuf {
        self.root.path().join("cnb")
    }

    pub fn app_dir(&self) -> PathBuf {
        self.root.path().join("app")
    }

    pub fn platform_dir(&self) -> PathBuf {
        self.root.path().join("platform")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }
}
