use crate::config::ExtensionConfig;
use crate::runtime::UbiJavaRuntime;
use serde::Serialize;

/// Packages installed next to the JDK on every build image.
const SUPPORT_PACKAGES_BEFORE: &[&str] = &["openssl-devel"];
const SUPPORT_PACKAGES_AFTER: &[&str] = &["nss_wrapper", "which"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDockerfileProps {
    pub java_version: String,
    pub cnb_user_id: u32,
    pub cnb_group_id: u32,
    pub cnb_stack_id: String,
    pub packages: String,
}

impl BuildDockerfileProps {
    pub fn new(
        java_version: &str,
        runtime: UbiJavaRuntime,
        config: &ExtensionConfig,
        stack_id: &str,
    ) -> Self {
        Self {
            java_version: java_version.to_string(),
            cnb_user_id: config.cnb_user_id,
            cnb_group_id: config.cnb_group_id,
            cnb_stack_id: stack_id.to_string(),
            packages: package_list(runtime.package()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunDockerfileProps {
    pub source: String,
}

impl RunDockerfileProps {
    pub fn new(runtime: UbiJavaRuntime) -> Self {
        Self {
            source: runtime.run_image().to_string(),
        }
    }
}

fn package_list(java_package: &str) -> String {
    SUPPORT_PACKAGES_BEFORE
        .iter()
        .copied()
        .chain(std::iter::once(java_package))
        .chain(SUPPORT_PACKAGES_AFTER.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
