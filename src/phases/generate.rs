use crate::config::{Environment, ExtensionConfig};
use crate::dockerfile::{
    fill_props_to_template, BuildDockerfileProps, RunDockerfileProps, BUILD_DOCKERFILE_TEMPLATE,
    RUN_DOCKERFILE_TEMPLATE,
};
use crate::error::{ExtensionError, Result};
use crate::extension::{ConfigurationResolver, ExtensionDescriptor};
use crate::jvm::JvmVersion;
use crate::output::BuildLogger;
use crate::plan::{BuildpackPlan, PlanEntryResolver, PLAN_ENTRY_JDK, PLAN_ENTRY_JRE};
use crate::runtime::{self, UbiJavaRuntime};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct GenerateContext {
    /// Application directory.
    pub working_dir: PathBuf,
    /// Directory holding `extension.toml`.
    pub cnb_path: PathBuf,
    pub platform_dir: Option<PathBuf>,
    pub plan: BuildpackPlan,
    pub stack: String,
    pub environment: Environment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendImageConfigArg {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendImageConfig {
    #[serde(default)]
    pub args: Vec<ExtendImageConfigArg>,
}

/// Contents of `extend-config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendConfig {
    #[serde(default)]
    pub build: ExtendImageConfig,
}

impl ExtendConfig {
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|source| ExtensionError::Encode {
            what: "extend config".to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDockerfiles {
    pub runtime: UbiJavaRuntime,
    pub build_dockerfile: String,
    pub run_dockerfile: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub java_version: JvmVersion,
    pub extend_config: ExtendConfig,
    pub dockerfiles: RenderedDockerfiles,
}

impl GenerateResult {
    pub fn build_dockerfile(&self) -> &str {
        &self.dockerfiles.build_dockerfile
    }

    pub fn run_dockerfile(&self) -> &str {
        &self.dockerfiles.run_dockerfile
    }
}

/// Maps `java_version` to a UBI runtime and fills both Dockerfile templates.
pub fn render_dockerfiles(
    java_version: &str,
    settings: &ExtensionConfig,
    stack: &str,
) -> Result<RenderedDockerfiles> {
    let runtime = runtime::lookup(java_version)?;

    let build_props = BuildDockerfileProps::new(java_version, runtime, settings, stack);
    let build_dockerfile = fill_props_to_template(&build_props, BUILD_DOCKERFILE_TEMPLATE)?;

    let run_props = RunDockerfileProps::new(runtime);
    let run_dockerfile = fill_props_to_template(&run_props, RUN_DOCKERFILE_TEMPLATE)?;

    Ok(RenderedDockerfiles {
        runtime,
        build_dockerfile,
        run_dockerfile,
    })
}

pub fn generate<W: Write>(
    context: &GenerateContext,
    logger: &mut BuildLogger<W>,
) -> Result<GenerateResult> {
    let plan = PlanEntryResolver::new(&context.plan);
    let jdk_required = plan.is_requested(PLAN_ENTRY_JDK)?;
    let jre_required = plan.is_requested(PLAN_ENTRY_JRE)?;

    // An earlier extension may already have satisfied the requirement.
    if !jdk_required && !jre_required {
        debug!("Java extension not required, jdk/jre no longer in plan");
        return Err(ExtensionError::NotRequested);
    }

    let descriptor = ExtensionDescriptor::load(&context.cnb_path)?;
    logger.debug(&format!("Extension: {:?}", descriptor.info));
    logger.title(&descriptor.info);

    let configuration = ConfigurationResolver::new(
        &descriptor,
        context.environment.clone(),
        context.platform_dir.as_deref(),
    );
    logger.configuration_table(&configuration.build_configurations());

    let settings = ExtensionConfig::from_env(&context.environment)?;
    let java_version = JvmVersion::resolve(&context.working_dir, &configuration, logger)?;

    let dockerfiles = render_dockerfiles(&java_version.version, &settings, &context.stack)?;
    logger.body(&format!(
        "Using UBI Java package {}",
        dockerfiles.runtime.package()
    ));

    info!(
        version = %java_version.version,
        source = %java_version.source,
        package = dockerfiles.runtime.package(),
        run_image = dockerfiles.runtime.run_image(),
        "generated Dockerfiles"
    );

    Ok(GenerateResult {
        java_version,
        extend_config: ExtendConfig::default(),
        dockerfiles,
    })
}
