//! Generate phase integration tests
//!
//! Each test lays out an extension directory, an application directory and a
//! buildpack plan on disk, then runs generation the way the lifecycle would.

mod support;

use std::fs;
use support::{
    expected_build_dockerfile, expected_run_dockerfile, jdk_plan, write_extension_toml,
    write_manifest, Workspace, STACK_ID,
};
use ubi_java_extension::lifecycle::{run_generate, EXTEND_CONFIG_NAME};
use ubi_java_extension::output::BuildLogger;
use ubi_java_extension::phases::ExtendConfig;
use ubi_java_extension::plan::{BuildpackPlan, BuildpackPlanEntry};
use ubi_java_extension::{
    Environment, Extension, ExtensionError, GenerateContext, GenerateResult, UbiJavaExtension,
};
use yare::parameterized;

fn context(workspace: &Workspace, plan: BuildpackPlan, environment: Environment) -> GenerateContext {
    GenerateContext {
        working_dir: workspace.app_dir(),
        cnb_path: workspace.cnb_dir(),
        platform_dir: Some(workspace.platform_dir()),
        plan,
        stack: STACK_ID.to_string(),
        environment,
    }
}

fn generate(context: &GenerateContext) -> (Result<GenerateResult, ExtensionError>, String) {
    let mut logger = BuildLogger::new(Vec::new());
    let result = UbiJavaExtension.generate(context, &mut logger);
    let output = String::from_utf8(logger.into_inner()).expect("log output is utf-8");
    (result, output)
}

#[parameterized(
    java_17 = { "17", "java-17-openjdk-devel", "paketo-buildpacks/ubi8-paketo-run-java-17" },
    java_11 = { "11", "java-11-openjdk-devel", "paketo-buildpacks/ubi8-paketo-run-java-11" },
    java_8 = { "8", "java-1.8.0-openjdk-devel", "paketo-buildpacks/ubi8-paketo-run-java-8" },
)]
fn test_specific_version_requested(version: &str, package: &str, run_image: &str) {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), version);
    let plan = jdk_plan(&[("version", version), ("version-source", "BP_JVM_VERSION")]);

    let (result, _) = generate(&context(&workspace, plan, Environment::default()));
    let result = result.expect("generation succeeds");

    assert_eq!(result.java_version.version, version);
    assert_eq!(
        result.build_dockerfile(),
        expected_build_dockerfile(package, 1000, 1000, STACK_ID)
    );
    assert_eq!(result.run_dockerfile(), expected_run_dockerfile(run_image));
}

#[parameterized(
    empty_metadata = { &[] },
    empty_version = { &[("version", ""), ("version-source", "BP_JVM_VERSION")] },
    unknown_version = { &[("version", "x"), ("version-source", "BP_JVM_VERSION")] },
)]
fn test_default_when_version_not_configured(metadata: &[(&str, &str)]) {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");

    let (result, output) = generate(&context(&workspace, jdk_plan(metadata), Environment::default()));
    let result = result.expect("generation succeeds");

    assert_eq!(
        result.build_dockerfile(),
        expected_build_dockerfile("java-17-openjdk-devel", 1000, 1000, STACK_ID)
    );
    assert_eq!(
        result.run_dockerfile(),
        expected_run_dockerfile("paketo-buildpacks/ubi8-paketo-run-java-17")
    );
    assert!(output.contains("Using buildpack default Java version 17"));
}

#[parameterized(
    java_16 = { "16" },
    java_1_9_10 = { "1.9.10" },
)]
fn test_unsupported_version_errors(requested: &str) {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let environment = Environment::from_pairs([("BP_JVM_VERSION", requested)]);

    let (result, _) = generate(&context(&workspace, jdk_plan(&[]), environment));
    let err = result.expect_err("unsupported version is rejected");

    assert!(matches!(&err, ExtensionError::UnsupportedJavaVersion(v) if v == requested));
    assert_eq!(
        err.to_string(),
        format!("Unable to map requested Java version of {requested} to a UBI supported runtime")
    );
}

#[test]
fn test_java_no_longer_requested() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let plan = BuildpackPlan::new(vec![BuildpackPlanEntry::new("maven")]);

    let (result, output) = generate(&context(&workspace, plan, Environment::default()));

    assert!(matches!(result, Err(ExtensionError::NotRequested)));
    assert!(output.is_empty());
}

#[test]
fn test_jre_only_plan_is_enough() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "11");
    let plan = BuildpackPlan::new(vec![BuildpackPlanEntry::new("jre")]);

    let (result, _) = generate(&context(&workspace, plan, Environment::default()));

    assert_eq!(
        result.expect("generation succeeds").run_dockerfile(),
        "FROM paketo-buildpacks/ubi8-paketo-run-java-11"
    );
}

#[test]
fn test_environment_overrides_default_and_ids() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let environment = Environment::from_pairs([
        ("BP_JVM_VERSION", "1.8"),
        ("CNB_USER_ID", "1001"),
        ("CNB_GROUP_ID", "1002"),
    ]);

    let (result, output) = generate(&context(&workspace, jdk_plan(&[]), environment));
    let result = result.expect("generation succeeds");

    assert_eq!(
        result.build_dockerfile(),
        expected_build_dockerfile("java-1.8.0-openjdk-devel", 1001, 1002, STACK_ID)
    );
    assert!(output.contains("Using Java version 1.8 from BP_JVM_VERSION"));
}

#[test]
fn test_unknown_log_level_does_not_fail_build() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let environment =
        Environment::from_pairs([("BP_JVM_VERSION", "17"), ("BP_LOG_LEVEL", "verbose")]);

    let (result, _) = generate(&context(&workspace, jdk_plan(&[]), environment));

    assert_eq!(
        result.expect("generation succeeds").run_dockerfile(),
        "FROM paketo-buildpacks/ubi8-paketo-run-java-17"
    );
}

#[test]
fn test_platform_env_file_is_explicit() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let env_dir = workspace.platform_dir().join("env");
    fs::create_dir_all(&env_dir).unwrap();
    fs::write(env_dir.join("BP_JVM_VERSION"), "11\n").unwrap();

    let (result, _) = generate(&context(&workspace, jdk_plan(&[]), Environment::default()));

    assert_eq!(
        result.expect("generation succeeds").run_dockerfile(),
        "FROM paketo-buildpacks/ubi8-paketo-run-java-11"
    );
}

#[parameterized(
    build_jdk = { "Manifest-Version: 1.0\nBuild-Jdk: 11.0.12\n", "11" },
    build_jdk_legacy = { "Manifest-Version: 1.0\nBuild-Jdk: 1.8.0_292\n", "8" },
    build_jdk_spec = { "Manifest-Version: 1.0\nBuild-Jdk-Spec: 17\n", "17" },
    build_jdk_wins = { "Build-Jdk-Spec: 17\nBuild-Jdk: 11.0.2\n", "11" },
)]
fn test_version_from_manifest(manifest: &str, expected: &str) {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    write_manifest(&workspace.app_dir(), manifest);

    let (result, output) = generate(&context(&workspace, jdk_plan(&[]), Environment::default()));

    assert_eq!(result.expect("generation succeeds").java_version.version, expected);
    assert!(output.contains(&format!("Using Java version {expected} extracted from MANIFEST.MF")));
}

#[test]
fn test_configuration_overrides_manifest() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    write_manifest(&workspace.app_dir(), "Build-Jdk: 11.0.12\n");
    let environment = Environment::from_pairs([("BP_JVM_VERSION", "8")]);

    let (result, _) = generate(&context(&workspace, jdk_plan(&[]), environment));

    assert_eq!(result.expect("generation succeeds").java_version.version, "8");
}

#[test]
fn test_missing_descriptor_without_configuration_errors() {
    let workspace = Workspace::new();

    let (result, _) = generate(&context(&workspace, jdk_plan(&[]), Environment::default()));

    assert!(matches!(result, Err(ExtensionError::UnsupportedJavaVersion(v)) if v.is_empty()));
}

#[test]
fn test_run_generate_writes_artifacts() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let output_dir = workspace.output_dir();
    let mut logger = BuildLogger::new(Vec::new());

    let result = run_generate(
        &UbiJavaExtension,
        &context(&workspace, jdk_plan(&[]), Environment::default()),
        &output_dir,
        &mut logger,
    )
    .expect("generation succeeds");

    assert_eq!(
        fs::read_to_string(output_dir.join("build.Dockerfile")).unwrap(),
        result.build_dockerfile()
    );
    assert_eq!(
        fs::read_to_string(output_dir.join("run.Dockerfile")).unwrap(),
        "FROM paketo-buildpacks/ubi8-paketo-run-java-17"
    );
    let extend_config: ExtendConfig =
        toml::from_str(&fs::read_to_string(output_dir.join(EXTEND_CONFIG_NAME)).unwrap()).unwrap();
    assert!(extend_config.build.args.is_empty());
}

#[test]
fn test_conflicting_plan_metadata_errors() {
    let workspace = Workspace::new();
    write_extension_toml(&workspace.cnb_dir(), "17");
    let plan = BuildpackPlan::new(vec![
        BuildpackPlanEntry::new("jdk").with_metadata("launch", toml::Value::Array(vec![])),
        BuildpackPlanEntry::new("jdk").with_metadata("launch", true),
    ]);

    let (result, _) = generate(&context(&workspace, plan, Environment::default()));

    assert!(matches!(result, Err(ExtensionError::PlanMerge { name, .. }) if name == "jdk"));
}
