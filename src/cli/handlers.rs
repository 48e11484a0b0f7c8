use super::commands::{DetectArgs, GenerateArgs, RenderArgs};
use super::output::{format_render, RenderOutput};
use crate::config::{Environment, ExtensionConfig};
use crate::lifecycle::{self, EXIT_ERROR, EXIT_PASS};
use crate::output::BuildLogger;
use crate::phases::{render_dockerfiles, DetectContext, GenerateContext, UbiJavaExtension};
use crate::plan::BuildpackPlan;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn handle_detect(args: &DetectArgs, argv0: &Path) -> i32 {
    match run_detect(args, argv0) {
        Ok(code) => code,
        Err(e) => report(e),
    }
}

pub fn handle_generate(args: &GenerateArgs, argv0: &Path, debug_output: bool) -> i32 {
    match run_generate(args, argv0, debug_output) {
        Ok(()) => EXIT_PASS,
        Err(e) => report(e),
    }
}

pub fn handle_render(args: &RenderArgs) -> i32 {
    match run_render(args) {
        Ok(()) => EXIT_PASS,
        Err(e) => report(e),
    }
}

fn run_detect(args: &DetectArgs, argv0: &Path) -> Result<i32> {
    let context = DetectContext {
        working_dir: app_dir(args.app_dir.as_deref())?,
        cnb_path: extension_dir(args.extension_dir.as_deref(), argv0)?,
        platform_dir: args.platform_dir.clone(),
    };
    debug!(?context, "detect context");

    lifecycle::run_detect(&UbiJavaExtension, &context, &args.build_plan_path)
        .context("detection failed")
}

fn run_generate(args: &GenerateArgs, argv0: &Path, debug_output: bool) -> Result<()> {
    let plan = BuildpackPlan::from_file(&args.plan_path).context("unable to read buildpack plan")?;

    let context = GenerateContext {
        working_dir: app_dir(args.app_dir.as_deref())?,
        cnb_path: extension_dir(args.extension_dir.as_deref(), argv0)?,
        platform_dir: args.platform_dir.clone(),
        plan,
        stack: args.stack_id.clone(),
        environment: Environment::from_process(),
    };
    debug!(
        working_dir = %context.working_dir.display(),
        cnb_path = %context.cnb_path.display(),
        stack = %context.stack,
        "generate context"
    );

    let mut logger = BuildLogger::stdout(debug_output);
    lifecycle::run_generate(&UbiJavaExtension, &context, &args.output_dir, &mut logger)
        .context("generation failed")?;
    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    let settings = ExtensionConfig::from_env(&Environment::from_process())
        .context("invalid extension configuration")?;
    let rendered = render_dockerfiles(&args.java_version, &settings, &args.stack_id)?;

    let output = RenderOutput::new(&args.java_version, &rendered, args.stage);
    let text = format_render(&output, args.format.into())?;

    match &args.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => print!("{text}"),
    }
    Ok(())
}

fn app_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir().context("unable to determine application directory"),
    }
}

fn extension_dir(explicit: Option<&Path>, argv0: &Path) -> Result<PathBuf> {
    match explicit {
        Some(dir) => Ok(dir.to_path_buf()),
        None => lifecycle::extension_dir_from_argv0(argv0).with_context(|| {
            format!(
                "unable to locate extension directory from {}; set CNB_EXTENSION_DIR",
                argv0.display()
            )
        }),
    }
}

fn report(err: anyhow::Error) -> i32 {
    eprintln!("Error: {:#}", err);
    EXIT_ERROR
}
