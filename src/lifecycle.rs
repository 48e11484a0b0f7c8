//! The lifecycle's calling convention for image extensions
//!
//! The lifecycle runs `bin/detect` and `bin/generate` with their inputs in
//! `CNB_*` environment variables and reads results back from files:
//!
//! - detect writes the build plan to `CNB_BUILD_PLAN_PATH` and exits `0` to
//!   pass or `100` to fail
//! - generate writes `build.Dockerfile`, `run.Dockerfile` and
//!   `extend-config.toml` into `CNB_OUTPUT_DIR`
//!
//! Any other exit code is an error.

use crate::dockerfile::{BUILD_DOCKERFILE_NAME, RUN_DOCKERFILE_NAME};
use crate::error::{ExtensionError, Result};
use crate::output::BuildLogger;
use crate::phases::{DetectContext, Extension, GenerateContext, GenerateResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const EXIT_PASS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_FAIL: i32 = 100;

pub const EXTEND_CONFIG_NAME: &str = "extend-config.toml";

/// Runs detection and writes the plan. Returns the exit code.
pub fn run_detect<E: Extension>(
    extension: &E,
    context: &DetectContext,
    build_plan_path: &Path,
) -> Result<i32> {
    let result = extension.detect(context)?;
    if !result.pass {
        info!("detection failed");
        return Ok(EXIT_FAIL);
    }

    let plan = result.build_plan().to_toml()?;
    write_file(build_plan_path, &plan)?;
    debug!(path = %build_plan_path.display(), "wrote build plan");
    Ok(EXIT_PASS)
}

/// Runs generation and writes its artifacts into `output_dir`.
pub fn run_generate<E: Extension, W: Write>(
    extension: &E,
    context: &GenerateContext,
    output_dir: &Path,
    logger: &mut BuildLogger<W>,
) -> Result<GenerateResult> {
    let result = extension.generate(context, logger)?;

    fs::create_dir_all(output_dir).map_err(|e| ExtensionError::io(output_dir, e))?;
    write_file(&output_dir.join(BUILD_DOCKERFILE_NAME), result.build_dockerfile())?;
    write_file(&output_dir.join(RUN_DOCKERFILE_NAME), result.run_dockerfile())?;
    write_file(
        &output_dir.join(EXTEND_CONFIG_NAME),
        &result.extend_config.to_toml()?,
    )?;

    debug!(output_dir = %output_dir.display(), "wrote generated artifacts");
    Ok(result)
}

/// Extension root when `CNB_EXTENSION_DIR` is unset: the binary lives in
/// `<root>/bin/`.
pub fn extension_dir_from_argv0(argv0: &Path) -> Option<PathBuf> {
    let absolute = if argv0.is_absolute() {
        argv0.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(argv0)
    };
    absolute.parent()?.parent().map(Path::to_path_buf)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ExtensionError::io(path, e))
}
