use super::commands::StageArg;
use crate::phases::RenderedDockerfiles;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dockerfile,
    Json,
}

/// What `render --format json` prints.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput<'a> {
    pub java_version: &'a str,
    pub package: &'static str,
    pub run_image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_dockerfile: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_dockerfile: Option<&'a str>,
}

impl<'a> RenderOutput<'a> {
    pub fn new(java_version: &'a str, rendered: &'a RenderedDockerfiles, stage: StageArg) -> Self {
        let build = matches!(stage, StageArg::Build | StageArg::Both);
        let run = matches!(stage, StageArg::Run | StageArg::Both);
        Self {
            java_version,
            package: rendered.runtime.package(),
            run_image: rendered.runtime.run_image(),
            build_dockerfile: build.then_some(rendered.build_dockerfile.as_str()),
            run_dockerfile: run.then_some(rendered.run_dockerfile.as_str()),
        }
    }
}

pub fn format_render(output: &RenderOutput<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).context("Failed to serialize render output to JSON")
        }
        OutputFormat::Dockerfile => Ok(format_dockerfiles(output)),
    }
}

fn format_dockerfiles(output: &RenderOutput<'_>) -> String {
    match (output.build_dockerfile, output.run_dockerfile) {
        (Some(build), Some(run)) => {
            format!("# build.Dockerfile\n{build}\n\n# run.Dockerfile\n{run}\n")
        }
        (Some(single), None) | (None, Some(single)) => format!("{single}\n"),
        (None, None) => String::new(),
    }
}
