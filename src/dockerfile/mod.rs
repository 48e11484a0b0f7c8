//! Dockerfile templates and the routine that fills them
//!
//! Both templates ship inside the binary. [`fill_props_to_template`] accepts
//! any `Serialize` props struct and substitutes its fields into `{{name}}`
//! placeholders.

mod props;
mod template;

pub use props::{BuildDockerfileProps, RunDockerfileProps};
pub use template::{fill_props_to_template, TemplateError};

pub const BUILD_DOCKERFILE_TEMPLATE: &str = include_str!("../../templates/build.Dockerfile");
pub const RUN_DOCKERFILE_TEMPLATE: &str = include_str!("../../templates/run.Dockerfile");

pub const BUILD_DOCKERFILE_NAME: &str = "build.Dockerfile";
pub const RUN_DOCKERFILE_NAME: &str = "run.Dockerfile";
