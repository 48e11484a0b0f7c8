//! The two lifecycle phases of an image extension

pub mod detect;
pub mod generate;

pub use detect::{DetectContext, DetectResult};
pub use generate::{
    render_dockerfiles, ExtendConfig, ExtendImageConfig, ExtendImageConfigArg, GenerateContext,
    GenerateResult, RenderedDockerfiles,
};

use crate::error::Result;
use crate::output::BuildLogger;
use std::io::Write;

/// An image extension as the lifecycle sees it.
pub trait Extension {
    fn detect(&self, context: &DetectContext) -> Result<DetectResult>;

    fn generate<W: Write>(
        &self,
        context: &GenerateContext,
        logger: &mut BuildLogger<W>,
    ) -> Result<GenerateResult>;
}

/// Installs a UBI Java runtime into the build image and swaps in the matching
/// run image.
#[derive(Debug, Clone, Copy, Default)]
pub struct UbiJavaExtension;

impl Extension for UbiJavaExtension {
    fn detect(&self, context: &DetectContext) -> Result<DetectResult> {
        detect::detect(context)
    }

    fn generate<W: Write>(
        &self,
        context: &GenerateContext,
        logger: &mut BuildLogger<W>,
    ) -> Result<GenerateResult> {
        generate::generate(context, logger)
    }
}
