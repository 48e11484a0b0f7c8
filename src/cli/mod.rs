pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{normalize_args, CliArgs, Commands, DetectArgs, GenerateArgs, RenderArgs};
pub use output::{OutputFormat, RenderOutput};
