use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Phases the lifecycle may invoke through a `bin/<phase>` link.
const LIFECYCLE_PHASES: &[&str] = &["detect", "generate"];

/// Cloud Native Buildpacks image extension that installs a UBI Java runtime
#[derive(Parser, Debug)]
#[command(
    name = "ubi-java-extension",
    about = "Cloud Native Buildpacks image extension that installs a UBI Java runtime",
    version,
    long_about = "Selects a UBI Java package and the matching run image for the requested \
                  Java version and generates build.Dockerfile and run.Dockerfile for the \
                  lifecycle. Installed as bin/detect and bin/generate, the phase is taken \
                  from the program name."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug output")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Declare the jdk/jre capability to the lifecycle",
        long_about = "Writes the build plan offered by this extension to CNB_BUILD_PLAN_PATH.\n\n\
                      Examples:\n  \
                      CNB_BUILD_PLAN_PATH=/tmp/plan.toml ubi-java-extension detect"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Generate build and run Dockerfiles",
        long_about = "Resolves the requested Java version and writes build.Dockerfile, \
                      run.Dockerfile and extend-config.toml into CNB_OUTPUT_DIR.\n\n\
                      Examples:\n  \
                      ubi-java-extension generate --output-dir out --plan-path plan.toml"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Print the Dockerfiles for a Java version",
        long_about = "Renders the Dockerfiles that generate would produce for a Java version \
                      without reading a build plan.\n\n\
                      Examples:\n  \
                      ubi-java-extension render --java-version 11\n  \
                      ubi-java-extension render --java-version 17 --stage run\n  \
                      ubi-java-extension render --format json"
    )]
    Render(RenderArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(long, env = "CNB_BUILD_PLAN_PATH", value_name = "FILE", help = "Where to write the build plan")]
    pub build_plan_path: PathBuf,

    #[arg(long, env = "CNB_PLATFORM_DIR", value_name = "DIR", help = "Platform directory")]
    pub platform_dir: Option<PathBuf>,

    #[arg(long, env = "CNB_EXTENSION_DIR", value_name = "DIR", help = "Extension root directory")]
    pub extension_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Application directory (defaults to the current directory)"
    )]
    pub app_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, env = "CNB_OUTPUT_DIR", value_name = "DIR", help = "Where to write the generated files")]
    pub output_dir: PathBuf,

    #[arg(long, env = "CNB_BP_PLAN_PATH", value_name = "FILE", help = "Buildpack plan to read")]
    pub plan_path: PathBuf,

    #[arg(long, env = "CNB_PLATFORM_DIR", value_name = "DIR", help = "Platform directory")]
    pub platform_dir: Option<PathBuf>,

    #[arg(long, env = "CNB_EXTENSION_DIR", value_name = "DIR", help = "Extension root directory")]
    pub extension_dir: Option<PathBuf>,

    #[arg(long, env = "CNB_STACK_ID", default_value = "", help = "Stack identifier")]
    pub stack_id: String,

    #[arg(
        long,
        value_name = "DIR",
        help = "Application directory (defaults to the current directory)"
    )]
    pub app_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    #[arg(
        long,
        env = "BP_JVM_VERSION",
        default_value = "17",
        value_name = "VERSION",
        help = "Java version to render for"
    )]
    pub java_version: String,

    #[arg(long, env = "CNB_STACK_ID", default_value = "", help = "Stack identifier")]
    pub stack_id: String,

    #[arg(long, value_enum, default_value = "both", help = "Which Dockerfile to print")]
    pub stage: StageArg,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "dockerfile",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageArg {
    Build,
    Run,
    Both,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Dockerfile,
    Json,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Dockerfile => super::output::OutputFormat::Dockerfile,
            OutputFormatArg::Json => super::output::OutputFormat::Json,
        }
    }
}

/// Inserts the phase subcommand when the binary runs as `bin/detect` or
/// `bin/generate`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let phase = args
        .first()
        .and_then(|argv0| Path::new(argv0).file_name())
        .and_then(|name| name.to_str())
        .filter(|name| LIFECYCLE_PHASES.contains(name))
        .map(OsString::from);

    if let Some(phase) = phase {
        args.insert(1, phase);
    }
    args
}
