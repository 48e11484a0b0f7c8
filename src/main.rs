use ubi_java_extension::cli::commands::{normalize_args, CliArgs, Commands};
use ubi_java_extension::cli::handlers::{handle_detect, handle_generate, handle_render};
use ubi_java_extension::lifecycle::EXIT_ERROR;
use ubi_java_extension::util::{init_logging, parse_level, LoggingConfig};
use ubi_java_extension::VERSION;

use clap::error::ErrorKind;
use clap::Parser;
use std::env;
use std::path::PathBuf;
use tracing::{debug, Level};

fn main() {
    let raw_args: Vec<_> = env::args_os().collect();
    let argv0 = raw_args.first().map(PathBuf::from).unwrap_or_default();

    let args = match CliArgs::try_parse_from(normalize_args(raw_args)) {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_ERROR);
            }
        },
    };
    let logging = logging_config(&args);
    let debug_output = logging.level >= Level::DEBUG;
    init_logging(logging);

    debug!("ubi-java-extension v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, &argv0),
        Commands::Generate(generate_args) => handle_generate(generate_args, &argv0, debug_output),
        Commands::Render(render_args) => handle_render(render_args),
    };

    std::process::exit(exit_code);
}

fn logging_config(args: &CliArgs) -> LoggingConfig {
    let mut config = LoggingConfig::from_env();
    if let Some(level) = &args.log_level {
        config.level = parse_level(level);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }
    config
}
