use std::path::PathBuf;

use clap::{ArgAction, Parser, builder::BoolishValueParser};

use crate::application::DEFAULT_OUTPUT_DIR;
use crate::cli::LogLevel;

/// Generates an IDE run configuration for a Go executable.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Working directory of the executable (required)
    #[clap(long = "workingDir", value_name = "PATH")]
    pub working_dir: Option<String>,

    /// Module name (required)
    #[clap(long = "moduleName", value_name = "NAME")]
    pub module_name: Option<String>,

    /// Go package root (required)
    #[clap(long = "package", value_name = "PATH")]
    pub package: Option<String>,

    /// Generate a disposable `current_` configuration and remove earlier ones
    #[clap(
        long,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
        action = ArgAction::Set,
    )]
    pub current: bool,

    /// Directory the configuration file is written to
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}
