#![allow(clippy::enum_variant_names)]

use std::process::ExitCode;

use clap::Parser as _;
use supports_color::Stream;
use tracing::debug;
use tracing::level_filters::LevelFilter;

use crate::{
    application::Application,
    cli::{Cli, normalize_go_style_args},
};

mod application;
mod cli;
mod descriptor;
mod ext;
mod naming;
mod output;

#[compio::main]
async fn main() -> ExitCode {
    let cli_args = Cli::parse_from(normalize_go_style_args(std::env::args_os()));
    setup_tracing(&cli_args);
    setup_colors();
    debug!("Parsed CLI arguments: {cli_args:?}");

    match Application::run(cli_args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            let fatal = error.is_fatal();
            println!("{}", snafu::Report::from_error(error));
            if fatal {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

fn setup_tracing(cli_args: &Cli) {
    let level = LevelFilter::from(cli_args.log_level);
    if level != LevelFilter::OFF {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .without_time()
            .compact()
            .init();
    }
}

fn setup_colors() {
    if supports_color::on(Stream::Stdout).is_none() {
        colored::control::set_override(false);
    }
}
