mod cli;
mod go_style_args;
mod log_level;

pub use cli::Cli;
pub use go_style_args::normalize_go_style_args;
pub use log_level::LogLevel;
