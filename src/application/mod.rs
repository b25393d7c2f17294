mod application;
mod run_mode;
mod runtime_config;

pub use application::Application;
pub use run_mode::RunMode;
pub use runtime_config::{DEFAULT_OUTPUT_DIR, InputError, RuntimeConfig};
