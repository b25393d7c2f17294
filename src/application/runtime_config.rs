use std::path::PathBuf;

use snafu::Snafu;

use crate::application::RunMode;
use crate::cli::Cli;

pub const DEFAULT_OUTPUT_DIR: &str = ".idea/runConfigurations";

/// Placeholder the IDE replaces with the project root when loading.
const PROJECT_DIR_PLACEHOLDER: &str = "$PROJECT_DIR$";

/// Number of trailing directory segments making up the configuration name.
const CONFIG_NAME_SEGMENTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub working_dir: String,
    pub module_name: String,
    pub package_root: String,
    pub mode: RunMode,
    pub output_dir: PathBuf,
    pub separator: char,
    pub project_dir: String,
    pub name_segments: usize,
}

impl RuntimeConfig {
    pub fn new(
        working_dir: impl Into<String>,
        module_name: impl Into<String>,
        package_root: impl Into<String>,
        mode: RunMode,
    ) -> Self {
        Self {
            working_dir: working_dir.into(),
            module_name: module_name.into(),
            package_root: package_root.into(),
            mode,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            separator: std::path::MAIN_SEPARATOR,
            project_dir: PROJECT_DIR_PLACEHOLDER.to_string(),
            name_segments: CONFIG_NAME_SEGMENTS,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

impl TryFrom<Cli> for RuntimeConfig {
    type Error = InputError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let required = [
            ("-workingDir", cli.working_dir),
            ("-moduleName", cli.module_name),
            ("-package", cli.package),
        ];
        let missing = required
            .iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(flag, _)| *flag)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(InputError::MissingRequiredInput { missing });
        }

        let [working_dir, module_name, package_root] =
            required.map(|(_, value)| value.unwrap_or_default());

        Ok(
            Self::new(
                working_dir,
                module_name,
                package_root,
                RunMode::from_current_flag(cli.current),
            )
            .with_output_dir(cli.output_dir),
        )
    }
}

#[derive(Debug, Snafu)]
pub enum InputError {
    #[snafu(display("All flags are required: -workingDir, -moduleName, -package"))]
    MissingRequiredInput { missing: Vec<&'static str> },
}
