use std::path::PathBuf;

use colored::Colorize;
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::{InputError, RuntimeConfig};
use crate::descriptor::{RunConfigurationDescriptor, SerializationError};
use crate::ext::AbsolutePathExt;
use crate::naming::{DerivationError, FileStem, NameDeriver, PathComposer};
use crate::output::{
    self, FileRemover, FsRemover, OutputError, PurgeOutcome, PurgeReport,
};

/// Everything needed to write one configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedConfiguration {
    pub file_stem: FileStem,
    pub descriptor: RunConfigurationDescriptor,
}

pub struct Application;

impl Application {
    pub async fn run(
        app_config: impl TryInto<RuntimeConfig, Error = InputError>,
    ) -> Result<PathBuf, ApplicationError> {
        let app_config: RuntimeConfig = app_config.try_into().inspect_err(|e| {
            let InputError::MissingRequiredInput { missing } = e;
            debug!("Missing required flags: {}", missing.join(", "));
        })?;
        debug!("Runtime config: {:?}", app_config);

        let path = Self::generate(&app_config).await?;
        println!(
            "{} {}",
            "Run configuration generated successfully at".green(),
            path.absolute_display()
        );

        Ok(path)
    }

    /// Derives names and paths from the working directory and builds the
    /// descriptor, without touching the filesystem.
    pub fn plan(app_config: &RuntimeConfig) -> Result<GeneratedConfiguration, ApplicationError> {
        let deriver = NameDeriver::new(app_config.separator);
        let composer = PathComposer::new(app_config.separator, app_config.project_dir.as_str());
        let working_dir = app_config.working_dir.as_str();

        let config_name = deriver
            .config_name(working_dir, app_config.name_segments)
            .context(DerivationSnafu)?;
        let file_stem = app_config.mode.file_stem(deriver.file_stem(&config_name));
        let folder_name = app_config
            .mode
            .folder_name(&deriver, working_dir)
            .context(DerivationSnafu)?;
        debug!("Derived name '{config_name}', file '{file_stem}', folder '{folder_name}'");

        let descriptor = RunConfigurationDescriptor::go_application(
            config_name.as_str(),
            folder_name,
            app_config.module_name.as_str(),
            composer.prefix_project_root(working_dir),
            composer.package_path(
                &app_config.package_root,
                &app_config.module_name,
                working_dir,
            ),
            app_config.project_dir.as_str(),
        );

        Ok(GeneratedConfiguration {
            file_stem,
            descriptor,
        })
    }

    /// Plans, renders and writes the configuration, returning the written path.
    pub async fn generate(app_config: &RuntimeConfig) -> Result<PathBuf, ApplicationError> {
        Self::generate_with(app_config, &FsRemover).await
    }

    pub async fn generate_with(
        app_config: &RuntimeConfig,
        remover: &impl FileRemover,
    ) -> Result<PathBuf, ApplicationError> {
        info!("Generating {} run configuration", app_config.mode);
        let GeneratedConfiguration {
            file_stem,
            descriptor,
        } = Self::plan(app_config)?;
        let xml = descriptor.to_xml().context(SerializationSnafu)?;

        let output_dir = app_config.output_dir.as_path();
        output::ensure_output_dir(output_dir)
            .await
            .context(DirectorySnafu)?;

        if let Some(prefix) = app_config.mode.purge_prefix() {
            let report = output::purge_current_configurations(output_dir, prefix, remover)
                .await
                .context(CleanupSnafu)?;
            print_purge_report(&report);
        }

        let path = output::write_configuration(output_dir, &file_stem, xml)
            .await
            .context(WriteSnafu)?;
        info!("Wrote {}", path.display());

        Ok(path)
    }
}

fn print_purge_report(report: &PurgeReport) {
    for outcome in &report.outcomes {
        match outcome {
            PurgeOutcome::Removed(name) => {
                println!("Removed existing current configuration: {name}")
            }
            PurgeOutcome::Failed(warning) => println!("{} {}", "Warning:".yellow(), warning),
        }
    }
    let removed = report.removed().len();
    if removed > 0 {
        println!("Removed {removed} existing current run configuration(s)");
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(transparent)]
    InputError { source: InputError },
    #[snafu(display("Cannot derive the run configuration name"))]
    DerivationError { source: DerivationError },
    #[snafu(display("Error marshaling XML"))]
    SerializationError { source: SerializationError },
    #[snafu(display("Error creating directory"))]
    DirectoryError { source: OutputError },
    #[snafu(display("Error removing existing current configurations"))]
    CleanupError { source: OutputError },
    #[snafu(display("Error writing run configuration file"))]
    WriteError { source: OutputError },
}

impl ApplicationError {
    /// Invalid input fails the process; filesystem and rendering problems are
    /// reported without a failing exit status.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ApplicationError::InputError { .. } | ApplicationError::DerivationError { .. }
        )
    }
}
