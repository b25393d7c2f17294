use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::ext::AbsolutePathExt;
use crate::naming::FileStem;

const CONFIGURATION_EXTENSION: &str = "xml";

/// Creates the output directory and any missing parents.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), OutputError> {
    debug!("Ensuring output directory {}", dir.absolute_display());
    fs::create_dir_all(dir)
        .await
        .context(DirectoryCreationSnafu { path: dir })
}

/// Writes `contents` to `<dir>/<stem>.xml`, replacing any existing file.
pub async fn write_configuration(
    dir: &Path,
    stem: &FileStem,
    contents: String,
) -> Result<PathBuf, OutputError> {
    let path = dir.join(format!("{}.{CONFIGURATION_EXTENSION}", stem.as_str()));
    debug!("Writing {} bytes to {}", contents.len(), path.display());

    let res = fs::write(&path, contents.into_bytes()).await;
    res.0.context(FileWriteSnafu { path: &path })?;

    Ok(path)
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum OutputError {
    #[snafu(display("Failed to create directory {}", path.absolute_display()))]
    DirectoryCreationError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read directory {}", path.absolute_display()))]
    ReadDirError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Failed to write run configuration file {}", path.absolute_display()))]
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}
