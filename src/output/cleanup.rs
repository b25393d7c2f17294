use std::io;
use std::path::{Path, PathBuf};

use compio::fs;
use snafu::{ResultExt, Snafu};
use tracing::debug;

use super::writer::{OutputError, ReadDirSnafu};
use crate::descriptor::{COMPONENT_NAME, CONFIGURATION_TYPE};
use crate::ext::AbsolutePathExt;

const CONFIGURATION_SUFFIX: &str = ".xml";

/// Substrings identifying a file as a run configuration this tool can replace.
const CONFIGURATION_MARKERS: [&str; 2] = [COMPONENT_NAME, CONFIGURATION_TYPE];

pub trait FileRemover {
    async fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Removes files through the async runtime.
pub struct FsRemover;

impl FileRemover for FsRemover {
    async fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }
}

#[derive(Debug)]
pub enum PurgeOutcome {
    /// File name of a removed configuration.
    Removed(String),
    Failed(DeleteWarning),
}

/// Outcomes of one purge, in the order the files were visited.
#[derive(Debug, Default)]
pub struct PurgeReport {
    pub outcomes: Vec<PurgeOutcome>,
}

impl PurgeReport {
    pub fn removed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                PurgeOutcome::Removed(name) => Some(name.as_str()),
                PurgeOutcome::Failed(_) => None,
            })
            .collect()
    }
}

/// Removes previously generated configurations whose file name starts with
/// `prefix` from `dir`. Only the immediate entries are scanned. A failed
/// removal is recorded as a warning and the scan goes on.
pub async fn purge_current_configurations(
    dir: &Path,
    prefix: &str,
    remover: &impl FileRemover,
) -> Result<PurgeReport, OutputError> {
    let mut report = PurgeReport::default();

    for path in candidate_files(dir, prefix)? {
        let contents = match fs::read(&path).await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                debug!("Skipping unreadable file {}: {}", path.display(), e);
                continue;
            }
        };

        if !is_run_configuration(&contents) {
            debug!("Keeping {}: not a run configuration", path.display());
            continue;
        }

        let outcome = match remover.remove(&path).await {
            Ok(()) => {
                debug!("Removed {}", path.display());
                PurgeOutcome::Removed(file_name(&path))
            }
            Err(source) => {
                debug!("Could not remove {}: {}", path.display(), source);
                PurgeOutcome::Failed(DeleteWarning { path, source })
            }
        };
        report.outcomes.push(outcome);
    }

    Ok(report)
}

fn candidate_files(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, OutputError> {
    let entries = std::fs::read_dir(dir).context(ReadDirSnafu { path: dir })?;

    let mut candidates = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| {
            let name = file_name(path);
            name.starts_with(prefix) && name.ends_with(CONFIGURATION_SUFFIX)
        })
        .collect::<Vec<_>>();
    candidates.sort();

    Ok(candidates)
}

fn is_run_configuration(contents: &str) -> bool {
    CONFIGURATION_MARKERS
        .iter()
        .any(|marker| contents.contains(marker))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[derive(Debug, Snafu)]
#[snafu(display("Failed to remove {}: {}", path.absolute_display(), source))]
pub struct DeleteWarning {
    path: PathBuf,
    source: io::Error,
}
