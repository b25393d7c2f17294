//! Filesystem side of generation: output directory setup, removal of stale
//! `current` configurations and writing the rendered document.

mod cleanup;
mod writer;

pub use cleanup::{
    FileRemover, FsRemover, PurgeOutcome, PurgeReport, purge_current_configurations,
};
pub use writer::{OutputError, ensure_output_dir, write_configuration};
