//! Derivation of run configuration names and paths from a target directory.
//!
//! Every operation works on plain strings split by an injected separator, so
//! the results do not depend on the host platform.

mod name_deriver;
mod path_composer;

pub use name_deriver::{DerivationError, FileStem, NameDeriver};
pub use path_composer::PathComposer;
