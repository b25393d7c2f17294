use derive_more::Display;
use snafu::Snafu;

/// Position of the folder segment, counted from the end of the path.
const FOLDER_SEGMENT_FROM_END: usize = 3;

const FILE_STEM_REPLACEMENT: char = '_';

/// Human readable configuration name, e.g. `cmd/server`.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct ConfigName(String);

impl ConfigName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Filesystem safe file name without the `.xml` extension.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub struct FileStem(String);

impl FileStem {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn with_prefix(&self, prefix: &str) -> Self {
        FileStem(format!("{prefix}{}", self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameDeriver {
    separator: char,
}

impl NameDeriver {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Returns the last `segments` parts of `path`, joined back with the separator.
    pub fn config_name(&self, path: &str, segments: usize) -> Result<ConfigName, DerivationError> {
        let parts = self.split(path);
        let start = Self::index_from_end(path, &parts, segments)?;
        Ok(ConfigName(parts[start..].join(&self.separator.to_string())))
    }

    pub fn file_stem(&self, name: &ConfigName) -> FileStem {
        FileStem(name.0.replace(self.separator, &FILE_STEM_REPLACEMENT.to_string()))
    }

    /// Returns the 3rd segment from the end of `path`, used as the IDE folder.
    pub fn folder_name(&self, path: &str) -> Result<String, DerivationError> {
        let parts = self.split(path);
        let index = Self::index_from_end(path, &parts, FOLDER_SEGMENT_FROM_END)?;
        Ok(parts[index].to_string())
    }

    fn split<'a>(&self, path: &'a str) -> Vec<&'a str> {
        path.split(self.separator).collect()
    }

    fn index_from_end(
        path: &str,
        parts: &[&str],
        required: usize,
    ) -> Result<usize, DerivationError> {
        parts
            .len()
            .checked_sub(required)
            .ok_or_else(|| DerivationError::OutOfBoundsError {
                path: path.to_string(),
                required,
                available: parts.len(),
            })
    }
}

#[derive(Debug, Snafu)]
pub enum DerivationError {
    #[snafu(display(
        "Path '{}' has {} segment(s), but at least {} are required",
        path,
        available,
        required
    ))]
    OutOfBoundsError {
        path: String,
        required: usize,
        available: usize,
    },
}
