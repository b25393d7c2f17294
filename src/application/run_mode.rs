use derive_more::Display;

use crate::naming::{DerivationError, FileStem, NameDeriver};

const CURRENT_PREFIX: &str = "current_";
const CURRENT_FOLDER: &str = "current";

/// How the generated configuration is named and what happens to earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum RunMode {
    /// Named after the target directory and grouped by its parent folder.
    #[default]
    #[display("regular")]
    Regular,
    /// Disposable configuration replacing any earlier `current_` one.
    #[display("current")]
    Current,
}

impl RunMode {
    pub fn from_current_flag(current: bool) -> Self {
        if current {
            RunMode::Current
        } else {
            RunMode::Regular
        }
    }

    pub fn file_stem(&self, stem: FileStem) -> FileStem {
        match self {
            RunMode::Regular => stem,
            RunMode::Current => stem.with_prefix(CURRENT_PREFIX),
        }
    }

    pub fn folder_name(
        &self,
        deriver: &NameDeriver,
        working_dir: &str,
    ) -> Result<String, DerivationError> {
        match self {
            RunMode::Regular => deriver.folder_name(working_dir),
            RunMode::Current => Ok(CURRENT_FOLDER.to_string()),
        }
    }

    /// File name prefix of configurations to purge before writing, if any.
    pub fn purge_prefix(&self) -> Option<&'static str> {
        match self {
            RunMode::Regular => None,
            RunMode::Current => Some(CURRENT_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(false, RunMode::Regular)]
    #[case(true, RunMode::Current)]
    fn from_current_flag(#[case] flag: bool, #[case] expected: RunMode) {
        assert_eq!(RunMode::from_current_flag(flag), expected);
    }

    #[test]
    fn current_mode_prefixes_stem_and_fixes_folder() {
        let deriver = NameDeriver::new('/');
        let stem = deriver.file_stem(&deriver.config_name("proj/cmd/server", 2).unwrap());

        assert_eq!(RunMode::Current.file_stem(stem.clone()).as_str(), "current_cmd_server");
        assert_eq!(RunMode::Regular.file_stem(stem).as_str(), "cmd_server");
        assert_eq!(
            RunMode::Current.folder_name(&deriver, "cmd/server").unwrap(),
            "current"
        );
        assert_eq!(
            RunMode::Regular.folder_name(&deriver, "proj/cmd/server").unwrap(),
            "proj"
        );
    }

    #[test]
    fn only_current_mode_purges() {
        assert_eq!(RunMode::Regular.purge_prefix(), None);
        assert_eq!(RunMode::Current.purge_prefix(), Some("current_"));
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(RunMode::Current.to_string(), "current");
        assert_eq!(RunMode::default().to_string(), "regular");
    }
}
