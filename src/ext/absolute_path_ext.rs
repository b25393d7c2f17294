use std::path::{Path, PathBuf};

/// Resolves a path against the current directory for display, falling back
/// to the path as given when resolution fails.
pub fn absolute_or_given(path: &Path) -> PathBuf {
    match std::path::absolute(path) {
        Ok(absolute) => normalize_path(&absolute),
        Err(_) => path.to_path_buf(),
    }
}

// Drops `.` and resolves `..` lexically, never walking above the root.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            std::path::Component::CurDir => {}
            std::path::Component::ParentDir => {
                if matches!(components.last(), Some(std::path::Component::Normal(_))) {
                    components.pop();
                }
            }
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

pub trait AbsolutePathExt {
    fn absolute_or_given(&self) -> PathBuf;

    fn absolute_display(&self) -> String {
        self.absolute_or_given().display().to_string()
    }
}

impl AbsolutePathExt for Path {
    fn absolute_or_given(&self) -> PathBuf {
        absolute_or_given(self)
    }
}

impl AbsolutePathExt for PathBuf {
    fn absolute_or_given(&self) -> PathBuf {
        absolute_or_given(self)
    }
}
