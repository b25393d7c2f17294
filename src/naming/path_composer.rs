#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathComposer {
    separator: char,
    project_dir: String,
}

impl PathComposer {
    pub fn new(separator: char, project_dir: impl Into<String>) -> Self {
        Self {
            separator,
            project_dir: project_dir.into(),
        }
    }

    /// Prefixes `dir` with the project root placeholder. The placeholder is
    /// resolved by the IDE when it loads the configuration. A leading
    /// separator on `dir` is not doubled.
    pub fn prefix_project_root(&self, dir: &str) -> String {
        let dir = dir.strip_prefix(self.separator).unwrap_or(dir);
        format!("{}{}{}", self.project_dir, self.separator, dir)
    }

    /// Joins the package root, module and working directory into the import
    /// path used to launch the program. At most one trailing separator is
    /// stripped from `package_root`; the other parts are taken verbatim.
    pub fn package_path(&self, package_root: &str, module: &str, working_dir: &str) -> String {
        let package_root = package_root
            .strip_suffix(self.separator)
            .unwrap_or(package_root);

        [package_root, module, working_dir].join(&self.separator.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    const PROJECT_DIR: &str = "$PROJECT_DIR$";

    #[fixture]
    fn composer() -> PathComposer {
        PathComposer::new('/', PROJECT_DIR)
    }

    #[rstest]
    fn prefix_project_root_does_not_double_separator(composer: PathComposer) {
        assert_eq!(
            composer.prefix_project_root("/home/user/proj/cmd/server"),
            "$PROJECT_DIR$/home/user/proj/cmd/server"
        );
    }

    #[rstest]
    fn prefix_project_root_relative_dir(composer: PathComposer) {
        assert_eq!(
            composer.prefix_project_root("cmd/server"),
            "$PROJECT_DIR$/cmd/server"
        );
    }

    #[rstest]
    #[case("/home/user/proj", "/home/user/proj/myapp/cmd/server")]
    #[case("/home/user/proj/", "/home/user/proj/myapp/cmd/server")]
    #[case("/home/user/proj//", "/home/user/proj//myapp/cmd/server")]
    #[case("", "/myapp/cmd/server")]
    fn package_path_trims_one_trailing_separator(
        composer: PathComposer,
        #[case] root: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(composer.package_path(root, "myapp", "cmd/server"), expected);
    }

    #[rstest]
    fn package_path_joins_absolute_working_dir_literally(composer: PathComposer) {
        assert_eq!(
            composer.package_path("/home/user/proj", "myapp", "/home/user/proj/cmd/server"),
            "/home/user/proj/myapp//home/user/proj/cmd/server"
        );
    }

    #[rstest]
    #[case("root", "mod", "dir")]
    #[case("a/b", "c/d", "e/f")]
    #[case("", "", "")]
    fn package_path_inserts_exactly_two_separators(
        composer: PathComposer,
        #[case] root: &str,
        #[case] module: &str,
        #[case] dir: &str,
    ) {
        let joined = composer.package_path(root, module, dir);
        let count = |s: &str| s.matches('/').count();
        assert_eq!(count(&joined), count(root) + count(module) + count(dir) + 2);
    }

    #[test]
    fn custom_separator_and_placeholder() {
        let composer = PathComposer::new('\\', "%ROOT%");
        assert_eq!(composer.prefix_project_root(r"cmd\app"), r"%ROOT%\cmd\app");
        assert_eq!(
            composer.package_path(r"C:\proj\", "svc", r"cmd\app"),
            r"C:\proj\svc\cmd\app"
        );
    }
}
