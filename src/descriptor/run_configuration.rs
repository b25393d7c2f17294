use snafu::{ResultExt, Snafu};

use super::xml_writer::XmlWriter;

pub const COMPONENT_NAME: &str = "ProjectRunConfigurationManager";
pub const CONFIGURATION_TYPE: &str = "GoApplicationRunConfiguration";
const FACTORY_NAME: &str = "Go Application";
const KIND_PACKAGE: &str = "PACKAGE";
const METHOD_MARKER: &str = "2";

const XML_VERSION: &str = "1.0";
const XML_ENCODING: &str = "UTF-8";

/// Go application run configuration, laid out the way the IDE stores it under
/// `.idea/runConfigurations`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfigurationDescriptor {
    pub is_default: bool,
    pub name: String,
    pub configuration_type: String,
    pub factory_name: String,
    pub folder_name: String,
    pub module: String,
    pub working_directory: String,
    pub kind: String,
    pub package: String,
    pub file_path: String,
    pub method: String,
    pub directory: String,
}

impl RunConfigurationDescriptor {
    /// Builds a package-kind Go application configuration. `full_dir_path` is
    /// used both as the working directory and as the file path.
    pub fn go_application(
        name: impl Into<String>,
        folder_name: impl Into<String>,
        module: impl Into<String>,
        full_dir_path: impl Into<String>,
        package: impl Into<String>,
        project_dir: impl Into<String>,
    ) -> Self {
        let full_dir_path = full_dir_path.into();
        Self {
            is_default: false,
            name: name.into(),
            configuration_type: CONFIGURATION_TYPE.to_string(),
            factory_name: FACTORY_NAME.to_string(),
            folder_name: folder_name.into(),
            module: module.into(),
            working_directory: full_dir_path.clone(),
            kind: KIND_PACKAGE.to_string(),
            package: package.into(),
            file_path: full_dir_path,
            method: METHOD_MARKER.to_string(),
            directory: project_dir.into(),
        }
    }

    /// Renders the full document, XML declaration included.
    pub fn to_xml(&self) -> Result<String, SerializationError> {
        self.write_document().context(FormatSnafu {
            name: self.name.clone(),
        })
    }

    fn write_document(&self) -> Result<String, std::fmt::Error> {
        let is_default = self.is_default.to_string();
        let mut writer = XmlWriter::new();

        writer.declaration(XML_VERSION, XML_ENCODING)?;
        writer.open("component", &[("name", COMPONENT_NAME)])?;
        writer.open(
            "configuration",
            &[
                ("default", is_default.as_str()),
                ("name", self.name.as_str()),
                ("type", self.configuration_type.as_str()),
                ("factoryName", self.factory_name.as_str()),
                ("folderName", self.folder_name.as_str()),
            ],
        )?;
        writer.empty("module", &[("name", self.module.as_str())])?;
        writer.empty("working_directory", &[("value", self.working_directory.as_str())])?;
        writer.empty("kind", &[("value", self.kind.as_str())])?;
        writer.empty("package", &[("value", self.package.as_str())])?;
        writer.empty("filePath", &[("value", self.file_path.as_str())])?;
        writer.empty("method", &[("v", self.method.as_str())])?;
        writer.empty("directory", &[("value", self.directory.as_str())])?;
        writer.close("configuration")?;
        writer.close("component")?;

        Ok(writer.finish())
    }
}

#[derive(Debug, Snafu)]
pub enum SerializationError {
    #[snafu(display("Failed to render run configuration '{}' as XML", name))]
    FormatError {
        name: String,
        source: std::fmt::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_descriptor() -> RunConfigurationDescriptor {
        RunConfigurationDescriptor::go_application(
            "cmd/server",
            "proj",
            "myapp",
            "$PROJECT_DIR$/cmd/server",
            "/home/user/proj/myapp/cmd/server",
            "$PROJECT_DIR$",
        )
    }

    #[test]
    fn go_application_fills_schema_constants() {
        let descriptor = server_descriptor();
        assert!(!descriptor.is_default);
        assert_eq!(descriptor.configuration_type, "GoApplicationRunConfiguration");
        assert_eq!(descriptor.factory_name, "Go Application");
        assert_eq!(descriptor.kind, "PACKAGE");
        assert_eq!(descriptor.method, "2");
        assert_eq!(descriptor.directory, "$PROJECT_DIR$");
        assert_eq!(descriptor.file_path, descriptor.working_directory);
    }

    #[test]
    fn to_xml_matches_expected_layout() {
        let xml = server_descriptor().to_xml().expect("Failed to serialize");
        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<component name="ProjectRunConfigurationManager">
  <configuration default="false" name="cmd/server" type="GoApplicationRunConfiguration" factoryName="Go Application" folderName="proj">
    <module name="myapp"></module>
    <working_directory value="$PROJECT_DIR$/cmd/server"></working_directory>
    <kind value="PACKAGE"></kind>
    <package value="/home/user/proj/myapp/cmd/server"></package>
    <filePath value="$PROJECT_DIR$/cmd/server"></filePath>
    <method v="2"></method>
    <directory value="$PROJECT_DIR$"></directory>
  </configuration>
</component>"#;
        assert_eq!(xml, expected);
    }

    #[test]
    fn to_xml_is_deterministic() {
        let first = server_descriptor().to_xml().unwrap();
        let second = server_descriptor().to_xml().unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn to_xml_escapes_values() {
        let descriptor = RunConfigurationDescriptor::go_application(
            "a&b/<c>",
            "\"quoted\"",
            "m",
            "d",
            "p",
            "$PROJECT_DIR$",
        );
        let xml = descriptor.to_xml().unwrap();
        assert!(xml.contains(r#"name="a&amp;b/&lt;c&gt;""#));
        assert!(xml.contains(r#"folderName="&#34;quoted&#34;""#));
    }

    #[test]
    fn to_xml_contains_cleanup_markers() {
        let xml = server_descriptor().to_xml().unwrap();
        assert!(xml.contains(COMPONENT_NAME));
        assert!(xml.contains(CONFIGURATION_TYPE));
    }
}
