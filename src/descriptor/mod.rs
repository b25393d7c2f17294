mod run_configuration;
mod xml_writer;

pub use run_configuration::{
    COMPONENT_NAME, CONFIGURATION_TYPE, RunConfigurationDescriptor, SerializationError,
};
