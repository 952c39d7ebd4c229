//! Test command and launch configuration generation

pub mod artifact;
pub mod builder;
pub mod launch;
pub mod test_name;

// Re-export commonly used types
pub use artifact::CommandArtifact;
pub use builder::{REACT_SCRIPTS_BIN, TestCommandBuilder, split_additional_arguments};
pub use launch::{DebugConfiguration, LaunchFile};
pub use test_name::format_test_name;
