use crate::{command::DebugConfiguration, types::InvocationMode};

/// What a build produces: a terminal command or a debug launch configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArtifact {
    Run(String),
    Debug(DebugConfiguration),
}

impl CommandArtifact {
    pub fn mode(&self) -> InvocationMode {
        match self {
            CommandArtifact::Run(_) => InvocationMode::Run,
            CommandArtifact::Debug(_) => InvocationMode::Debug,
        }
    }

    /// The shell command, if this is a run artifact
    pub fn as_shell_command(&self) -> Option<&str> {
        match self {
            CommandArtifact::Run(command) => Some(command),
            CommandArtifact::Debug(_) => None,
        }
    }

    /// The launch configuration, if this is a debug artifact
    pub fn as_debug_configuration(&self) -> Option<&DebugConfiguration> {
        match self {
            CommandArtifact::Run(_) => None,
            CommandArtifact::Debug(configuration) => Some(configuration),
        }
    }
}
