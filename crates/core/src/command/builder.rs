use crate::{
    command::{CommandArtifact, DebugConfiguration, format_test_name},
    config::RunnerConfig,
    types::{InvocationMode, InvocationRequest},
    utils::base_name,
};
use tracing::debug;

/// Location of the runner binary, relative to the workspace root
#[cfg(not(windows))]
pub const REACT_SCRIPTS_BIN: &str = "node_modules/.bin/react-scripts";
/// `cmd.exe` reads `/` as a switch, so the path uses backslashes
#[cfg(windows)]
pub const REACT_SCRIPTS_BIN: &str = r"node_modules\.bin\react-scripts";

/// Builds the artifacts that launch a single react-scripts test
///
/// Building is pure: identical inputs always give identical output.
pub struct TestCommandBuilder;

impl TestCommandBuilder {
    pub fn build(
        request: &InvocationRequest,
        config: &RunnerConfig,
        mode: InvocationMode,
    ) -> CommandArtifact {
        match mode {
            InvocationMode::Run => CommandArtifact::Run(Self::build_run_command(request, config)),
            InvocationMode::Debug => {
                CommandArtifact::Debug(Self::build_debug_configuration(request, config))
            }
        }
    }

    /// Build the shell command typed into a terminal
    ///
    /// `additional_arguments` is trusted configuration and is appended raw.
    pub fn build_run_command(request: &InvocationRequest, config: &RunnerConfig) -> String {
        let file_name = base_name(&request.source_path);
        let command = format!(
            "{} test {} {} --no-cache --watchAll=false {}",
            REACT_SCRIPTS_BIN,
            file_name,
            test_name_pattern(&request.test_name),
            config.additional_arguments
        );

        debug!("Built run command for {}: {}", request.source_path, command);
        command
    }

    /// Build the launch configuration handed to a debug host
    pub fn build_debug_configuration(
        request: &InvocationRequest,
        config: &RunnerConfig,
    ) -> DebugConfiguration {
        let mut args = vec![
            "test".to_string(),
            base_name(&request.source_path),
            test_name_pattern(&request.test_name),
            "--runInBand".to_string(),
            "--no-cache".to_string(),
            "--watchAll=false".to_string(),
        ];
        args.extend(split_additional_arguments(&config.additional_arguments));

        debug!("Built debug args for {}: {:?}", request.source_path, args);
        DebugConfiguration::new(args, config.environment_variables.clone())
    }
}

fn test_name_pattern(test_name: &str) -> String {
    format!("--testNamePattern=\"{}\"", format_test_name(test_name))
}

/// Split raw additional arguments into launch args
///
/// Splits on every single space and does not honour quoting, so `""` gives
/// one empty argument and a quoted value containing a space becomes two.
pub fn split_additional_arguments(raw: &str) -> Vec<String> {
    raw.split(' ').map(String::from).collect()
}
