//! Runner that coordinates configuration, command building, and dispatch

use crate::{
    command::{CommandArtifact, REACT_SCRIPTS_BIN, TestCommandBuilder},
    config::ConfigurationProvider,
    dispatch::{DebugSessionStarter, ExecutionDispatcher, TerminalProvider},
    error::Result,
    types::{InvocationMode, InvocationRequest, WorkspaceFolder},
};
use std::sync::Arc;
use tracing::debug;

/// A test runner that can launch one named test case
pub trait TestRunner: Send + Sync {
    /// Get the name of this runner
    fn name(&self) -> &'static str;

    /// Run the test in a terminal
    fn run_test(&self, root: &WorkspaceFolder, file_name: &str, test_name: &str) -> Result<()>;

    /// Start a debug session for the test
    fn debug_test(&self, root: &WorkspaceFolder, file_name: &str, test_name: &str) -> Result<()>;
}

/// Runs and debugs tests through `react-scripts test`
pub struct ReactScriptsRunner {
    configuration: Arc<dyn ConfigurationProvider>,
    dispatcher: ExecutionDispatcher,
}

impl ReactScriptsRunner {
    pub fn new(
        configuration: Arc<dyn ConfigurationProvider>,
        terminals: Arc<dyn TerminalProvider>,
        debugger: Arc<dyn DebugSessionStarter>,
    ) -> Self {
        Self::with_dispatcher(configuration, ExecutionDispatcher::new(terminals, debugger))
    }

    pub fn with_dispatcher(
        configuration: Arc<dyn ConfigurationProvider>,
        dispatcher: ExecutionDispatcher,
    ) -> Self {
        Self {
            configuration,
            dispatcher,
        }
    }

    pub fn bin_path(&self) -> &'static str {
        REACT_SCRIPTS_BIN
    }

    /// Build the artifact for a test without dispatching it
    pub fn command_for(
        &self,
        root: &WorkspaceFolder,
        file_name: &str,
        test_name: &str,
        mode: InvocationMode,
    ) -> CommandArtifact {
        let request = InvocationRequest::new(root.clone(), file_name, test_name);
        let config = self.configuration.configuration();
        TestCommandBuilder::build(&request, &config, mode)
    }
}

impl TestRunner for ReactScriptsRunner {
    fn name(&self) -> &'static str {
        "react-scripts"
    }

    fn run_test(&self, root: &WorkspaceFolder, file_name: &str, test_name: &str) -> Result<()> {
        let config = self.configuration.configuration();
        let request = InvocationRequest::new(root.clone(), file_name, test_name);

        debug!("Run requested for {:?} in {}", test_name, file_name);
        let command = TestCommandBuilder::build_run_command(&request, &config);
        self.dispatcher
            .dispatch_run(root, &command, &config.environment_variables)
    }

    fn debug_test(&self, root: &WorkspaceFolder, file_name: &str, test_name: &str) -> Result<()> {
        let config = self.configuration.configuration();
        let request = InvocationRequest::new(root.clone(), file_name, test_name);

        debug!("Debug requested for {:?} in {}", test_name, file_name);
        let configuration = TestCommandBuilder::build_debug_configuration(&request, &config);
        self.dispatcher.dispatch_debug(root, &configuration)
    }
}
