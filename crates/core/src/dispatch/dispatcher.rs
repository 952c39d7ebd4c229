use crate::{
    command::{CommandArtifact, DebugConfiguration},
    dispatch::{DebugSessionStarter, TerminalOptions, TerminalProvider},
    error::Result,
    types::WorkspaceFolder,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Sends built artifacts to a terminal or a debug host
///
/// Dispatch is fire-and-forget: the returned `Result` covers the hand-off to
/// the capability only, never the outcome of the test process.
#[derive(Clone)]
pub struct ExecutionDispatcher {
    terminals: Arc<dyn TerminalProvider>,
    debugger: Arc<dyn DebugSessionStarter>,
}

impl ExecutionDispatcher {
    pub fn new(
        terminals: Arc<dyn TerminalProvider>,
        debugger: Arc<dyn DebugSessionStarter>,
    ) -> Self {
        Self { terminals, debugger }
    }

    /// Run `command` in the workspace terminal with `env` injected
    pub fn dispatch_run(
        &self,
        root: &WorkspaceFolder,
        command: &str,
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        let options = TerminalOptions { env: env.clone() };
        let terminal = self.terminals.get(&options, root)?;

        info!("Running in terminal for {}: {}", root.name, command);
        terminal.send_text(command, true)?;
        terminal.show(true);
        Ok(())
    }

    /// Start a debug session for `configuration` in the workspace
    pub fn dispatch_debug(
        &self,
        root: &WorkspaceFolder,
        configuration: &DebugConfiguration,
    ) -> Result<()> {
        info!(
            "Starting debug session '{}' for {}",
            configuration.name, root.name
        );
        self.debugger.start(root, configuration)
    }

    pub fn dispatch(
        &self,
        root: &WorkspaceFolder,
        artifact: &CommandArtifact,
        env: &BTreeMap<String, String>,
    ) -> Result<()> {
        match artifact {
            CommandArtifact::Run(command) => self.dispatch_run(root, command, env),
            CommandArtifact::Debug(configuration) => self.dispatch_debug(root, configuration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{RecordingDebugStarter, RecordingTerminalProvider, TerminalEvent};

    fn dispatcher() -> (
        ExecutionDispatcher,
        Arc<RecordingTerminalProvider>,
        Arc<RecordingDebugStarter>,
    ) {
        let terminals = Arc::new(RecordingTerminalProvider::new());
        let debugger = Arc::new(RecordingDebugStarter::new());
        let dispatcher = ExecutionDispatcher::new(terminals.clone(), debugger.clone());
        (dispatcher, terminals, debugger)
    }

    #[test]
    fn test_dispatch_run_acquires_sends_and_shows() {
        let (dispatcher, terminals, debugger) = dispatcher();
        let root = WorkspaceFolder::from_path("/proj");
        let env = BTreeMap::from([("CI".to_string(), "true".to_string())]);

        dispatcher.dispatch_run(&root, "echo hi", &env).unwrap();

        assert_eq!(
            terminals.events(),
            vec![
                TerminalEvent::Acquired {
                    scope: root,
                    env,
                },
                TerminalEvent::SentText {
                    text: "echo hi".to_string(),
                    execute: true,
                },
                TerminalEvent::Shown {
                    preserve_focus: true,
                },
            ]
        );
        assert!(debugger.sessions().is_empty());
    }

    #[test]
    fn test_dispatch_debug_hands_configuration_to_starter() {
        let (dispatcher, terminals, debugger) = dispatcher();
        let root = WorkspaceFolder::from_path("/proj");
        let configuration = DebugConfiguration::new(vec!["test".to_string()], BTreeMap::new());

        dispatcher.dispatch_debug(&root, &configuration).unwrap();

        assert_eq!(debugger.sessions(), vec![(root, configuration)]);
        assert!(terminals.events().is_empty());
    }

    #[test]
    fn test_dispatch_routes_by_artifact() {
        let (dispatcher, terminals, debugger) = dispatcher();
        let root = WorkspaceFolder::from_path("/proj");

        dispatcher
            .dispatch(&root, &CommandArtifact::Run("ls".to_string()), &BTreeMap::new())
            .unwrap();
        dispatcher
            .dispatch(
                &root,
                &CommandArtifact::Debug(DebugConfiguration::new(vec![], BTreeMap::new())),
                &BTreeMap::new(),
            )
            .unwrap();

        assert_eq!(terminals.sent_commands(), vec!["ls"]);
        assert_eq!(debugger.sessions().len(), 1);
    }
}
