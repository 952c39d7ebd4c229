//! Capabilities that record interactions instead of performing them

use crate::{
    command::DebugConfiguration,
    dispatch::{DebugSessionStarter, Terminal, TerminalOptions, TerminalProvider},
    error::Result,
    types::WorkspaceFolder,
};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One interaction with a recorded terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    Acquired {
        scope: WorkspaceFolder,
        env: BTreeMap<String, String>,
    },
    SentText {
        text: String,
        execute: bool,
    },
    Shown {
        preserve_focus: bool,
    },
}

#[derive(Debug, Default)]
pub struct RecordingTerminalProvider {
    events: Arc<Mutex<Vec<TerminalEvent>>>,
}

impl RecordingTerminalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<TerminalEvent> {
        lock(&self.events).clone()
    }

    /// Text sent with `execute` set, in order
    pub fn sent_commands(&self) -> Vec<String> {
        lock(&self.events)
            .iter()
            .filter_map(|event| match event {
                TerminalEvent::SentText {
                    text,
                    execute: true,
                } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl TerminalProvider for RecordingTerminalProvider {
    fn get(&self, options: &TerminalOptions, scope: &WorkspaceFolder) -> Result<Arc<dyn Terminal>> {
        lock(&self.events).push(TerminalEvent::Acquired {
            scope: scope.clone(),
            env: options.env.clone(),
        });
        Ok(Arc::new(RecordingTerminal {
            events: self.events.clone(),
        }))
    }
}

struct RecordingTerminal {
    events: Arc<Mutex<Vec<TerminalEvent>>>,
}

impl Terminal for RecordingTerminal {
    fn send_text(&self, text: &str, execute: bool) -> Result<()> {
        lock(&self.events).push(TerminalEvent::SentText {
            text: text.to_string(),
            execute,
        });
        Ok(())
    }

    fn show(&self, preserve_focus: bool) {
        lock(&self.events).push(TerminalEvent::Shown { preserve_focus });
    }
}

#[derive(Debug, Default)]
pub struct RecordingDebugStarter {
    sessions: Mutex<Vec<(WorkspaceFolder, DebugConfiguration)>>,
}

impl RecordingDebugStarter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> Vec<(WorkspaceFolder, DebugConfiguration)> {
        lock(&self.sessions).clone()
    }
}

impl DebugSessionStarter for RecordingDebugStarter {
    fn start(&self, scope: &WorkspaceFolder, configuration: &DebugConfiguration) -> Result<()> {
        lock(&self.sessions).push((scope.clone(), configuration.clone()));
        Ok(())
    }
}
