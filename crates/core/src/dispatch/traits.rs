//! Capabilities supplied by the host that runs tests

use crate::{command::DebugConfiguration, error::Result, types::WorkspaceFolder};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Options used when acquiring a terminal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalOptions {
    pub env: BTreeMap<String, String>,
}

/// A terminal that commands can be typed into
pub trait Terminal: Send + Sync {
    /// Type `text` into the terminal, running it when `execute` is set
    fn send_text(&self, text: &str, execute: bool) -> Result<()>;

    /// Bring the terminal into view
    fn show(&self, preserve_focus: bool);
}

/// Hands out terminals scoped to a workspace
///
/// The provider owns terminal lifetimes and may reuse one terminal per
/// workspace across calls.
pub trait TerminalProvider: Send + Sync {
    fn get(&self, options: &TerminalOptions, scope: &WorkspaceFolder) -> Result<Arc<dyn Terminal>>;
}

/// Starts a debug session from a launch configuration
///
/// Failures after the hand-off (a missing runtime executable, say) are
/// reported by the debug host itself.
pub trait DebugSessionStarter: Send + Sync {
    fn start(&self, scope: &WorkspaceFolder, configuration: &DebugConfiguration) -> Result<()>;
}
