//! Dispatch of built artifacts to terminals and debug hosts

pub mod debug;
pub mod dispatcher;
pub mod recording;
pub mod terminal;
pub mod traits;

// Re-export main types
pub use debug::{LaunchFileDebugStarter, LaunchTarget};
pub use dispatcher::ExecutionDispatcher;
pub use recording::{RecordingDebugStarter, RecordingTerminalProvider, TerminalEvent};
pub use terminal::{ShellTerminal, ShellTerminalProvider};
pub use traits::{DebugSessionStarter, Terminal, TerminalOptions, TerminalProvider};
