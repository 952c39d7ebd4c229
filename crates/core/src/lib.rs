//! react-runner - Run or debug a single react-scripts test case
//!
//! This crate provides functionality to:
//! - Build the `react-scripts test` shell command for one named test
//! - Build the launch configuration a debug host needs to debug that test
//! - Hand either artifact to a terminal or a debug session starter
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod runner;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::{CommandArtifact, DebugConfiguration, TestCommandBuilder};
pub use config::{ConfigurationProvider, RunnerConfig};
pub use dispatch::{DebugSessionStarter, ExecutionDispatcher, Terminal, TerminalProvider};
pub use runner::{ReactScriptsRunner, TestRunner};
