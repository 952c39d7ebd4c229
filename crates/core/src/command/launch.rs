//! Launch configuration handed to a debug host

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEBUG_SESSION_NAME: &str = "Debug Test";
pub const LAUNCH_TYPE: &str = "node";
pub const LAUNCH_REQUEST: &str = "launch";
pub const DEBUG_PROTOCOL: &str = "inspector";
pub const DEBUG_CONSOLE: &str = "integratedTerminal";
pub const INTERNAL_CONSOLE_OPTIONS: &str = "neverOpen";
/// `${workspaceFolder}` is resolved by the debug host, never here
pub const RUNTIME_EXECUTABLE: &str = "${workspaceFolder}/node_modules/.bin/react-scripts";
pub const LAUNCH_FILE_VERSION: &str = "0.2.0";

/// A `launch` request for debugging one test under node's inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugConfiguration {
    pub name: String,
    #[serde(rename = "type")]
    pub launch_type: String,
    pub request: String,
    pub args: Vec<String>,
    pub env: BTreeMap<String, String>,
    pub protocol: String,
    pub console: String,
    pub internal_console_options: String,
    pub runtime_executable: String,
}

impl DebugConfiguration {
    /// Create a configuration with the fixed session fields filled in
    pub fn new(args: Vec<String>, env: BTreeMap<String, String>) -> Self {
        Self {
            name: DEBUG_SESSION_NAME.to_string(),
            launch_type: LAUNCH_TYPE.to_string(),
            request: LAUNCH_REQUEST.to_string(),
            args,
            env,
            protocol: DEBUG_PROTOCOL.to_string(),
            console: DEBUG_CONSOLE.to_string(),
            internal_console_options: INTERNAL_CONSOLE_OPTIONS.to_string(),
            runtime_executable: RUNTIME_EXECUTABLE.to_string(),
        }
    }
}

/// The `launch.json` document a configuration is persisted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchFile {
    pub version: String,
    pub configurations: Vec<DebugConfiguration>,
}

impl LaunchFile {
    pub fn new(configurations: Vec<DebugConfiguration>) -> Self {
        Self {
            version: LAUNCH_FILE_VERSION.to_string(),
            configurations,
        }
    }
}

impl From<DebugConfiguration> for LaunchFile {
    fn from(configuration: DebugConfiguration) -> Self {
        Self::new(vec![configuration])
    }
}
