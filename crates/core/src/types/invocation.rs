use serde::{Deserialize, Serialize};

use super::WorkspaceFolder;

/// Whether a test is launched in a terminal or under a debugger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    Run,
    Debug,
}

/// A request to run or debug one named test case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub root: WorkspaceFolder,
    /// Absolute or relative path of the test file
    pub source_path: String,
    /// Display name of the test, unescaped
    pub test_name: String,
}

impl InvocationRequest {
    pub fn new(
        root: WorkspaceFolder,
        source_path: impl Into<String>,
        test_name: impl Into<String>,
    ) -> Self {
        Self {
            root,
            source_path: source_path.into(),
            test_name: test_name.into(),
        }
    }
}
