use anyhow::{Context, Result};
use react_runner_core::WorkspaceFolder;
use std::path::PathBuf;

/// Resolve the workspace a command runs against
///
/// Defaults to the current directory. The path must exist.
pub fn resolve_workspace(root: Option<&str>) -> Result<WorkspaceFolder> {
    let path = match root {
        Some(root) => PathBuf::from(root),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let path = path
        .canonicalize()
        .with_context(|| format!("Workspace root {} does not exist", path.display()))?;

    Ok(WorkspaceFolder::from_path(path))
}
