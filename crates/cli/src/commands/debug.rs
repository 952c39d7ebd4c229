use anyhow::{Context, Result};
use react_runner_core::{
    ReactScriptsRunner, TestRunner,
    config::FileConfigurationProvider,
    dispatch::{LaunchFileDebugStarter, ShellTerminalProvider},
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::utils::resolve_workspace;

pub fn debug_command(
    file: &str,
    test_name: &str,
    root: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let workspace = resolve_workspace(root)?;
    debug!("Debugging {:?} from {} in {:?}", test_name, file, workspace.path);

    let starter = match output {
        Some(path) => LaunchFileDebugStarter::to_file(path),
        None => LaunchFileDebugStarter::stdout(),
    };

    let runner = ReactScriptsRunner::new(
        Arc::new(FileConfigurationProvider::discover(&workspace.path)?),
        Arc::new(ShellTerminalProvider::new()),
        Arc::new(starter),
    );

    runner
        .debug_test(&workspace, file, test_name)
        .with_context(|| format!("Failed to start debugging {:?} in {}", test_name, file))
}
