use anyhow::{Context, Result};
use react_runner_core::{
    ConfigurationProvider, InvocationMode, InvocationRequest, ReactScriptsRunner, TestRunner,
    config::FileConfigurationProvider,
    dispatch::{LaunchFileDebugStarter, ShellTerminalProvider},
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::display::print_command_breakdown;
use crate::utils::resolve_workspace;

pub fn run_command(
    file: &str,
    test_name: &str,
    root: Option<&str>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let workspace = resolve_workspace(root)?;
    debug!("Running {:?} from {} in {:?}", test_name, file, workspace.path);

    let configuration = Arc::new(FileConfigurationProvider::discover(&workspace.path)?);
    let terminals = Arc::new(ShellTerminalProvider::new());
    let runner = ReactScriptsRunner::new(
        configuration.clone(),
        terminals.clone(),
        Arc::new(LaunchFileDebugStarter::stdout()),
    );

    if dry_run {
        let artifact = runner.command_for(&workspace, file, test_name, InvocationMode::Run);
        if let Some(command) = artifact.as_shell_command() {
            println!("{}", command);
        }
        println!("Working directory: {}", workspace.path.display());

        let config = configuration.configuration();
        if !config.environment_variables.is_empty() {
            println!("Environment variables:");
            for (key, value) in &config.environment_variables {
                println!("  {}={}", key, value);
            }
        }

        if verbose {
            let request = InvocationRequest::new(workspace.clone(), file, test_name);
            print_command_breakdown(&request, &config);
        }
        return Ok(());
    }

    runner
        .run_test(&workspace, file, test_name)
        .with_context(|| format!("Failed to run {:?} in {}", test_name, file))?;
    info!("Dispatched {} for {}", runner.name(), test_name);

    if let Some(status) = terminals.wait_all()? {
        if !status.success() {
            std::process::exit(status.code().unwrap_or(1));
        }
    }

    Ok(())
}
