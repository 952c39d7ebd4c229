use anyhow::Result;
use react_runner_core::{ConfigurationProvider, config::FileConfigurationProvider};

use crate::utils::resolve_workspace;

pub fn config_command(root: Option<&str>) -> Result<()> {
    let workspace = resolve_workspace(root)?;
    let provider = FileConfigurationProvider::discover(&workspace.path)?;

    match provider.source() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: none (using defaults)"),
    }
    println!(
        "{}",
        serde_json::to_string_pretty(&provider.configuration())?
    );

    Ok(())
}
