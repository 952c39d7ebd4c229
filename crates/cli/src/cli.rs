use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{config_command, debug_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "react-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single test in a shell
    #[command(visible_alias = "r")]
    Run {
        /// Path to the test file (only its file name is passed to react-scripts)
        file: String,

        /// Name of the test to run, unescaped
        test_name: String,

        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        root: Option<String>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Show how the command was assembled
        #[arg(short, long)]
        verbose: bool,
    },
    /// Emit a debug launch configuration for a single test
    #[command(visible_alias = "d")]
    Debug {
        /// Path to the test file (only its file name is passed to react-scripts)
        file: String,

        /// Name of the test to debug, unescaped
        test_name: String,

        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        root: Option<String>,

        /// Write the launch file here instead of stdout (relative to the root)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the resolved configuration
    Config {
        /// Workspace root (defaults to the current directory)
        #[arg(long)]
        root: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Run {
                file,
                test_name,
                root,
                dry_run,
                verbose,
            } => run_command(&file, &test_name, root.as_deref(), dry_run, verbose),
            Commands::Debug {
                file,
                test_name,
                root,
                output,
            } => debug_command(&file, &test_name, root.as_deref(), output),
            Commands::Config { root } => config_command(root.as_deref()),
        }
    }
}
