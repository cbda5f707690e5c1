//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which displays information
//! about the discovered workspace.
//!
//! ## Functionality
//!
//! - **Workspace Overview**: Displays the workspace root, the configuration
//!   file path (or its absence), and the active dependency source.
//! - **Project Listings**: Shows the project directories in both
//!   alphabetical and dependency order.
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use gitws::output::OutputConfig;
use gitws::workspace::Workspace;

use super::helpers::workspace_from_cwd;

/// Show workspace information
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Workspace root directory to inspect instead of discovering one from
    /// the current directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, output: &OutputConfig) -> Result<()> {
    let workspace = match &args.root {
        Some(root) => Workspace::from_root(root)?,
        None => workspace_from_cwd()?,
    };

    display_info(&workspace, output);
    Ok(())
}

/// Display the workspace information.
fn display_info(workspace: &Workspace, output: &OutputConfig) {
    println!(
        "Workspace root: {}",
        output.header(&workspace.root().display().to_string())
    );
    match workspace.config_path() {
        Some(path) => println!(
            "Workspace configuration file: {}",
            output.header(&path.display().to_string())
        ),
        None => println!("Workspace configuration file: {}", output.header("(none)")),
    }
    println!(
        "Dependency source: {}",
        output.header(workspace.dependency_source().kind())
    );

    println!("\nProject directories (alpha order):");
    for project_dir in workspace.projects_alpha() {
        println!("  {}", output.header(&project_dir.display().to_string()));
    }

    println!("\nProject directories (dependency order):");
    for project_dir in workspace.projects_topo() {
        println!("  {}", output.header(&project_dir.display().to_string()));
    }
}
