//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which prints the workspace's
//! project directories, one per line, in the selected traversal order.
//!
//! The output is plain (one absolute path per line, no decoration) so that
//! it composes with shell pipelines:
//!
//! ```bash
//! gitws ls | xargs -I{} du -sh {}
//! ```
//!
//! This command is a safe, read-only operation that does not modify any
//! files.

use anyhow::Result;
use clap::Args;

use super::helpers::{project_dirs, workspace_from_cwd, TraversalOrder};

/// List project directories
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Order of project traversal.
    #[arg(long, value_enum, default_value = "topo")]
    pub order: TraversalOrder,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs) -> Result<()> {
    let workspace = workspace_from_cwd()?;
    for project_dir in project_dirs(&workspace, args.order) {
        println!("{}", project_dir.display());
    }
    Ok(())
}
