//! # Run Command Implementation
//!
//! This module implements the `run` subcommand, which executes an arbitrary
//! command in every project directory of the workspace.
//!
//! ## Functionality
//!
//! - **Ordering**: Projects are visited in dependency order by default, or
//!   alphabetically with `--order alpha`.
//! - **Failure policy**: The first failing project aborts the run unless
//!   `--keep-going` is given, in which case every project is visited and the
//!   failures are totalled at the end.
//!
//! The command vector is spawned directly (no shell); use the `sh`
//! subcommand for shell command lines.

use anyhow::Result;
use clap::Args;

use gitws::output::OutputConfig;

use super::helpers::{run_in_projects, workspace_from_cwd, TraversalOrder};

/// Run a command in each project directory
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Order of project traversal.
    #[arg(long, value_enum, default_value = "topo")]
    pub order: TraversalOrder,

    /// Continue with the remaining projects when the command fails for one.
    #[arg(long)]
    pub keep_going: bool,

    /// Command and arguments to run in each project directory.
    #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Execute the `run` command.
pub fn execute(args: RunArgs, output: &OutputConfig) -> Result<()> {
    let workspace = workspace_from_cwd()?;
    run_in_projects(
        &workspace,
        args.order,
        args.keep_going,
        output,
        &args.command,
    )
}
