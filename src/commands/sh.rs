//! # Sh Command Implementation
//!
//! This module implements the `sh` subcommand, which runs a shell command
//! line in every project directory: the arguments are joined into a single
//! string and handed to the system shell (`sh -c` on Unix, `cmd /C` on
//! Windows), so pipes, globs, and `&&` chains work as typed (subject to the
//! caller's own shell quoting).

use anyhow::Result;
use clap::Args;

use gitws::output::OutputConfig;

use super::helpers::{run_in_projects, workspace_from_cwd, TraversalOrder};

/// Run a shell command line in each project directory
#[derive(Args, Debug)]
pub struct ShArgs {
    /// Order of project traversal.
    #[arg(long, value_enum, default_value = "topo")]
    pub order: TraversalOrder,

    /// Continue with the remaining projects when the command fails for one.
    #[arg(long)]
    pub keep_going: bool,

    /// Shell command line to run in each project directory.
    #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Build the full argument vector for one project invocation.
#[cfg(unix)]
fn shell_argv(command: Vec<String>) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), command.join(" ")]
}

/// Build the full argument vector for one project invocation.
#[cfg(windows)]
fn shell_argv(command: Vec<String>) -> Vec<String> {
    vec!["cmd".to_string(), "/C".to_string(), command.join(" ")]
}

/// Execute the `sh` command.
pub fn execute(args: ShArgs, output: &OutputConfig) -> Result<()> {
    let workspace = workspace_from_cwd()?;
    let argv = shell_argv(args.command);
    run_in_projects(&workspace, args.order, args.keep_going, output, &argv)
}
