//! # Git Command Implementation
//!
//! This module implements the `git` subcommand, a convenience adapter over
//! `run` that prefixes the argument vector with `git`: `gitws git status -s`
//! runs `git status -s` in every project directory.

use anyhow::Result;
use clap::Args;

use gitws::output::OutputConfig;

use super::helpers::{run_in_projects, workspace_from_cwd, TraversalOrder};

/// Run a Git command in each project directory
#[derive(Args, Debug)]
pub struct GitArgs {
    /// Order of project traversal.
    #[arg(long, value_enum, default_value = "topo")]
    pub order: TraversalOrder,

    /// Continue with the remaining projects when the command fails for one.
    #[arg(long)]
    pub keep_going: bool,

    /// Git subcommand and arguments to run in each project directory.
    #[arg(required = true, trailing_var_arg = true, value_name = "ARGS")]
    pub command: Vec<String>,
}

/// Build the full argument vector for one project invocation.
fn git_argv(command: Vec<String>) -> Vec<String> {
    let mut argv = Vec::with_capacity(command.len() + 1);
    argv.push("git".to_string());
    argv.extend(command);
    argv
}

/// Execute the `git` command.
pub fn execute(args: GitArgs, output: &OutputConfig) -> Result<()> {
    let workspace = workspace_from_cwd()?;
    let argv = git_argv(args.command);
    run_in_projects(&workspace, args.order, args.keep_going, output, &argv)
}
