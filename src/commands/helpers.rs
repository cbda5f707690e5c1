//! Shared helpers for the per-project command loop.
//!
//! The `run`, `git`, and `sh` subcommands all reduce to the same shape: turn
//! the parsed arguments into an argument vector, then execute that vector in
//! every project directory in the selected order, aggregating per-project
//! success and failure. The loop lives here; the subcommands only differ in
//! how they build the vector.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use log::debug;

use gitws::output::OutputConfig;
use gitws::workspace::Workspace;

/// Project traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum TraversalOrder {
    /// Dependency order: every project after its dependencies
    #[default]
    Topo,
    /// Alphabetical order
    Alpha,
}

/// Discover the workspace containing the current directory.
pub fn workspace_from_cwd() -> Result<Workspace> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    Ok(Workspace::find(&cwd)?)
}

/// Select the project list for `order`.
pub fn project_dirs(workspace: &Workspace, order: TraversalOrder) -> &[PathBuf] {
    match order {
        TraversalOrder::Topo => workspace.projects_topo(),
        TraversalOrder::Alpha => workspace.projects_alpha(),
    }
}

/// Execute `argv` in every project directory of `workspace` in the given
/// order, streaming the child's output to the terminal.
///
/// With `keep_going` the loop visits every project and reports the failure
/// total at the end; otherwise the first failure aborts the loop. Either
/// way, any failed project makes the returned result an error so that the
/// process exits non-zero.
pub fn run_in_projects(
    workspace: &Workspace,
    order: TraversalOrder,
    keep_going: bool,
    output: &OutputConfig,
    argv: &[String],
) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| anyhow!("No command given"))?;

    let project_dirs = project_dirs(workspace, order);
    let mut failure_count = 0usize;

    for project_dir in project_dirs {
        let name = project_dir.display().to_string();
        println!("{}", output.header(&format!("Project {}", name)));
        debug!("spawning {:?} {:?} in {}", program, args, name);

        let status = Command::new(program)
            .args(args)
            .current_dir(project_dir)
            .status()
            .with_context(|| format!("Failed to run {} in {}", program, name))?;

        if status.success() {
            println!(
                "{}\n",
                output.success(&format!("Command succeeded for project {}", name))
            );
            continue;
        }

        failure_count += 1;
        let message = match status.code() {
            Some(code) => format!("Command failed for project {} with status {}", name, code),
            None => format!("Command terminated by signal for project {}", name),
        };
        if keep_going {
            println!("{}\n", output.warning(&message));
        } else {
            println!("{}\n", output.failure(&message));
            bail!("Command failed for project {}", name);
        }
    }

    if failure_count > 0 {
        println!(
            "{}",
            output.failure("Command failed for one or more projects")
        );
        bail!(
            "Command failed for {} of {} projects",
            failure_count,
            project_dirs.len()
        );
    }

    println!(
        "{}",
        output.success("Command succeeded for all projects")
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn workspace_with_projects(names: &[&str]) -> (TempDir, Workspace) {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::create_dir_all(temp.path().join(name).join(".git")).unwrap();
        }
        let workspace = Workspace::from_root(temp.path()).unwrap();
        (temp, workspace)
    }

    #[test]
    fn test_project_dirs_selects_order() {
        let (temp, workspace) = workspace_with_projects(&["a", "b"]);
        assert_eq!(
            project_dirs(&workspace, TraversalOrder::Alpha),
            &[temp.path().join("a"), temp.path().join("b")]
        );
        assert_eq!(
            project_dirs(&workspace, TraversalOrder::Topo),
            workspace.projects_topo()
        );
    }

    #[test]
    fn test_run_in_projects_requires_a_command() {
        let (_temp, workspace) = workspace_with_projects(&[]);
        let output = OutputConfig { use_color: false };
        let err =
            run_in_projects(&workspace, TraversalOrder::Topo, false, &output, &[]).unwrap_err();
        assert!(err.to_string().contains("No command given"));
    }

    #[test]
    fn test_run_in_projects_success() {
        let (_temp, workspace) = workspace_with_projects(&["a", "b"]);
        let output = OutputConfig { use_color: false };
        let argv = vec!["true".to_string()];
        run_in_projects(&workspace, TraversalOrder::Topo, false, &output, &argv).unwrap();
    }

    #[test]
    fn test_run_in_projects_fail_fast_stops_at_first_failure() {
        let (_temp, workspace) = workspace_with_projects(&["a", "b"]);
        let output = OutputConfig { use_color: false };
        let argv = vec!["false".to_string()];
        let err = run_in_projects(&workspace, TraversalOrder::Topo, false, &output, &argv)
            .unwrap_err();
        assert!(err.to_string().contains("Command failed for project"));
    }

    #[test]
    fn test_run_in_projects_keep_going_reports_total() {
        let (_temp, workspace) = workspace_with_projects(&["a", "b", "c"]);
        let output = OutputConfig { use_color: false };
        let argv = vec!["false".to_string()];
        let err = run_in_projects(&workspace, TraversalOrder::Topo, true, &output, &argv)
            .unwrap_err();
        assert!(err.to_string().contains("3 of 3 projects"));
    }
}
