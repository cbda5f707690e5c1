//! # Dependency Source Resolvers
//!
//! This module implements the three strategies for sourcing inter-project
//! dependency edges and the graph construction that turns them into a
//! dependency-ordered project list.
//!
//! ## Strategies
//!
//! - **None**: no configuration-supplied edges; the order degenerates to the
//!   alphabetical project order.
//! - **Static**: edges declared under the `dependencies` mapping in the
//!   workspace configuration.
//! - **Command**: one external command or script invocation per project,
//!   whose result lines are interpreted as dependency paths relative to the
//!   workspace root.
//!
//! Exactly one strategy is active per run, selected once at
//! configuration-load time by [`DependencySource::from_config`].
//!
//! ## Graph Construction
//!
//! [`dependency_order`] iterates the alphabetical project list in reverse,
//! adds a self-edge for each project so that isolated projects still appear
//! in the output, then adds one edge per declared dependency. The resulting
//! topological order is filtered to the enumerated project set: a dependency
//! path that is not a known project still constrains ordering through label
//! identity but never appears in the returned list.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::config::{CommandLanguage, Config};
use crate::error::{Error, Result};
use crate::graph::LabeledGraph;

/// The configured strategy for sourcing dependency edges.
///
/// A closed set selected once per workspace construction; each variant
/// carries only the data its strategy needs.
#[derive(Debug, Clone)]
pub enum DependencySource {
    /// No dependency information; only self-edges are added.
    None,
    /// Dependencies declared statically in the configuration, keyed by
    /// relative project path.
    Static(std::collections::BTreeMap<String, Vec<String>>),
    /// Dependencies produced by a per-project command invocation.
    Command(DependencyCommand),
}

impl DependencySource {
    /// Select the dependency-sourcing strategy for a loaded configuration.
    ///
    /// Fails with [`Error::ConfigConflict`] if both `dependencies` and
    /// `dependency-command` are present. This runs before any project
    /// enumeration or graph work.
    pub fn from_config(config: &Config) -> Result<Self> {
        match (&config.dependencies, &config.dependency_command) {
            (Some(_), Some(_)) => Err(Error::ConfigConflict),
            (Some(dependencies), None) => Ok(Self::Static(dependencies.clone())),
            (None, Some(command)) => Ok(Self::Command(DependencyCommand {
                language: command.language,
                script: command.script.clone(),
                preamble: config.lua_preamble.clone(),
            })),
            (None, None) => Ok(Self::None),
        }
    }

    /// Short human-readable name of the strategy, used by `gitws info`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Static(_) => "static",
            Self::Command(_) => "command",
        }
    }

    /// Produce the dependency paths of `project_dir`, resolved against the
    /// workspace root.
    fn dependencies_for(&self, root: &Path, project_dir: &Path) -> Result<Vec<PathBuf>> {
        match self {
            Self::None => Ok(Vec::new()),
            Self::Static(dependencies) => {
                let relative = project_dir
                    .strip_prefix(root)
                    .unwrap_or(project_dir)
                    .to_string_lossy();
                Ok(dependencies
                    .get(relative.as_ref())
                    .map(|deps| deps.iter().map(|d| root.join(d)).collect())
                    .unwrap_or_default())
            }
            Self::Command(command) => {
                let deps = command.run(project_dir)?;
                debug!(
                    "dependency command for {} produced {:?}",
                    project_dir.display(),
                    deps
                );
                Ok(deps.iter().map(|d| root.join(d)).collect())
            }
        }
    }
}

/// A per-project dependency command, as selected from the configuration.
#[derive(Debug, Clone)]
pub struct DependencyCommand {
    language: CommandLanguage,
    script: String,
    preamble: Option<String>,
}

impl DependencyCommand {
    /// Invoke the command for one project and return its dependency paths,
    /// relative to the workspace root.
    ///
    /// Blocks until the command completes; there is no timeout.
    pub fn run(&self, project_dir: &Path) -> Result<Vec<String>> {
        match self.language {
            CommandLanguage::Shell => self.run_shell(project_dir),
            CommandLanguage::Lua => self.run_lua(project_dir),
        }
    }

    /// Run the script through the system shell with the project directory as
    /// the process working directory and parse captured stdout: lines are
    /// trimmed, and blank lines and leading-`#` comment lines are discarded.
    fn run_shell(&self, project_dir: &Path) -> Result<Vec<String>> {
        let output = shell_command(&self.script)
            .current_dir(project_dir)
            .output()
            .map_err(|e| Error::DependencyCommand {
                project_dir: project_dir.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::DependencyCommand {
                project_dir: project_dir.to_path_buf(),
                message: match output.status.code() {
                    Some(code) => format!("exited with status {}: {}", code, stderr.trim()),
                    None => format!("terminated by signal: {}", stderr.trim()),
                },
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| Error::DependencyCommand {
            project_dir: project_dir.to_path_buf(),
            message: format!("produced non-UTF-8 output: {}", e),
        })?;

        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }

    /// Evaluate the script in the embedded Lua interpreter with the project
    /// directory as the current working directory. The script must return a
    /// sequence of strings; the optional `lua-preamble` is prepended first.
    fn run_lua(&self, project_dir: &Path) -> Result<Vec<String>> {
        let chunk = match &self.preamble {
            Some(preamble) => format!("{}\n\n{}", preamble, self.script),
            None => self.script.clone(),
        };

        // The guard restores the saved working directory on every exit path,
        // including an evaluation error.
        let _working_dir = WorkingDir::change(project_dir)?;

        let lua = mlua::Lua::new();
        lua.load(&chunk)
            .eval::<Vec<String>>()
            .map_err(|e| Error::DependencyCommand {
                project_dir: project_dir.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Build a shell invocation for `script` on the current platform.
#[cfg(unix)]
fn shell_command(script: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(script);
    command
}

/// Build a shell invocation for `script` on the current platform.
#[cfg(windows)]
fn shell_command(script: &str) -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg(script);
    command
}

/// Scoped change of the process-wide current working directory.
///
/// The previous directory is captured on construction and restored when the
/// guard is dropped, so the change cannot leak across sequential dependency
/// invocations even when the scripted body fails.
struct WorkingDir {
    saved: PathBuf,
}

impl WorkingDir {
    fn change(dir: &Path) -> Result<Self> {
        let saved = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { saved })
    }
}

impl Drop for WorkingDir {
    fn drop(&mut self) {
        // Nothing sensible to do if the saved directory vanished.
        let _ = env::set_current_dir(&self.saved);
    }
}

/// Compute the dependency-ordered project list.
///
/// Iterates `projects_alpha` in reverse, adds a self-edge per project, adds
/// one edge per dependency produced by `source`, extracts a topological
/// order, and filters it to the enumerated project set. With no dependency
/// information the result is the alphabetical order.
pub fn dependency_order(
    source: &DependencySource,
    root: &Path,
    projects_alpha: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let mut graph = LabeledGraph::new();
    for project_dir in projects_alpha.iter().rev() {
        graph.add_edge(project_dir, project_dir);
        for dep in source.dependencies_for(root, project_dir)? {
            graph.add_edge(&dep, project_dir);
        }
    }

    let known: HashSet<&PathBuf> = projects_alpha.iter().collect();
    Ok(graph
        .topo_sort()?
        .into_iter()
        .filter(|p| known.contains(p))
        .collect())
}
