//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the `.gitws.yaml`
//! workspace configuration file, as well as the logic for parsing it.
//!
//! ## Key Components
//!
//! - **`Config`**: The root document. All keys are optional; an entirely
//!   absent file is equivalent to the default configuration.
//!
//! - **`DependencyCommandConfig`**: Describes the external command or script
//!   invoked once per project to list that project's dependencies, together
//!   with the language it is written in.
//!
//! ## Recognized Keys
//!
//! - `excluded-projects`: workspace-root-relative paths of project
//!   directories to skip during enumeration (default: empty).
//! - `dependencies`: a mapping from relative project path to a list of
//!   relative dependency paths (static dependency sourcing).
//! - `dependency-command`: a command invoked per project whose output lines
//!   are the project's dependencies (dynamic dependency sourcing).
//! - `lua-preamble`: source prepended to every `lua` dependency script.
//!
//! `dependencies` and `dependency-command` are mutually exclusive; the
//! conflict is rejected when the dependency source is selected, before any
//! project enumeration or graph work begins.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Root of the `.gitws.yaml` workspace configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Workspace-root-relative paths of project directories to exclude from
    /// enumeration.
    #[serde(default, rename = "excluded-projects")]
    pub excluded_projects: Vec<String>,

    /// Static dependency declarations: relative project path to a list of
    /// relative dependency paths.
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, Vec<String>>>,

    /// Command invoked once per project to produce its dependency list.
    #[serde(default, rename = "dependency-command")]
    pub dependency_command: Option<DependencyCommandConfig>,

    /// Source prepended to every `lua` dependency script before evaluation.
    #[serde(default, rename = "lua-preamble")]
    pub lua_preamble: Option<String>,
}

/// Configuration of the per-project dependency command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyCommandConfig {
    /// Language the script is written in.
    pub language: CommandLanguage,
    /// Script source. For `shell` this is handed to the system shell; for
    /// `lua` it is evaluated in the embedded interpreter and must return a
    /// sequence of strings.
    pub script: String,
}

/// Supported dependency-command languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandLanguage {
    /// The script is run through the system shell and its standard output is
    /// parsed line by line.
    Shell,
    /// The script is evaluated in the embedded Lua interpreter and returns
    /// the dependency list directly.
    Lua,
}

/// Parse a YAML string into a [`Config`].
pub fn parse(yaml: &str) -> Result<Config> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a [`Config`] from a file on disk.
///
/// Read and parse failures are both reported as [`Error::ConfigParse`] with
/// the offending path; an absent file is the caller's concern (the workspace
/// treats it as the default configuration).
pub fn from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
