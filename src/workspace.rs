//! # Workspace Discovery and Project Enumeration
//!
//! This module ties the configuration layer and the dependency resolvers
//! together into the [`Workspace`] snapshot: one immutable view of a
//! workspace for one invocation.
//!
//! ## Discovery
//!
//! A workspace root is any directory holding a `.gitws.yaml` configuration
//! file. [`Workspace::find`] walks upward from a starting directory through
//! its ancestors; the first directory (inclusive) containing the
//! configuration file becomes the root. When no ancestor has one, the
//! starting directory itself is the root with no configuration.
//!
//! ## Enumeration
//!
//! A project directory is an immediate child of the workspace root that is
//! itself a directory and contains a `.git` subdirectory. Directories named
//! under `excluded-projects` are skipped. The enumerated list is sorted
//! alphabetically and then handed to the selected dependency source to
//! produce the dependency-respecting order.
//!
//! Construction is single-threaded and synchronous; each dependency-command
//! invocation blocks until it completes.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{self, Config};
use crate::defaults::{CONFIG_FILE_NAME, GIT_DIR_NAME};
use crate::deps::{dependency_order, DependencySource};
use crate::error::Result;

/// An immutable snapshot of a workspace for one invocation.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    config_path: Option<PathBuf>,
    source: DependencySource,
    projects_alpha: Vec<PathBuf>,
    projects_topo: Vec<PathBuf>,
}

impl Workspace {
    /// Discover the workspace containing `start_dir`.
    ///
    /// Walks upward through `start_dir` and its ancestors looking for the
    /// configuration file; the first directory containing one becomes the
    /// workspace root. Falls back to `start_dir` itself, with no
    /// configuration, when none of its ancestors has one.
    pub fn find(start_dir: &Path) -> Result<Self> {
        let mut dir = start_dir;
        loop {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                debug!("workspace root {} via {}", dir.display(), candidate.display());
                return Self::from_root(dir);
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Self::from_root(start_dir),
            }
        }
    }

    /// Open the workspace rooted at `root`, loading its configuration file
    /// if one exists.
    pub fn from_root(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            let config = config::from_file(&config_path)?;
            Self::new(root, Some(config_path), &config)
        } else {
            Self::new(root, None, &Config::default())
        }
    }

    fn new(root: &Path, config_path: Option<PathBuf>, config: &Config) -> Result<Self> {
        // Reject conflicting dependency-source keys before touching the
        // filesystem.
        let source = DependencySource::from_config(config)?;

        let excluded: HashSet<PathBuf> = config
            .excluded_projects
            .iter()
            .map(|p| root.join(p))
            .collect();

        let projects_alpha = Self::enumerate_projects(root, &excluded)?;
        let projects_topo = dependency_order(&source, root, &projects_alpha)?;

        Ok(Self {
            root: root.to_path_buf(),
            config_path,
            source,
            projects_alpha,
            projects_topo,
        })
    }

    /// Immediate children of `root` that are Git-managed project directories
    /// and not excluded, sorted alphabetically by path.
    fn enumerate_projects(root: &Path, excluded: &HashSet<PathBuf>) -> Result<Vec<PathBuf>> {
        let mut projects = Vec::new();
        for entry in fs::read_dir(root)? {
            let project_dir = entry?.path();
            if excluded.contains(&project_dir) {
                continue;
            }
            if project_dir.is_dir() && project_dir.join(GIT_DIR_NAME).is_dir() {
                projects.push(project_dir);
            }
        }
        projects.sort();
        Ok(projects)
    }

    /// Absolute path of the workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the configuration file, or `None` when the workspace has no
    /// configuration.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The active dependency source.
    pub fn dependency_source(&self) -> &DependencySource {
        &self.source
    }

    /// Project directories in alphabetical order.
    pub fn projects_alpha(&self) -> &[PathBuf] {
        &self.projects_alpha
    }

    /// Project directories in dependency order: every project appears after
    /// all of its dependencies.
    pub fn projects_topo(&self) -> &[PathBuf] {
        &self.projects_topo
    }
}
