//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures, helper functions, and config
//! snippets to reduce duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = WorkspaceFixture::new()
//!         .with_project("app")
//!         .with_config(configs::STATIC_DEPS);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::WorkspaceFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Empty configuration document.
    pub const EMPTY: &str = "{}\n";

    /// Static dependencies: b and c both depend on a.
    pub const STATIC_DEPS: &str = "dependencies:\n  b: [a]\n  c: [a]\n";

    /// Shell dependency command reading a per-project `.deps` file.
    pub const SHELL_DEPS: &str = "dependency-command:\n  language: shell\n  script: cat .deps 2>/dev/null || true\n";

    /// Both dependency-sourcing keys at once (invalid).
    pub const CONFLICTING: &str = "dependencies:\n  a: []\ndependency-command:\n  language: shell\n  script: true\n";

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "excluded-projects: [unclosed\n";
}

/// A test fixture that provides a temporary workspace directory populated
/// with fake Git project directories and an optional `.gitws.yaml`.
///
/// A "project" here is just a child directory containing an empty `.git`
/// subdirectory, which is all the enumeration contract requires.
pub struct WorkspaceFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl WorkspaceFixture {
    /// Create a new fixture with an empty workspace.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write a `.gitws.yaml` with the given contents.
    pub fn with_config(self, yaml: &str) -> Self {
        self.temp_dir
            .child(".gitws.yaml")
            .write_str(yaml)
            .expect("Failed to write config");
        self
    }

    /// Add a fake project directory.
    pub fn with_project(self, name: &str) -> Self {
        self.temp_dir
            .child(name)
            .child(".git")
            .create_dir_all()
            .expect("Failed to create project");
        self
    }

    /// Add a plain (non-project) child directory.
    pub fn with_plain_dir(self, name: &str) -> Self {
        self.temp_dir
            .child(name)
            .create_dir_all()
            .expect("Failed to create dir");
        self
    }

    /// Write a file inside a previously added project.
    pub fn with_project_file(self, project: &str, file: &str, contents: &str) -> Self {
        self.temp_dir
            .child(project)
            .child(file)
            .write_str(contents)
            .expect("Failed to write project file");
        self
    }

    /// Path to the workspace root.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project directory.
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}
