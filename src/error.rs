//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `gitws` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! The `Error` enum covers:
//!
//! - Conflicting dependency-source configuration keys.
//! - Configuration parsing errors.
//! - Dependency-command execution failures.
//! - Invalid vertex lookups in the dependency graph.
//! - I/O errors.
//! - YAML parsing errors.
//!
//! Every fatal condition aborts the workspace construction that raised it;
//! there is no retry policy anywhere in the library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gitws operations
#[derive(Error, Debug)]
pub enum Error {
    /// Both `dependencies` and `dependency-command` were supplied in the
    /// workspace configuration.
    ///
    /// The two keys select mutually exclusive dependency-sourcing modes, so
    /// this is rejected before any project enumeration takes place.
    #[error(
        "Workspace configuration must specify at most one of \"dependencies\" and \"dependency-command\""
    )]
    ConfigConflict,

    /// An error occurred while reading or parsing the workspace
    /// configuration file.
    #[error("Configuration error in {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A dependency command failed for a project.
    ///
    /// Raised on spawn failure, non-zero exit, non-UTF-8 output, or a script
    /// fault. Includes the project directory the command was running for.
    #[error("Dependency command failed for project {}: {message}", project_dir.display())]
    DependencyCommand {
        project_dir: PathBuf,
        message: String,
    },

    /// A vertex id that was never assigned by the mapper was looked up.
    ///
    /// This indicates a defect in the code feeding the graph rather than bad
    /// user input; well-formed construction only maps back ids it produced.
    #[error("Invalid vertex id {id}")]
    InvalidVertex { id: usize },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
