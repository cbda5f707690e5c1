//! Default values for gitws configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

/// Name of the workspace configuration file, looked up in each candidate
/// workspace root during discovery.
pub const CONFIG_FILE_NAME: &str = ".gitws.yaml";

/// Marker subdirectory that identifies a project directory.
pub const GIT_DIR_NAME: &str = ".git";
