//! # Gitws Library
//!
//! This library provides the core functionality for the `gitws` command-line
//! tool: discovering a workspace of Git-managed project directories and
//! ordering them so that every project comes after the projects it depends
//! on. It is designed to be used by the CLI but can also be integrated into
//! other applications that need dependency-ordered project traversal.
//!
//! ## Quick Example
//!
//! ```
//! use gitws::graph::LabeledGraph;
//!
//! // "app" depends on "lib"; "tool" stands alone.
//! let mut graph = LabeledGraph::new();
//! graph.add_edge(&"lib", &"app");
//! graph.add_edge(&"tool", &"tool");
//!
//! let order = graph.topo_sort().unwrap();
//! let lib_pos = order.iter().position(|x| *x == "lib").unwrap();
//! let app_pos = order.iter().position(|x| *x == "app").unwrap();
//! assert!(lib_pos < app_pos);
//! assert_eq!(order.len(), 3);
//! ```
//!
//! ## Core Concepts
//!
//! - **Graph (`graph`)**: the ordering engine — a directed graph over dense
//!   integer ids, an identity mapper from arbitrary labels to those ids, and
//!   the labeled composition of the two.
//! - **Configuration (`config`)**: the `.gitws.yaml` schema — excluded
//!   projects plus at most one dependency source (`dependencies` or
//!   `dependency-command`).
//! - **Dependency Sources (`deps`)**: the three edge-sourcing strategies
//!   (none, static, command) and the graph construction they feed.
//! - **Workspace (`workspace`)**: discovery of the workspace root, project
//!   enumeration, and the immutable per-invocation snapshot exposing both
//!   the alphabetical and the dependency-ordered project lists.
//!
//! ## Execution Flow
//!
//! 1. **Discovery**: walk upward from the starting directory to find the
//!    workspace root and its configuration file.
//! 2. **Enumeration**: collect immediate child directories containing a
//!    `.git` subdirectory, minus exclusions, sorted alphabetically.
//! 3. **Resolution**: run the selected dependency source to collect edges.
//! 4. **Ordering**: extract one deterministic topological order.
//! 5. **Consumption**: the CLI front end runs commands across the ordered
//!    list, or prints it.

pub mod config;
pub mod defaults;
pub mod deps;
pub mod error;
pub mod graph;
pub mod output;
pub mod workspace;

#[cfg(test)]
mod graph_proptest;
