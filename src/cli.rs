//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use gitws::output::OutputConfig;

use crate::commands;

/// Gitws - Run commands across a workspace of Git projects in dependency order
#[derive(Parser, Debug)]
#[command(name = "gitws")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "GITWS_LOG"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a command in each project directory
    Run(commands::run::RunArgs),
    /// Run a Git command in each project directory
    Git(commands::git::GitArgs),
    /// Run a shell command line in each project directory
    Sh(commands::sh::ShArgs),
    /// List project directories
    Ls(commands::ls::LsArgs),
    /// Show workspace information
    Info(commands::info::InfoArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();
        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Run(args) => commands::run::execute(args, &output),
            Commands::Git(args) => commands::git::execute(args, &output),
            Commands::Sh(args) => commands::sh::execute(args, &output),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Info(args) => commands::info::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
