//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --app, --host, --prefix, --json, --color, --verbose)
//!   are inherited by all subcommands
//! - Flags override `ROLLOUT_*` environment variables and the config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::InstallMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallModeArg {
    /// Remove the current link, then create it again
    RemoveThenLink,
    /// Create a temporary link and rename it over the current one
    AtomicRename,
}

impl From<InstallModeArg> for InstallMode {
    fn from(arg: InstallModeArg) -> Self {
        match arg {
            InstallModeArg::RemoveThenLink => InstallMode::RemoveThenLink,
            InstallModeArg::AtomicRename => InstallMode::AtomicRename,
        }
    }
}

/// rollout - deploy versioned artifacts behind a current link
#[derive(Parser, Debug)]
#[command(name = "rollout")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./rollout.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Application name
    #[arg(long, global = true, value_name = "NAME")]
    pub app: Option<String>,

    /// SSH destination; omit or use `localhost` to deploy on this machine
    #[arg(long, global = true, value_name = "HOST")]
    pub host: Option<String>,

    /// Directory holding the application root (`<prefix>/<app>`)
    #[arg(long, global = true, value_name = "DIR")]
    pub prefix: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage, install and restart an artifact
    Deploy {
        /// Local build output, e.g. target/myapp-1.2.war
        artifact: PathBuf,

        /// How the current link is switched
        #[arg(long, value_enum)]
        install_mode: Option<InstallModeArg>,

        /// Reinstate the previous version if the restart fails
        #[arg(long)]
        rollback: bool,

        /// Remove old versions after a successful deploy
        #[arg(long)]
        clean: bool,

        /// Versions to keep when cleaning, current included
        #[arg(long, value_name = "N", requires = "clean")]
        retain: Option<usize>,
    },

    /// Copy an artifact into the application root
    Stage {
        artifact: PathBuf,
    },

    /// Point the current link at a staged artifact
    Install {
        artifact: PathBuf,

        #[arg(long, value_enum)]
        install_mode: Option<InstallModeArg>,
    },

    /// Run the service restart command
    Restart,

    /// Print the artifact the current link points at
    Current,

    /// List installed versions, marking the current one
    Versions,

    /// Remove old versions beyond the retention count
    Clean {
        /// Versions to keep, current included
        #[arg(long, value_name = "N")]
        retain: Option<usize>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print where an artifact would be staged
    Path {
        artifact: PathBuf,
    },
}

impl Commands {
    /// Subcommand name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Deploy { .. } => "deploy",
            Commands::Stage { .. } => "stage",
            Commands::Install { .. } => "install",
            Commands::Restart => "restart",
            Commands::Current => "current",
            Commands::Versions => "versions",
            Commands::Clean { .. } => "clean",
            Commands::Path { .. } => "path",
        }
    }

    /// Install mode requested on the command line, if any
    pub fn install_mode(&self) -> Option<InstallMode> {
        match self {
            Commands::Deploy { install_mode, .. } | Commands::Install { install_mode, .. } => {
                install_mode.map(InstallMode::from)
            }
            _ => None,
        }
    }
}
