//! rollout - versioned artifact deployment
//!
//! Usage: rollout [OPTIONS] <COMMAND>
//!
//! Commands:
//!   deploy    Stage, install and restart an artifact
//!   stage     Copy an artifact into the application root
//!   install   Point the current link at an artifact
//!   restart   Run the service restart command
//!   current   Print the active artifact
//!   versions  List installed versions
//!   clean     Remove versions beyond the retention window
//!   path      Print where an artifact would be deployed

mod commands;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rollout::presentation::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = commands::dispatch(&cli) {
        ui::error::print_error(&err, cli.command.name(), cli.json);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rollout={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
