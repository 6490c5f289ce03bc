//! Command handlers for the rollout binary

mod clean;
mod deploy;
mod steps;
mod versions;

use anyhow::Result;

use rollout::config::Config;
use rollout::presentation::factory::{self, ConfiguredManager};
use rollout::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::sink::CliEventSink;

/// Resolved configuration and output settings for one invocation
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
    pub command: &'static str,
}

impl Session {
    pub fn new(cli: &Cli) -> Result<Self> {
        let (config, warnings) = factory::resolve_config(cli)?;
        if !cli.json {
            print_config_warnings(&warnings);
        }
        let ui = UiContext::new(cli.json, cli.verbose, &config);
        Ok(Self {
            config,
            ui,
            command: cli.command.name(),
        })
    }

    pub fn sink(&self) -> CliEventSink {
        CliEventSink::for_command(self.ui, self.command)
    }

    pub fn manager<'a>(&self, sink: &'a CliEventSink) -> Result<ConfiguredManager<&'a CliEventSink>> {
        Ok(factory::create_manager(&self.config, sink)?)
    }

    pub fn app_name(&self) -> &str {
        self.config.app.name.as_deref().unwrap_or_default()
    }

    pub fn retain(&self, flag: Option<usize>) -> usize {
        flag.unwrap_or(self.config.deploy.retain)
    }
}

pub fn dispatch(cli: &Cli) -> Result<()> {
    let mut session = Session::new(cli)?;

    match &cli.command {
        Commands::Deploy {
            artifact,
            rollback,
            clean,
            retain,
            ..
        } => {
            if *rollback {
                session.config.deploy.rollback_on_restart_failure = true;
            }
            let retain = clean.then(|| session.retain(*retain));
            deploy::cmd_deploy(&session, artifact, retain)
        }
        Commands::Stage { artifact } => steps::cmd_stage(&session, artifact),
        Commands::Install { artifact, .. } => steps::cmd_install(&session, artifact),
        Commands::Restart => steps::cmd_restart(&session),
        Commands::Current => steps::cmd_current(&session),
        Commands::Path { artifact } => steps::cmd_path(&session, artifact),
        Commands::Versions => versions::cmd_versions(&session),
        Commands::Clean { retain, yes } => clean::cmd_clean(&session, session.retain(*retain), *yes),
    }
}
