use std::path::{Path, PathBuf};

mod add_form;
mod config;
mod details;
mod list;
mod prompt;
mod shell;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use customer_map::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global=true)]
    verbose: u8,

    /// Path to a settings file (see `cmap config`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_default()
            .run(&config, self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let config = Config::load(path)
        .with_context(|| format!("could not load settings from {}", path.display()))?;
    tracing::debug!("Loaded settings from {}", path.display());
    Ok(config)
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Start an interactive session (default)
    ///
    /// Customers live only as long as the session.
    Shell(shell::Command),

    /// Show or create session settings
    Config(config::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Shell(shell::Command::default())
    }
}

impl Command {
    fn run(self, config: &Config, source: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Shell(command) => command.run(config)?,
            Self::Config(command) => command.run(config, source)?,
        }
        Ok(())
    }
}
