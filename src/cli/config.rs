use std::path::{Path, PathBuf};

use customer_map::Config;
use tracing::instrument;

use crate::cli::terminal::Colorize;

#[derive(Debug, clap::Parser)]
/// Show or create session settings
///
/// Settings are read from the file given with `--config`. Without one, the
/// defaults are used.
///
/// Available settings:
///   `default_sort`    Initial sort direction, ascending or descending
///   `confirm_delete`  Ask before deleting a customer (default: true)
///   `show_created`    Show when a customer was added (default: true)
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show the effective settings
    Show {
        /// Print the settings as TOML
        #[arg(long)]
        raw: bool,
    },

    /// Write a settings file containing the defaults
    Init {
        /// Where to write the settings file
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &Config, source: Option<&Path>) -> anyhow::Result<()> {
        match self.command {
            ConfigCommand::Show { raw: true } => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            ConfigCommand::Show { raw: false } => {
                Self::show_config(config, source);
                Ok(())
            }
            ConfigCommand::Init { path, force } => Self::init_config(&path, force),
        }
    }

    fn show_config(config: &Config, source: Option<&Path>) {
        println!("Configuration:");
        match source {
            Some(path) => println!("  {}", format!("from {}", path.display()).dim()),
            None => println!("  {}", "defaults (no --config given)".dim()),
        }
        println!();
        println!(
            "  default_sort:   {} ({})",
            if config.default_sort().is_ascending() {
                "ascending"
            } else {
                "descending"
            },
            config.default_sort()
        );
        println!("  confirm_delete: {}", config.confirm_delete);
        println!("  show_created:   {}", config.show_created);
    }

    fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "{} already exists. Use --force to overwrite it.",
                path.display()
            );
        }

        Config::default()
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

        println!(
            "{}",
            format!("✅ Wrote default settings to {}", path.display()).success()
        );
        println!("Use it with: cmap --config {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use customer_map::Config;

    use super::Command;

    #[test]
    fn init_writes_loadable_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cmap.toml");

        Command::init_config(&path, false).unwrap();

        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cmap.toml");
        std::fs::write(&path, "_version = \"1\"\nconfirm_delete = false\n").unwrap();

        let error = Command::init_config(&path, false).unwrap_err();
        assert!(error.to_string().contains("already exists"));

        Command::init_config(&path, true).unwrap();
        assert!(Config::load(&path).unwrap().confirm_delete);
    }
}
