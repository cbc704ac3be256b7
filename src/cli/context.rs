//! Command execution context

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::PathBuf;

use crate::cli::args::Cli;
use crate::engine::Engine;
use crate::history::HistoryStore;
use crate::model::{Config, ShellType};
use crate::storage::FileStore;
use crate::utils::path::normalize_path;
use crate::utils::shell_detect::get_shell_type;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub config_file: PathBuf,
    pub yes: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;
        let shell_type = get_shell_type(cli.shell.map(|s| s.into()), cli.file.as_deref());
        // History is keyed by path, so relative and `~` forms must resolve
        let config_file = match &cli.file {
            Some(file) => normalize_path(&file.to_string_lossy()),
            None => shell_type.default_config_path(),
        };

        Ok(Self {
            config,
            shell_type,
            config_file,
            yes: cli.yes,
        })
    }

    /// Engine over the target file with its persisted history
    pub fn engine(&self) -> Engine<FileStore> {
        let store = FileStore::new(&self.config_file, &self.config.storage);
        let history = HistoryStore::for_document(&self.config_file, &self.config.history);
        Engine::new(store, history, &self.config)
    }

    /// Ask for confirmation unless `--yes` was given
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.yes {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying configuration
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }
}
