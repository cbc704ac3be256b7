//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rcsect")]
#[command(about = "Shell configuration section manager - segment, match and merge shell RC blocks")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Shell startup file to operate on
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Shell type used to pick the default startup file
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List logical sections with line ranges and statement counts
    #[command(visible_alias = "ls")]
    Sections,

    /// Count statements per kind across the whole file
    Counts,

    /// List recognised headings and function boundaries
    Markers,

    /// Merge aliases and exports into a section
    Add {
        /// Section name, e.g. "Git Aliases"
        section: String,
        /// Alias definition NAME=COMMAND (repeatable)
        #[arg(short = 'a', long = "alias")]
        aliases: Vec<String>,
        /// Export definition NAME=VALUE (repeatable)
        #[arg(short = 'e', long = "export")]
        exports: Vec<String>,
        /// Where the entries came from, recorded in the attribution comment
        #[arg(long)]
        from: Option<String>,
        /// Print the resulting file instead of writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Report unbalanced quotes/brackets and duplicate definitions
    Check,

    /// Show recorded changes, newest first
    History,

    /// Undo the last change, or every change back to a history index
    Undo {
        /// History index to restore (0 = most recent)
        #[arg(long)]
        to: Option<usize>,
    },

    /// Forget all recorded changes
    ClearHistory,

    /// Write the default configuration file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Zsh,
    Bash,
}

impl From<ShellArg> for crate::model::ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Zsh => crate::model::ShellType::Zsh,
            ShellArg::Bash => crate::model::ShellType::Bash,
        }
    }
}
