//! CLI command implementations

pub mod add;
pub mod check;
pub mod history;
pub mod list;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::Context;

/// Run a parsed subcommand
pub fn dispatch(ctx: &Context, command: &Commands) -> Result<()> {
    match command {
        Commands::Sections => list::sections(ctx),
        Commands::Counts => list::counts(ctx),
        Commands::Markers => list::markers(ctx),
        Commands::Add {
            section,
            aliases,
            exports,
            from,
            dry_run,
        } => add::execute(ctx, section, aliases, exports, from.as_deref(), *dry_run),
        Commands::Check => check::execute(ctx),
        Commands::History => history::list(ctx),
        Commands::Undo { to } => history::undo(ctx, *to),
        Commands::ClearHistory => history::clear(ctx),
        // Handled before a context exists
        Commands::InitConfig => Ok(()),
    }
}
