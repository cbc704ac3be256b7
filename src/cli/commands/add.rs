//! Add command implementation

use anyhow::{anyhow, Result};
use colored::Colorize;

use crate::cli::Context;
use crate::model::{NewEntry, StatementKind};
use crate::writer::Placement;

/// Parse `--alias`/`--export` definitions in command-line order, aliases first
pub fn collect_entries(aliases: &[String], exports: &[String]) -> Result<Vec<NewEntry>> {
    let mut entries = Vec::with_capacity(aliases.len() + exports.len());
    for definition in aliases {
        let entry = NewEntry::parse_definition(StatementKind::Alias, definition);
        entries.push(entry.map_err(|e| anyhow!(e))?);
    }
    for definition in exports {
        let entry = NewEntry::parse_definition(StatementKind::Export, definition);
        entries.push(entry.map_err(|e| anyhow!(e))?);
    }
    Ok(entries)
}

/// Execute the add command
pub fn execute(
    ctx: &Context,
    section: &str,
    aliases: &[String],
    exports: &[String],
    from: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let entries = collect_entries(aliases, exports)?;
    if entries.is_empty() {
        anyhow::bail!("Nothing to add. Use --alias NAME=COMMAND or --export NAME=VALUE.");
    }

    let mut engine = ctx.engine();

    if dry_run {
        let splice = engine.preview(section, &entries, from)?;
        print!("{}", splice.content);
        eprintln!("{} {}", "→".cyan(), splice.message.dimmed());
        return Ok(());
    }

    let outcome = engine.add_entries(section, &entries, from)?;
    if let Some(warning) = &outcome.history_warning {
        ctx.print_warning(&format!("Change written but not recorded for undo: {}", warning));
    }
    let placement = match outcome.added_to {
        Placement::Existing => "existing".cyan(),
        Placement::New => "new".green(),
    };
    ctx.print_success(&format!("{} [{}]", outcome.message, placement));
    ctx.print_reload_hint();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_entries_orders_aliases_first() {
        let entries = collect_entries(
            &["gs=git status".to_string()],
            &["EDITOR='nvim'".to_string()],
        )
        .unwrap();
        assert_eq!(
            entries,
            vec![NewEntry::alias("gs", "git status"), NewEntry::export("EDITOR", "nvim")]
        );
    }

    #[test]
    fn test_collect_entries_rejects_missing_equals() {
        assert!(collect_entries(&["gs".to_string()], &[]).is_err());
    }
}
