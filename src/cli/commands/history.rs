//! History, undo and clear-history commands

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// List recorded changes, newest first
pub fn list(ctx: &Context) -> Result<()> {
    let engine = ctx.engine();
    let entries = engine.history();

    if entries.is_empty() {
        println!("{}", "No history recorded.".dimmed());
        return Ok(());
    }

    for (index, entry) in entries.iter().enumerate() {
        println!(
            "{}  {}  {}",
            format!("{:>3}", index).cyan(),
            entry.formatted_time().dimmed(),
            entry.description
        );
    }
    Ok(())
}

/// Undo the latest change, or back to `to`
pub fn undo(ctx: &Context, to: Option<usize>) -> Result<()> {
    let mut engine = ctx.engine();
    let index = to.unwrap_or(0);

    let Some(entry) = engine.history().get(index).copied() else {
        if engine.history().is_empty() {
            ctx.print_warning("Nothing to undo");
        } else {
            ctx.print_warning(&format!(
                "No history entry at index {} ({} recorded)",
                index,
                engine.history().len()
            ));
        }
        return Ok(());
    };

    let prompt = if index == 0 {
        format!("Undo '{}'?", entry.description)
    } else {
        format!(
            "Undo {} changes back to before '{}'?",
            index + 1,
            entry.description
        )
    };
    if !ctx.confirm(&prompt)? {
        println!("Cancelled.");
        return Ok(());
    }

    let description = entry.description.clone();
    if engine.undo_to_point(index)? {
        ctx.print_success(&format!("Restored state before '{}'", description));
        ctx.print_reload_hint();
    }
    Ok(())
}

/// Drop every history entry
pub fn clear(ctx: &Context) -> Result<()> {
    let mut engine = ctx.engine();
    if engine.history().is_empty() {
        println!("{}", "No history recorded.".dimmed());
        return Ok(());
    }
    if !ctx.confirm("Clear all history? Changes can no longer be undone.")? {
        println!("Cancelled.");
        return Ok(());
    }
    engine.clear_history()?;
    ctx.print_success("History cleared");
    Ok(())
}
