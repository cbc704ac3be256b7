//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let engine = ctx.engine();
    let check_result = engine.check()?;

    if check_result.is_ok() {
        ctx.print_success("No issues found");
        let total = engine.count_entries()?.total();
        println!("{}", format!("Checked {} statement(s)", total).dimmed());
        return Ok(());
    }

    println!("{}", "Issues found:".yellow().bold());
    for issue in &check_result.issues {
        print!("  {} [{}]", "⚠".yellow(), "WARNING".yellow());
        if let Some(line) = issue.line_number {
            print!(" Line {}", line);
        }
        if let Some(ref name) = issue.entry_name {
            print!(" ({})", name.cyan());
        }
        println!(": {}", issue.message);
    }

    println!();
    println!(
        "{}",
        format!("{} issue(s)", check_result.issues.len()).dimmed()
    );
    Ok(())
}
