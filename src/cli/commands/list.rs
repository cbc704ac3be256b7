//! Read-only listing commands

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;
use crate::model::{EntryCounts, MarkerKind, StatementKind};

const RANGE_WIDTH: usize = 11;

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Width of the section column; the counts column keeps about 30 columns
fn label_width(term_width: usize) -> usize {
    term_width
        .saturating_sub(RANGE_WIDTH + 2 + 30)
        .clamp(12, 40)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// `alias:3 export:1`
fn summarize_counts(counts: &EntryCounts) -> String {
    counts
        .iter()
        .map(|(kind, n)| format!("{}:{}", kind, n))
        .collect::<Vec<_>>()
        .join(" ")
}

fn color_kind(kind: StatementKind) -> colored::ColoredString {
    let text = kind.to_string();
    match kind {
        StatementKind::Alias => text.green(),
        StatementKind::Function => text.blue(),
        StatementKind::Export | StatementKind::Path => text.yellow(),
        StatementKind::Source => text.magenta(),
        _ => text.cyan(),
    }
}

/// List logical sections
pub fn sections(ctx: &Context) -> Result<()> {
    let sections = ctx.engine().segment()?;

    if sections.is_empty() {
        println!("{}", "No sections found.".dimmed());
        return Ok(());
    }

    let width = label_width(get_terminal_width());
    let header = format!(
        "{:<range$} {:<width$} {}",
        "LINES",
        "SECTION",
        "ENTRIES",
        range = RANGE_WIDTH,
    );
    println!("{}", header.bold());
    for section in &sections {
        let range = format!("{}-{}", section.start_line, section.end_line);
        let label = format!("{:<width$}", truncate_value(&section.label, width));
        let label = if section.is_unlabeled() {
            label.dimmed()
        } else {
            label.bold()
        };
        println!(
            "{:<range_width$} {} {}",
            range,
            label,
            summarize_counts(&section.counts).dimmed(),
            range_width = RANGE_WIDTH,
        );
    }
    println!(
        "{}",
        format!("{} section(s) in {}", sections.len(), ctx.config_file.display()).dimmed()
    );
    Ok(())
}

/// Count statements by kind
pub fn counts(ctx: &Context) -> Result<()> {
    let counts = ctx.engine().count_entries()?;

    if counts.is_empty() {
        println!("{}", "No statements recognised.".dimmed());
        return Ok(());
    }

    for (kind, n) in counts.iter() {
        println!("{:>5}  {}", n, color_kind(kind));
    }
    println!("{}", format!("{:>5}  total", counts.total()).bold());
    Ok(())
}

/// List detected markers
pub fn markers(ctx: &Context) -> Result<()> {
    let markers = ctx.engine().markers()?;

    if markers.is_empty() {
        println!("{}", "No markers found.".dimmed());
        return Ok(());
    }

    for marker in &markers {
        let kind = format!("{:<16}", marker.kind);
        let kind = match marker.kind {
            MarkerKind::DashedEnd | MarkerKind::CustomEnd => kind.dimmed(),
            MarkerKind::FunctionStart | MarkerKind::FunctionEnd => kind.blue(),
            _ => kind.green(),
        };
        println!("{:>5}  {} {}", marker.line_number, kind, marker.name);
    }
    Ok(())
}
