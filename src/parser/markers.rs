//! Section marker detection
//!
//! Recognised heading conventions (case-insensitive):
//!
//! | Form | Kind |
//! |------|------|
//! | `# @start <name>` / `# @end <name>` | [`MarkerKind::CustomStart`] / [`MarkerKind::CustomEnd`] |
//! | `# --- <name> --- #` / `# --- End <name> --- #` | [`MarkerKind::DashedStart`] / [`MarkerKind::DashedEnd`] |
//! | `# [ <name> ]` | [`MarkerKind::Bracketed`] |
//! | `# # <name>` | [`MarkerKind::Hash`] |
//! | `<identifier>() {` / `}` | [`MarkerKind::FunctionStart`] / [`MarkerKind::FunctionEnd`] |
//! | `# section: <name>` | [`MarkerKind::LabeledStart`] |
//!
//! The table order is the priority order: a line is tested against each form
//! in turn and only the first hit becomes a marker.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{MarkerKind, ParserConfig, SectionMarker};
use crate::utils::strings::split_lines_preserve_trailing;

lazy_static! {
    static ref CUSTOM_START_RE: Regex = Regex::new(r"(?i)^\s*#\s*@start\s+(.+?)\s*$").unwrap();
    static ref CUSTOM_END_RE: Regex = Regex::new(r"(?i)^\s*#\s*@end\b\s*(.*?)\s*$").unwrap();
    static ref DASHED_RE: Regex =
        Regex::new(r"(?i)^\s*#\s*-{3,}\s*(.+?)\s*-{3,}\s*#?\s*$").unwrap();
    static ref DASHED_END_NAME_RE: Regex = Regex::new(r"(?i)^end(?:\s+(.*))?$").unwrap();
    static ref BRACKETED_RE: Regex = Regex::new(r"^\s*#\s*\[\s*(.+?)\s*\]\s*$").unwrap();
    static ref HASH_RE: Regex = Regex::new(r"^\s*#\s*#\s+(.+?)\s*$").unwrap();
    static ref FUNCTION_START_RE: Regex =
        Regex::new(r"^\s*(?:function\s+)?([A-Za-z_][A-Za-z0-9_-]*)\s*\(\s*\)\s*\{\s*$").unwrap();
    static ref FUNCTION_KEYWORD_RE: Regex =
        Regex::new(r"^\s*function\s+([A-Za-z_][A-Za-z0-9_-]*)\s*\{\s*$").unwrap();
    static ref LABELED_RE: Regex = Regex::new(r"(?i)^\s*#\s*section\s*:\s*(.+?)\s*$").unwrap();
}

/// Scans documents for heading and function-boundary markers
#[derive(Debug, Clone, Copy)]
pub struct MarkerDetector {
    max_line_length: usize,
}

impl Default for MarkerDetector {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}

impl MarkerDetector {
    pub fn new(max_line_length: usize) -> Self {
        Self { max_line_length }
    }

    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new(config.max_line_length)
    }

    /// Detect the marker on a single line, if any
    pub fn detect_line(&self, line: &str, line_number: usize) -> Option<SectionMarker> {
        if line.len() > self.max_line_length && line.chars().count() > self.max_line_length {
            return None;
        }
        let (kind, name) = detect_comment_marker(line).or_else(|| detect_function_marker(line))?;
        Some(SectionMarker::new(kind, name, line_number))
    }

    /// All markers in document order
    pub fn detect(&self, text: &str) -> Vec<SectionMarker> {
        split_lines_preserve_trailing(text)
            .into_iter()
            .enumerate()
            .filter_map(|(i, line)| self.detect_line(line, i + 1))
            .collect()
    }

    /// Markers that delimit heading-style sections (function markers dropped)
    pub fn boundary_markers(&self, text: &str) -> Vec<SectionMarker> {
        self.detect(text)
            .into_iter()
            .filter(|m| m.kind.is_boundary())
            .collect()
    }

    /// Start markers naming sections that entries can be merged into
    pub fn addressable_markers(&self, text: &str) -> Vec<SectionMarker> {
        self.detect(text)
            .into_iter()
            .filter(|m| m.kind.is_addressable())
            .collect()
    }
}

fn detect_comment_marker(line: &str) -> Option<(MarkerKind, String)> {
    if !line.trim_start().starts_with('#') {
        return None;
    }

    if let Some(caps) = CUSTOM_START_RE.captures(line) {
        if let Some(name) = clean_name(&caps[1]) {
            return Some((MarkerKind::CustomStart, name));
        }
    }
    if let Some(caps) = CUSTOM_END_RE.captures(line) {
        return Some((MarkerKind::CustomEnd, clean_name(&caps[1]).unwrap_or_default()));
    }
    if let Some(caps) = DASHED_RE.captures(line) {
        let raw = caps[1].trim();
        if let Some(end) = DASHED_END_NAME_RE.captures(raw) {
            let name = end.get(1).and_then(|m| clean_name(m.as_str()));
            return Some((MarkerKind::DashedEnd, name.unwrap_or_default()));
        }
        if let Some(name) = clean_name(raw) {
            return Some((MarkerKind::DashedStart, name));
        }
    }
    if let Some(caps) = BRACKETED_RE.captures(line) {
        if let Some(name) = clean_name(&caps[1]) {
            return Some((MarkerKind::Bracketed, name));
        }
    }
    if let Some(caps) = HASH_RE.captures(line) {
        if let Some(name) = clean_name(&caps[1]) {
            return Some((MarkerKind::Hash, name));
        }
    }
    if let Some(caps) = LABELED_RE.captures(line) {
        if let Some(name) = clean_name(&caps[1]) {
            return Some((MarkerKind::LabeledStart, name));
        }
    }
    None
}

fn detect_function_marker(line: &str) -> Option<(MarkerKind, String)> {
    if line.trim_end() == "}" {
        return Some((MarkerKind::FunctionEnd, String::new()));
    }
    let caps = FUNCTION_START_RE
        .captures(line)
        .or_else(|| FUNCTION_KEYWORD_RE.captures(line))?;
    Some((MarkerKind::FunctionStart, caps[1].to_string()))
}

/// Trim decoration around a heading name; names without any alphanumeric
/// character (ruler lines like `# ----------`) are rejected.
fn clean_name(raw: &str) -> Option<String> {
    let name = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '=' | '#' | '*'));
    if name.chars().any(char::is_alphanumeric) {
        Some(name.to_string())
    } else {
        None
    }
}
