//! Section markers, logical sections and heading styles

use serde::{Deserialize, Serialize};

use super::entry::EntryCounts;

/// Label given to runs of text that no recognised heading introduces
pub const UNLABELED: &str = "Unlabeled";

/// Kind of heading (or function boundary) a marker line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `# section: <name>`
    LabeledStart,
    /// `# --- <name> --- #`
    DashedStart,
    /// `# --- End <name> --- #`
    DashedEnd,
    /// `# [ <name> ]`
    Bracketed,
    /// `# # <name>`
    Hash,
    /// `# @start <name>`
    CustomStart,
    /// `# @end <name>`
    CustomEnd,
    /// `<identifier>() {`
    FunctionStart,
    /// `}`
    FunctionEnd,
}

impl MarkerKind {
    /// Closes a heading-style section (`End` and `@end` forms)
    pub fn is_section_end(&self) -> bool {
        matches!(self, MarkerKind::DashedEnd | MarkerKind::CustomEnd)
    }

    pub fn is_function(&self) -> bool {
        matches!(self, MarkerKind::FunctionStart | MarkerKind::FunctionEnd)
    }

    /// A start marker that names a section callers can merge into
    pub fn is_addressable(&self) -> bool {
        !self.is_section_end() && !self.is_function()
    }

    /// Start or end of a heading-style section; function markers excluded
    pub fn is_boundary(&self) -> bool {
        !self.is_function()
    }

    /// Style family a heading belongs to, `None` for function markers
    pub fn style(&self) -> Option<StyleFamily> {
        match self {
            MarkerKind::DashedStart | MarkerKind::DashedEnd => Some(StyleFamily::Dashed),
            MarkerKind::Bracketed => Some(StyleFamily::Bracketed),
            MarkerKind::Hash => Some(StyleFamily::Hash),
            MarkerKind::LabeledStart => Some(StyleFamily::Labeled),
            MarkerKind::CustomStart | MarkerKind::CustomEnd => Some(StyleFamily::Custom),
            MarkerKind::FunctionStart | MarkerKind::FunctionEnd => None,
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MarkerKind::LabeledStart => "labeled",
            MarkerKind::DashedStart => "dashed",
            MarkerKind::DashedEnd => "dashed-end",
            MarkerKind::Bracketed => "bracketed",
            MarkerKind::Hash => "hash",
            MarkerKind::CustomStart => "custom",
            MarkerKind::CustomEnd => "custom-end",
            MarkerKind::FunctionStart => "function",
            MarkerKind::FunctionEnd => "function-end",
        };
        f.pad(s)
    }
}

/// A recognised heading line
///
/// `line_number` is 1-indexed. Markers are produced in strictly increasing
/// line order, at most one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarker {
    pub kind: MarkerKind,
    pub name: String,
    pub line_number: usize,
}

impl SectionMarker {
    pub fn new(kind: MarkerKind, name: impl Into<String>, line_number: usize) -> Self {
        Self {
            kind,
            name: name.into(),
            line_number,
        }
    }
}

/// A contiguous block of the document
///
/// `start_line..=end_line` includes the heading line and, for paired styles,
/// the closing marker; `content` excludes both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalSection {
    pub label: String,
    pub start_line: usize,
    pub end_line: usize,
    pub content: String,
    pub counts: EntryCounts,
}

impl LogicalSection {
    pub fn is_unlabeled(&self) -> bool {
        self.label == UNLABELED
    }

    pub fn line_count(&self) -> usize {
        self.end_line + 1 - self.start_line
    }
}

/// Heading convention family used when synthesising a new section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StyleFamily {
    #[default]
    Dashed,
    Bracketed,
    Hash,
    Labeled,
    Custom,
}

impl StyleFamily {
    /// Tie-break order for style detection
    pub const ALL: [StyleFamily; 5] = [
        StyleFamily::Dashed,
        StyleFamily::Bracketed,
        StyleFamily::Hash,
        StyleFamily::Labeled,
        StyleFamily::Custom,
    ];
}

impl std::fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StyleFamily::Dashed => "dashed",
            StyleFamily::Bracketed => "bracketed",
            StyleFamily::Hash => "hash",
            StyleFamily::Labeled => "labeled",
            StyleFamily::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}
