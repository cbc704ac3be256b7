//! # Parser Module
//!
//! Read-only analysis of shell startup files.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs       - This file: re-exports + convenience functions
//! ├── patterns.rs  - Regex patterns, one per statement kind
//! ├── words.rs     - Shell word splitting for values
//! ├── registry.rs  - PatternRegistry: classify / extract / count
//! ├── markers.rs   - MarkerDetector: heading conventions
//! └── segment.rs   - Segmenter: logical sections
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rcsect::parser::{PatternRegistry, Segmenter};
//! use rcsect::model::StatementKind;
//!
//! let text = "# --- Git --- #\nalias g='git'\n";
//! let sections = Segmenter::default().segment(text);
//! assert_eq!(sections[0].label, "Git");
//! assert_eq!(sections[0].counts.get(StatementKind::Alias), 1);
//!
//! let counts = PatternRegistry::default().count_entries(text);
//! assert_eq!(counts.get(StatementKind::Alias), 1);
//! ```
//!
//! Nothing in this module fails: unrecognised or malformed lines are simply
//! left unclassified.

pub mod markers;
pub mod patterns;
pub mod registry;
pub mod segment;
pub mod words;

pub use markers::MarkerDetector;
pub use registry::PatternRegistry;
pub use segment::Segmenter;

use crate::model::{EntryCounts, LogicalSection};

/// Segment a document with default limits
pub fn segment(text: &str) -> Vec<LogicalSection> {
    Segmenter::default().segment(text)
}

/// Count statements per kind with default limits
pub fn count_entries(text: &str) -> EntryCounts {
    PatternRegistry::default().count_entries(text)
}
