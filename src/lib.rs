//! rcsect - Shell Configuration Section Engine
//!
//! Reads interactive-shell startup files (`.zshrc`, `.bashrc`), splits them
//! into logical sections and merges new aliases and exports into the right
//! section without disturbing unrelated content.
//!
//! # Features
//!
//! - Classify statements (aliases, exports, plugins, keybindings, ...)
//! - Recognise six heading conventions and segment documents by them
//! - Match requested section names against existing headings
//! - Append into matched sections or create new ones in the document's style
//! - Snapshot every change for undo

pub mod checker;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod matcher;
pub mod model;
pub mod parser;
pub mod storage;
pub mod utils;
pub mod writer;

pub use checker::check_all;
pub use engine::{AddOutcome, Engine};
pub use error::{Error, Result};
pub use history::HistoryStore;
pub use matcher::{SectionMatch, SectionMatcher};
pub use model::{
    Config, EntryCounts, HistoryEntry, LogicalSection, MarkerKind, NewEntry, SectionMarker,
    Statement, StatementKind, StyleFamily,
};
pub use parser::{count_entries, segment, MarkerDetector, PatternRegistry, Segmenter};
pub use storage::{DocumentStore, FileStore, MemoryStore};
pub use writer::{Placement, SectionWriter, Splice};
