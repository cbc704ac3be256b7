//! Core data models for rcsect

mod config;
mod entry;
mod history;
mod section;
mod shell;

pub use config::{Config, HistoryConfig, ParserConfig, StorageConfig, WriterConfig};
pub use entry::{EntryCounts, NewEntry, Statement, StatementKind};
pub use history::HistoryEntry;
pub use section::{LogicalSection, MarkerKind, SectionMarker, StyleFamily, UNLABELED};
pub use shell::ShellType;
