//! History (undo) store
//!
//! An append-only log of pre-mutation snapshots. Entries are kept oldest
//! first in storage and enumerated newest first, where index 0 is the most
//! recent change. Restoring to an older point discards every newer entry;
//! there is no redo.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{Config, HistoryConfig, HistoryEntry};
use crate::utils::path::encode_for_filename;

/// On-disk layout of a history file
#[derive(Debug, Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    entries: Vec<HistoryEntry>,
}

/// History log for one document
#[derive(Debug)]
pub struct HistoryStore {
    /// `None` keeps the log in memory only
    path: Option<PathBuf>,
    max_entries: usize,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// A log that lives only as long as this value
    pub fn in_memory(max_entries: usize) -> Self {
        Self {
            path: None,
            max_entries: max_entries.max(1),
            entries: Vec::new(),
        }
    }

    /// Open a log persisted at `path`.
    ///
    /// A missing file is an empty log. A corrupt or unreadable one is logged
    /// and treated as empty so it never blocks document edits.
    pub fn open(path: impl Into<PathBuf>, max_entries: usize) -> Self {
        let path = path.into();
        let entries = load_entries(&path);
        Self {
            path: Some(path),
            max_entries: max_entries.max(1),
            entries,
        }
    }

    /// Open the log kept for `document` under the rcsect history directory
    pub fn for_document(document: &Path, config: &HistoryConfig) -> Self {
        Self::open(Self::default_path(document), config.max_entries)
    }

    /// `<config_dir>/rcsect/history/<encoded document path>.toml`
    pub fn default_path(document: &Path) -> PathBuf {
        Config::history_dir().join(format!("{}.toml", encode_for_filename(document)))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries newest first
    pub fn list(&self) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().collect()
    }

    /// Entry at `index`, 0 being the most recent
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        let position = self.position(index)?;
        self.entries.get(position)
    }

    /// Append a snapshot, dropping the oldest entries beyond the cap.
    ///
    /// The entry stays in memory even if persisting it fails.
    pub fn record(
        &mut self,
        description: &str,
        previous_content: &str,
        file_path: &str,
    ) -> Result<()> {
        self.entries
            .push(HistoryEntry::new(description, previous_content, file_path));
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.persist()
    }

    /// Remove entries `0..=index` and return the one at `index`.
    ///
    /// As with [`record`](Self::record), the in-memory log keeps the change
    /// even if persisting it fails.
    pub fn truncate_to_point(&mut self, index: usize) -> Result<Option<HistoryEntry>> {
        let Some(position) = self.position(index) else {
            return Ok(None);
        };
        let mut removed = self.entries.split_off(position);
        self.persist()?;
        Ok(Some(removed.swap_remove(0)))
    }

    /// Drop the most recent entry (used when the write it guarded failed)
    pub fn discard_latest(&mut self) -> Result<Option<HistoryEntry>> {
        self.truncate_to_point(0)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    fn position(&self, index: usize) -> Option<usize> {
        self.entries.len().checked_sub(index + 1)
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let to_error = |message: String| Error::History {
            path: path.clone(),
            message,
        };
        let file = HistoryFile {
            entries: self.entries.clone(),
        };
        let content = toml::to_string_pretty(&file).map_err(|e| to_error(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| to_error(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| to_error(e.to_string()))
    }
}

fn load_entries(path: &Path) -> Vec<HistoryEntry> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            log::warn!("history {} unreadable, starting empty: {}", path.display(), e);
            return Vec::new();
        }
    };
    match toml::from_str::<HistoryFile>(&content) {
        Ok(file) => file.entries,
        Err(e) => {
            log::warn!("history {} corrupt, starting empty: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_with(contents: &[&str]) -> HistoryStore {
        let mut store = HistoryStore::in_memory(50);
        for (i, content) in contents.iter().enumerate() {
            store
                .record(&format!("change {}", i), content, "/tmp/.zshrc")
                .unwrap();
        }
        store
    }

    #[test]
    fn test_list_newest_first() {
        let store = store_with(&["v0", "v1", "v2"]);
        let listed: Vec<&str> = store
            .list()
            .iter()
            .map(|e| e.previous_content.as_str())
            .collect();
        assert_eq!(listed, vec!["v2", "v1", "v0"]);
        assert_eq!(store.get(0).unwrap().previous_content, "v2");
        assert_eq!(store.get(2).unwrap().previous_content, "v0");
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_truncate_to_point() {
        let mut store = store_with(&["v0", "v1", "v2", "v3"]);
        let entry = store.truncate_to_point(1).unwrap().unwrap();
        assert_eq!(entry.previous_content, "v2");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().previous_content, "v1");

        assert!(store.truncate_to_point(5).unwrap().is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_discard_latest_and_clear() {
        let mut store = store_with(&["v0", "v1"]);
        assert_eq!(
            store.discard_latest().unwrap().unwrap().previous_content,
            "v1"
        );
        store.clear().unwrap();
        assert!(store.is_empty());
        assert!(store.discard_latest().unwrap().is_none());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut store = HistoryStore::in_memory(2);
        for content in ["v0", "v1", "v2"] {
            store.record("c", content, "f").unwrap();
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().previous_content, "v1");
    }

    #[test]
    fn test_persisted_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history").join("zshrc.toml");
        {
            let mut store = HistoryStore::open(&path, 50);
            store
                .record("Add 1 alias to 'Git'", "line one\nline 'two'\n", "/home/u/.zshrc")
                .unwrap();
        }
        let reopened = HistoryStore::open(&path, 50);
        assert_eq!(reopened.len(), 1);
        let entry = reopened.get(0).unwrap();
        assert_eq!(entry.description, "Add 1 alias to 'Git'");
        assert_eq!(entry.previous_content, "line one\nline 'two'\n");
        assert_eq!(entry.file_path, "/home/u/.zshrc");
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.toml");
        std::fs::write(&path, "this is [not toml").unwrap();
        let mut store = HistoryStore::open(&path, 50);
        assert!(store.is_empty());

        // The next record replaces the corrupt file
        store.record("c", "v0", "f").unwrap();
        assert_eq!(HistoryStore::open(&path, 50).len(), 1);
    }

    #[test]
    fn test_unwritable_store_reports_error() {
        let dir = tempdir().unwrap();
        // The history path is an existing directory, so writing it fails
        let mut store = HistoryStore::open(dir.path(), 50);
        let err = store.record("c", "v0", "f").unwrap_err();
        assert!(matches!(err, Error::History { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_default_path_is_per_document() {
        let a = HistoryStore::default_path(Path::new("/home/u/.zshrc"));
        let b = HistoryStore::default_path(Path::new("/home/u/.bashrc"));
        assert_ne!(a, b);
        assert!(a.to_string_lossy().ends_with("_2Fhome_2Fu_2F.zshrc.toml"));
    }

    #[test]
    fn test_default_path_separates_lookalike_documents() {
        let a = HistoryStore::default_path(Path::new("/home/u/.zshrc"));
        let b = HistoryStore::default_path(Path::new("/home/u_/zshrc"));
        assert_ne!(a, b);
    }
}
