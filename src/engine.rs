//! Engine facade
//!
//! Every public operation reads the whole document, works on a copy and, for
//! mutations, snapshots the old text into history before writing the new
//! text. There is no locking: two engines writing the same file can lose an
//! update.

use crate::checker::{check_all, CheckResult};
use crate::error::{Error, Result};
use crate::history::HistoryStore;
use crate::model::{Config, EntryCounts, HistoryEntry, LogicalSection, NewEntry, SectionMarker};
use crate::parser::{MarkerDetector, PatternRegistry, Segmenter};
use crate::storage::DocumentStore;
use crate::writer::{Placement, SectionWriter, Splice};

/// Result of [`Engine::add_entries`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub added_to: Placement,
    pub section_name: String,
    pub message: String,
    /// Set when the change was written but its history snapshot could not be
    /// persisted
    pub history_warning: Option<String>,
}

pub struct Engine<S: DocumentStore> {
    store: S,
    history: HistoryStore,
    registry: PatternRegistry,
    detector: MarkerDetector,
    segmenter: Segmenter,
    writer: SectionWriter,
}

impl<S: DocumentStore> Engine<S> {
    pub fn new(store: S, history: HistoryStore, config: &Config) -> Self {
        let registry = PatternRegistry::from_config(&config.parser);
        let detector = MarkerDetector::from_config(&config.parser);
        Self {
            store,
            history,
            registry,
            detector,
            segmenter: Segmenter::new(registry, detector),
            writer: SectionWriter::new(detector, config.writer.clone()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Current document text
    pub fn read(&self) -> Result<String> {
        self.store.read_raw()
    }

    pub fn segment(&self) -> Result<Vec<LogicalSection>> {
        Ok(self.segmenter.segment(&self.read()?))
    }

    pub fn count_entries(&self) -> Result<EntryCounts> {
        Ok(self.registry.count_entries(&self.read()?))
    }

    pub fn markers(&self) -> Result<Vec<SectionMarker>> {
        Ok(self.detector.detect(&self.read()?))
    }

    pub fn check(&self) -> Result<CheckResult> {
        Ok(check_all(&self.read()?, &self.registry))
    }

    /// Compute the splice `add_entries` would perform, without writing
    pub fn preview(
        &self,
        section_name: &str,
        entries: &[NewEntry],
        attribution: Option<&str>,
    ) -> Result<Splice> {
        let content = self.read()?;
        self.writer.plan(&content, section_name, entries, attribution)
    }

    /// Merge entries into the best matching section, or a new one.
    ///
    /// Read and write errors are returned unchanged. A failed write leaves no
    /// history entry behind.
    pub fn add_entries(
        &mut self,
        section_name: &str,
        entries: &[NewEntry],
        attribution: Option<&str>,
    ) -> Result<AddOutcome> {
        let content = self.read()?;
        let splice = self
            .writer
            .plan(&content, section_name, entries, attribution)?;

        let file_path = self.store.path().to_string_lossy().to_string();
        let history_warning = match self.history.record(&splice.description, &content, &file_path) {
            Ok(()) => None,
            Err(e) => {
                log::warn!("{}; writing without a persisted snapshot", e);
                Some(e.to_string())
            }
        };

        if let Err(e) = self.store.write(&splice.content) {
            if let Err(discard) = self.history.discard_latest() {
                log::warn!("could not drop snapshot for failed write: {}", discard);
            }
            return Err(e);
        }

        log::info!("{} ({})", splice.description, file_path);
        Ok(AddOutcome {
            added_to: splice.placement,
            section_name: splice.section_name,
            message: splice.message,
            history_warning,
        })
    }

    /// History entries, newest first
    pub fn history(&self) -> Vec<&HistoryEntry> {
        self.history.list()
    }

    /// Restore the snapshot taken before the most recent change.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo_last_change(&mut self) -> Result<bool> {
        self.undo_to_point(0)
    }

    /// Restore the snapshot at `index` (0 = most recent) and discard it
    /// together with every newer entry.
    ///
    /// Entries recorded for another document are refused with
    /// [`Error::ForeignSnapshot`] and nothing is written. Once the document
    /// is restored, a failure to persist the shortened log only warns.
    pub fn undo_to_point(&mut self, index: usize) -> Result<bool> {
        let Some(entry) = self.history.get(index) else {
            return Ok(false);
        };
        let file_path = self.store.path().to_string_lossy().to_string();
        if let Some(foreign) = self
            .history
            .list()
            .into_iter()
            .take(index + 1)
            .find(|e| e.file_path != file_path)
        {
            return Err(Error::ForeignSnapshot {
                path: self.store.path().to_path_buf(),
                recorded: foreign.file_path.clone(),
            });
        }

        let description = entry.description.clone();
        let previous_content = entry.previous_content.clone();
        self.store.write(&previous_content)?;
        if let Err(e) = self.history.truncate_to_point(index) {
            log::warn!("{}; document restored but the log on disk is stale", e);
        }
        log::info!("restored state before '{}'", description);
        Ok(true)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }
}
