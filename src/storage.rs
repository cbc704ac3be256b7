//! Document storage
//!
//! The engine always reads and writes the whole document through a
//! [`DocumentStore`]; it never keeps a handle to the live file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::StorageConfig;

/// Whole-document read/write access
pub trait DocumentStore {
    /// Path recorded in history entries
    fn path(&self) -> &Path;

    fn read_raw(&self) -> Result<String>;

    fn write(&mut self, text: &str) -> Result<()>;
}

/// A document on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    max_file_size: u64,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>, config: &StorageConfig) -> Self {
        Self {
            path: path.into(),
            max_file_size: config.max_file_size,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl DocumentStore for FileStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<String> {
        let metadata = std::fs::metadata(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: self.path.clone(),
            },
            _ => Error::Read {
                path: self.path.clone(),
                source,
            },
        })?;
        if !metadata.is_file() {
            return Err(Error::Read {
                path: self.path.clone(),
                source: std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
            });
        }
        if metadata.len() > self.max_file_size {
            return Err(Error::TooLarge {
                path: self.path.clone(),
                size: metadata.len(),
                max: self.max_file_size,
            });
        }
        std::fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let to_error = |source: std::io::Error| Error::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
        std::fs::write(&self.path, text).map_err(to_error)
    }
}

/// A document held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    path: PathBuf,
    content: String,
}

impl MemoryStore {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl DocumentStore for MemoryStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<String> {
        Ok(self.content.clone())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.content = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".zshrc");
        let mut store = FileStore::new(&path, &StorageConfig::default());
        assert!(!store.exists());

        store.write("alias ll='ls -la'\n").unwrap();
        assert!(store.exists());
        assert_eq!(store.read_raw().unwrap(), "alias ll='ls -la'\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("missing"), &StorageConfig::default());
        let err = store.read_raw().unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(err.is_read_error());
    }

    #[test]
    fn test_oversized_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let store = FileStore::new(&path, &StorageConfig { max_file_size: 16 });
        assert!(matches!(
            store.read_raw(),
            Err(Error::TooLarge { size: 64, max: 16, .. })
        ));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path(), &StorageConfig::default());
        assert!(matches!(store.read_raw(), Err(Error::Read { .. })));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new("/tmp/.zshrc", "a\n");
        assert_eq!(store.read_raw().unwrap(), "a\n");
        store.write("b\n").unwrap();
        assert_eq!(store.content(), "b\n");
    }
}
