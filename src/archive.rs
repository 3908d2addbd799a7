//! Archive storage: named lists of rows.
//!
//! An archive is an opaque key mapped to the rows of one import, stored one
//! row per line in the layout produced by [`Record::to_row`](crate::Record::to_row).
//! The engine never looks inside the store; it only receives the loaded rows.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by archive stores.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// No archive is stored under the key.
    #[error("archive '{key}' not found")]
    NotFound { key: String },

    /// Keys must be plain names usable as file stems.
    #[error("invalid archive key '{key}'")]
    InvalidKey { key: String },

    /// Filesystem failure while reading or writing.
    #[error("archive I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A key → rows store.
pub trait ArchiveStore {
    /// Stored keys, sorted.
    fn keys(&self) -> Result<Vec<String>, ArchiveError>;

    /// Rows stored under `key`, in the order they were saved.
    fn load(&self, key: &str) -> Result<Vec<String>, ArchiveError>;

    /// Store `rows` under `key`, replacing any previous archive.
    fn save(&mut self, key: &str, rows: &[String]) -> Result<(), ArchiveError>;
}

fn validate_key(key: &str) -> Result<(), ArchiveError> {
    if regex!(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").is_match(key) && !key.contains("..") {
        Ok(())
    } else {
        Err(ArchiveError::InvalidKey { key: key.to_string() })
    }
}

// --- In-memory ---------------------------------------------------------------

/// Store kept in memory; useful for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryArchive {
    archives: BTreeMap<String, Vec<String>>,
}

impl MemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArchiveStore for MemoryArchive {
    fn keys(&self) -> Result<Vec<String>, ArchiveError> {
        Ok(self.archives.keys().cloned().collect())
    }

    fn load(&self, key: &str) -> Result<Vec<String>, ArchiveError> {
        self.archives.get(key).cloned().ok_or_else(|| ArchiveError::NotFound { key: key.to_string() })
    }

    fn save(&mut self, key: &str, rows: &[String]) -> Result<(), ArchiveError> {
        validate_key(key)?;
        self.archives.insert(key.to_string(), rows.to_vec());
        Ok(())
    }
}

// --- Directory-backed --------------------------------------------------------

/// Store with one UTF-8 text file per archive inside a directory.
#[derive(Debug, Clone)]
pub struct DirArchive {
    root: PathBuf,
    extension: String,
}

impl DirArchive {
    /// Open (and create if needed) the archive directory `root`.
    pub fn open(root: impl Into<PathBuf>, extension: &str) -> Result<Self, ArchiveError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| ArchiveError::Io { path: root.clone(), source })?;
        Ok(DirArchive { root, extension: extension.trim_start_matches('.').to_string() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.{}", self.extension))
    }
}

impl ArchiveStore for DirArchive {
    fn keys(&self) -> Result<Vec<String>, ArchiveError> {
        let io_err = |source| ArchiveError::Io { path: self.root.clone(), source };
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if validate_key(stem).is_ok() => keys.push(stem.to_string()),
                _ => debug!(path = %path.display(), "ignoring file whose name is not an archive key"),
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn load(&self, key: &str) -> Result<Vec<String>, ArchiveError> {
        validate_key(key)?;
        let path = self.path_for(key);
        let text = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ArchiveError::NotFound { key: key.to_string() }
            } else {
                ArchiveError::Io { path: path.clone(), source }
            }
        })?;

        let rows: Vec<String> = text.lines().filter(|l| !l.trim().is_empty()).map(str::to_string).collect();
        debug!(key, rows = rows.len(), path = %path.display(), "archive loaded");
        Ok(rows)
    }

    fn save(&mut self, key: &str, rows: &[String]) -> Result<(), ArchiveError> {
        validate_key(key)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");

        // An existing archive is only replaced once the new contents are on disk.
        fs::write(&tmp, rows.join("\n")).map_err(|source| ArchiveError::Io { path: tmp.clone(), source })?;
        fs::rename(&tmp, &path).map_err(|source| ArchiveError::Io { path: path.clone(), source })?;

        info!(key, rows = rows.len(), path = %path.display(), "archive saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<String> {
        vec![
            "20240101001   1234  小小小小  单双单双".to_string(),
            "UNKNOWN       9999  大大大大  单单单单".to_string(),
        ]
    }

    #[test]
    fn keys_must_be_plain_names() {
        assert!(validate_key("2024-01").is_ok());
        assert!(validate_key("draws_v2.bak").is_ok());
        for bad in ["", "../etc", "a/b", ".hidden", "a..b", "with space"] {
            assert!(matches!(validate_key(bad), Err(ArchiveError::InvalidKey { .. })), "{bad}");
        }
    }

    #[test]
    fn memory_archive_round_trip() {
        let mut store = MemoryArchive::new();
        store.save("b", &rows()).unwrap();
        store.save("a", &[]).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
        assert_eq!(store.load("b").unwrap(), rows());
        assert!(matches!(store.load("c"), Err(ArchiveError::NotFound { .. })));
    }

    #[test]
    fn dir_archive_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirArchive::open(dir.path().join("archives"), "txt").unwrap();

        store.save("20240101", &rows()).unwrap();
        store.save("20231201", &rows()[..1]).unwrap();
        std::fs::write(store.root().join("notes.md"), "ignored").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["20231201", "20240101"]);
        assert_eq!(store.load("20240101").unwrap(), rows());
        assert_eq!(store.load("20231201").unwrap().len(), 1);
    }

    #[test]
    fn dir_archive_save_replaces_previous_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirArchive::open(dir.path(), ".txt").unwrap();
        store.save("k", &rows()).unwrap();
        store.save("k", &rows()[1..]).unwrap();
        assert_eq!(store.load("k").unwrap(), rows()[1..].to_vec());
        assert!(!store.root().join("k.tmp").exists());
    }

    #[test]
    fn dir_archive_lists_only_loadable_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DirArchive::open(dir.path(), "txt").unwrap();
        store.save("2024-q1", &rows()).unwrap();
        std::fs::write(store.root().join("my draws.txt"), "").unwrap();
        std::fs::write(store.root().join(".hidden.txt"), "").unwrap();

        let keys = store.keys().unwrap();
        assert_eq!(keys, vec!["2024-q1"]);
        for key in &keys {
            assert!(store.load(key).is_ok());
        }
    }

    #[test]
    fn dir_archive_missing_key_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirArchive::open(dir.path(), "txt").unwrap();
        assert!(matches!(store.load("nope"), Err(ArchiveError::NotFound { .. })));
        assert!(matches!(store.load("../nope"), Err(ArchiveError::InvalidKey { .. })));
    }
}
