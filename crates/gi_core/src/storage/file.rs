use std::collections::BTreeMap;
use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::StorageError;
use super::KeyValueStore;

pub const STORE_VERSION: u32 = 1;

/// On-disk document: versioned so the layout can be migrated later.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    /// Unix millis of the last flush.
    saved_at: i64,
    entries: BTreeMap<String, String>,
}

/// Key-value store backed by a single JSON document.
///
/// Mutations go to memory; `flush` persists the whole document with a
/// write-temp-then-rename so a crash mid-write leaves the previous
/// document intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading the existing document if there is
    /// one. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            Self::load_document(&path)?.entries
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persist the current entries atomically.
    pub fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let document = StoreDocument {
            version: STORE_VERSION,
            saved_at: chrono::Utc::now().timestamp_millis(),
            entries: self.entries.clone(),
        };
        let data = serde_json::to_vec_pretty(&document)?;

        // Atomic save: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("Flushed {} bytes to {:?}", data.len(), self.path);
        Ok(())
    }

    fn load_document(path: &Path) -> Result<StoreDocument, StorageError> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let document: StoreDocument = serde_json::from_slice(&data)?;
        if document.version != STORE_VERSION {
            return Err(StorageError::VersionMismatch {
                found: document.version,
                expected: STORE_VERSION,
            });
        }

        log::debug!("Loaded {} entries from {:?}", document.entries.len(), path);
        Ok(document)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}
