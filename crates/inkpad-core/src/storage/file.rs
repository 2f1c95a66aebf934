//! File-based storage implementation for native platforms.

use super::{KvStore, StorageError, StorageResult};
use std::fs;
use std::path::PathBuf;

/// File-backed store for native platforms.
///
/// Keeps one JSON file per key in a base directory.
pub struct FileStore {
    /// Base directory for the entry files.
    base_path: PathBuf,
}

impl FileStore {
    /// Create a file store over the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("Failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create a file store in the platform data directory.
    ///
    /// On Unix: `~/.local/share/inkpad/`
    /// On Windows: `%LOCALAPPDATA%\inkpad\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("Could not determine home directory".to_string()))?;

        Self::new(base.join("inkpad"))
    }

    /// Get the file path for a key.
    fn entry_path(&self, key: &str) -> PathBuf {
        // Sanitize the key to be safe for filenames
        let safe_key: String = key
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", safe_key))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.entry_path(key);
        fs::write(&path, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_and_get() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("inkpad.drawing", "[]").unwrap();
        assert_eq!(store.get("inkpad.drawing").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_sanitizes_key() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf()).unwrap();

        store.set("weird/key:with*chars", "value").unwrap();
        assert_eq!(
            store.get("weird/key:with*chars").unwrap().as_deref(),
            Some("value")
        );
        // The file on disk carries the sanitized name.
        assert!(dir.path().join("weird_key_with_chars.json").exists());
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileStore::new(nested.clone()).unwrap();
        assert!(nested.exists());
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));
    }
}
